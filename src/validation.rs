//! Form Validation
//!
//! Client-side checks run before any request is sent.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::PromptKind;

pub const MIN_PASSWORD_LEN: usize = 6;
/// Backend limit for ingredient lists
pub const MAX_INGREDIENTS_LEN: usize = 500;
/// Backend limit for dish names
pub const MAX_DISH_NAME_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Password,
    AgreeTerms,
    Prompt,
}

/// Per-field messages; empty means the form may be submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<Field, &'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.fields.get(&field).copied()
    }

    pub fn has(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    fn add(&mut self, field: Field, message: &'static str) {
        self.fields.entry(field).or_insert(message);
    }
}

/// Sign-up form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub agree_terms: bool,
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
}

fn check_email(errors: &mut FormErrors, email: &str) {
    if email.is_empty() {
        errors.add(Field::Email, "Email is required");
    } else if !email_pattern().is_match(email) {
        errors.add(Field::Email, "Email is invalid");
    }
}

pub fn validate_login(email: &str, password: &str) -> FormErrors {
    let mut errors = FormErrors::default();
    check_email(&mut errors, email);
    if password.is_empty() {
        errors.add(Field::Password, "Password is required");
    }
    errors
}

pub fn validate_signup(form: &SignupForm) -> FormErrors {
    let mut errors = FormErrors::default();
    if form.name.is_empty() {
        errors.add(Field::Name, "Name is required");
    }
    check_email(&mut errors, &form.email);
    if form.password.is_empty() {
        errors.add(Field::Password, "Password is required");
    } else if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.add(Field::Password, "Password must be at least 6 characters");
    }
    if !form.agree_terms {
        errors.add(Field::AgreeTerms, "You must agree to the terms");
    }
    errors
}

pub fn validate_prompt(kind: PromptKind, text: &str) -> FormErrors {
    let mut errors = FormErrors::default();
    let text = text.trim();
    let len = text.chars().count();
    if text.is_empty() {
        errors.add(Field::Prompt, "Please provide either ingredients or a dish name");
    } else if kind == PromptKind::Ingredients && len > MAX_INGREDIENTS_LEN {
        errors.add(
            Field::Prompt,
            "Ingredients list is too long. Please limit to 500 characters.",
        );
    } else if kind == PromptKind::DishName && len > MAX_DISH_NAME_LEN {
        errors.add(
            Field::Prompt,
            "Dish name is too long. Please limit to 100 characters.",
        );
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_fields() {
        let errors = validate_login("", "");
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
        assert!(validate_login("cook@example.com", "secret").is_empty());
    }

    #[test]
    fn test_email_shape() {
        assert_eq!(validate_login("cook", "x").get(Field::Email), Some("Email is invalid"));
        assert_eq!(validate_login("cook@host", "x").get(Field::Email), Some("Email is invalid"));
        assert!(!validate_login("a@b.co", "x").has(Field::Email));
    }

    #[test]
    fn test_signup_rules() {
        let mut form = SignupForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "12345".to_string(),
            agree_terms: false,
        };
        let errors = validate_signup(&form);
        assert_eq!(
            errors.get(Field::Password),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(errors.get(Field::AgreeTerms), Some("You must agree to the terms"));
        assert!(!errors.has(Field::Name));

        form.password = "123456".to_string();
        form.agree_terms = true;
        assert!(validate_signup(&form).is_empty());

        form.name.clear();
        assert_eq!(validate_signup(&form).get(Field::Name), Some("Name is required"));
    }

    #[test]
    fn test_prompt_limits() {
        assert!(validate_prompt(PromptKind::DishName, "   ").has(Field::Prompt));
        assert!(validate_prompt(PromptKind::DishName, "Tacos").is_empty());

        let long_name = "a".repeat(MAX_DISH_NAME_LEN + 1);
        assert!(validate_prompt(PromptKind::DishName, &long_name).has(Field::Prompt));
        // Same text is fine as an ingredient list
        assert!(validate_prompt(PromptKind::Ingredients, &long_name).is_empty());

        let long_list = "b".repeat(MAX_INGREDIENTS_LEN + 1);
        assert!(validate_prompt(PromptKind::Ingredients, &long_list).has(Field::Prompt));
    }

    #[test]
    fn test_prompt_limit_ignores_surrounding_whitespace() {
        // Exactly at the limit once trimmed, which is what gets sent
        let padded = format!("  {}\n", "c".repeat(MAX_DISH_NAME_LEN));
        assert!(validate_prompt(PromptKind::DishName, &padded).is_empty());

        let padded_over = format!(" {} ", "c".repeat(MAX_DISH_NAME_LEN + 1));
        assert!(validate_prompt(PromptKind::DishName, &padded_over).has(Field::Prompt));
    }
}
