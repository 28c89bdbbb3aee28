//! UI Components
//!
//! Reusable Leptos components.

mod favorite_button;
mod form_fields;
mod generated_recipe_panel;
mod login_form;
mod page_header;
mod recipe_board;
mod recipe_card;
mod recipe_detail_modal;
mod recipe_sections;
mod recipe_sidebar;
mod require_session;
mod signup_form;
mod status_screen;

pub use favorite_button::FavoriteButton;
pub use generated_recipe_panel::GeneratedRecipePanel;
pub use login_form::LoginForm;
pub use page_header::PageHeader;
pub use recipe_board::{apply_settlement, ListingMode, RecipeBoardView};
pub use recipe_card::RecipeCard;
pub use recipe_detail_modal::RecipeDetailModal;
pub use recipe_sections::{RecipeSections, TutorialList};
pub use recipe_sidebar::{RecipeSidebar, SidebarLoad, SidebarTab};
pub use require_session::RequireSession;
pub use signup_form::SignupForm;
pub use status_screen::{ErrorScreen, StatusScreen};
