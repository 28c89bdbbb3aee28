//! Application Context
//!
//! Session and navigation state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::models::{AuthStatus, CurrentUser};

/// What the frontend knows about the session cookie
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStatus {
    /// No check has run yet
    Unknown,
    /// First `check_auth` request is in flight
    Checking,
    Authenticated(CurrentUser),
    Anonymous,
}

impl SessionStatus {
    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            SessionStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Map a `check_auth` result onto a session status.
///
/// Any failure counts as logged out.
pub fn session_from_check(result: Result<AuthStatus, ApiError>) -> SessionStatus {
    match result {
        Ok(AuthStatus {
            logged_in: true,
            user: Some(user),
        }) => SessionStatus::Authenticated(user),
        Ok(_) => SessionStatus::Anonymous,
        Err(err) => {
            log::warn!("[AUTH] Session check failed: {}", err);
            SessionStatus::Anonymous
        }
    }
}

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Generate,
    History,
    Favorites,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Landing => "/",
            Page::Generate => "/main",
            Page::History => "/previous-recipes",
            Page::Favorites => "/favorites",
        }
    }

    /// Unknown paths land on the entry page
    pub fn from_path(path: &str) -> Self {
        match path.trim_start_matches('#') {
            "/main" => Page::Generate,
            "/previous-recipes" => Page::History,
            "/favorites" => Page::Favorites,
            _ => Page::Landing,
        }
    }

    /// Page named by the current URL hash
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .map(|hash| Page::from_path(&hash))
            .unwrap_or(Page::Landing)
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Session state - read
    pub session: ReadSignal<SessionStatus>,
    /// Session state - write
    set_session: WriteSignal<SessionStatus>,
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// A session check is in flight
    checking: RwSignal<bool>,
}

impl AppContext {
    pub fn new(
        session: (ReadSignal<SessionStatus>, WriteSignal<SessionStatus>),
        page: (ReadSignal<Page>, WriteSignal<Page>),
    ) -> Self {
        Self {
            session: session.0,
            set_session: session.1,
            page: page.0,
            set_page: page.1,
            checking: RwSignal::new(false),
        }
    }

    /// Switch page and mirror it in the URL hash
    pub fn navigate(&self, page: Page) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_hash(page.path()) {
                log::warn!("[NAV] Could not set hash for {:?}: {:?}", page, err);
            }
        }
        self.set_page.set(page);
    }

    /// Re-check the session cookie with the backend.
    ///
    /// Dropped if a check is already in flight. A known user stays visible
    /// until the answer arrives; the status is then replaced wholesale.
    pub fn refresh_session(&self) {
        if self.checking.get_untracked() {
            return;
        }
        self.checking.set(true);
        if self.session.with_untracked(|session| session.user().is_none()) {
            self.set_session.set(SessionStatus::Checking);
        }
        let ctx = *self;
        spawn_local(async move {
            let status = session_from_check(api::check_auth().await);
            ctx.checking.set(false);
            ctx.set_session.set(status);
        });
    }

    pub fn set_user(&self, user: CurrentUser) {
        log::info!("[AUTH] Logged in as {}", user.name);
        self.set_session.set(SessionStatus::Authenticated(user));
    }

    pub fn clear_session(&self) {
        self.set_session.set(SessionStatus::Anonymous);
    }

    /// Drop the session and go back to the entry page without a message
    pub fn expire_session(&self) {
        log::info!("[AUTH] Session expired, returning to entry page");
        self.clear_session();
        self.navigate(Page::Landing);
    }

    /// Short-circuit auth failures to navigation.
    ///
    /// Returns true when `err` was handled that way.
    pub fn handle_auth_error(&self, err: &ApiError) -> bool {
        if err.is_auth_required() {
            self.expire_session();
            true
        } else {
            false
        }
    }

    /// Best-effort logout; the local session is cleared either way
    pub fn logout(&self) {
        let ctx = *self;
        spawn_local(async move {
            if let Err(err) = api::logout().await {
                log::error!("[AUTH] Logout error: {}", err);
            }
            ctx.clear_session();
            ctx.navigate(Page::Landing);
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> CurrentUser {
        CurrentUser {
            id: Some(1),
            name: name.to_string(),
            email: None,
        }
    }

    #[test]
    fn test_session_from_check() {
        let ok = session_from_check(Ok(AuthStatus {
            logged_in: true,
            user: Some(user("Ana")),
        }));
        assert_eq!(ok.user().map(|u| u.name.as_str()), Some("Ana"));

        let logged_out = session_from_check(Ok(AuthStatus {
            logged_in: false,
            user: None,
        }));
        assert_eq!(logged_out, SessionStatus::Anonymous);

        let failed = session_from_check(Err(ApiError::Rejected {
            status: 500,
            message: None,
        }));
        assert_eq!(failed, SessionStatus::Anonymous);
    }

    #[test]
    fn test_page_paths() {
        for page in [Page::Landing, Page::Generate, Page::History, Page::Favorites] {
            assert_eq!(Page::from_path(page.path()), page);
        }
        assert_eq!(Page::from_path("#/favorites"), Page::Favorites);
        assert_eq!(Page::from_path("/nowhere"), Page::Landing);
        assert_eq!(Page::from_path(""), Page::Landing);
    }
}
