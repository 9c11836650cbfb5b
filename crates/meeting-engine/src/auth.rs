//! Login status checks guarding the comment write path.

use serde::{Deserialize, Serialize};

use crate::comments::{split_comment_input, CommentStore};
use crate::error::{EngineError, Result};

/// Default base URL of the external login flow.
pub const DEFAULT_LOGIN_URL: &str = "/_ah/login";

/// Source of the current user's identity.
pub trait Authenticator {
    fn current_user(&self) -> Option<String>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// URL that sends the user through login and back to `redirect`.
    fn login_url(&self, redirect: &str) -> String;
}

/// Login state as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoginStatus {
    LoggedIn { user: String },
    LoggedOut { login_url: String },
}

impl LoginStatus {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, LoginStatus::LoggedIn { .. })
    }
}

pub fn login_status<A: Authenticator + ?Sized>(auth: &A, redirect: &str) -> LoginStatus {
    match auth.current_user() {
        Some(user) => LoginStatus::LoggedIn { user },
        None => LoginStatus::LoggedOut {
            login_url: auth.login_url(redirect),
        },
    }
}

/// Authenticator with a fixed identity.
#[derive(Debug, Clone)]
pub struct StaticAuthenticator {
    user: Option<String>,
    login_base: String,
}

impl StaticAuthenticator {
    pub fn logged_in(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            login_base: DEFAULT_LOGIN_URL.to_string(),
        }
    }

    pub fn logged_out() -> Self {
        Self {
            user: None,
            login_base: DEFAULT_LOGIN_URL.to_string(),
        }
    }

    pub fn with_login_base(mut self, base: impl Into<String>) -> Self {
        self.login_base = base.into();
        self
    }
}

impl Authenticator for StaticAuthenticator {
    fn current_user(&self) -> Option<String> {
        self.user.clone()
    }

    fn login_url(&self, redirect: &str) -> String {
        format!("{}?continue={}", self.login_base, redirect)
    }
}

/// Store each comma-separated entry of `raw_input` as a comment authored by
/// the logged-in user. Returns how many comments were stored.
///
/// Entries go to the store as one [`CommentStore::append_all`] batch.
///
/// # Errors
/// Returns `EngineError::NotAuthenticated` when nobody is logged in. Nothing
/// is written in that case.
pub fn post_comments<S, A>(store: &S, auth: &A, raw_input: &str, redirect: &str) -> Result<usize>
where
    S: CommentStore + ?Sized,
    A: Authenticator + ?Sized,
{
    let user = match login_status(auth, redirect) {
        LoginStatus::LoggedIn { user } => user,
        LoginStatus::LoggedOut { login_url } => {
            tracing::info!("rejected comment from anonymous visitor");
            return Err(EngineError::NotAuthenticated { login_url });
        }
    };

    let entries = split_comment_input(raw_input);
    let stored = store.append_all(&entries, Some(&user))?;
    tracing::debug!(count = stored, user = %user, "stored comments");
    Ok(stored)
}
