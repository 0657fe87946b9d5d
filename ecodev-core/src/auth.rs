//! Stub sign-in for the demo. Any non-empty credentials are accepted.

use crate::model::{User, UserId};

const DEMO_USER_ID: &str = "1";
const DEMO_USER_NAME: &str = "Usuário Demo";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
/// Errors returned by the stub sign-in.
pub enum AuthError {
    /// E-mail or password was left blank.
    #[error("E-mail and password are required")]
    MissingCredentials,
}

/// Sign in as the demo user.
///
/// # Errors
///
/// Returns [`AuthError::MissingCredentials`] when either field is blank.
pub fn login(email: &str, password: &str) -> Result<User, AuthError> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    tracing::info!(email = %email, "demo user signed in");
    Ok(User {
        id: UserId(DEMO_USER_ID.to_owned()),
        name: DEMO_USER_NAME.to_owned(),
        email: email.to_owned(),
    })
}
