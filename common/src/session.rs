//! Sign-in gate. No credential verification: any non-empty pair is accepted
//! and the session lives only as long as the page.

use tracing::{debug, info};

use crate::error::LoginError;

/// Contents of the sign-in form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// A signed-in user, identified only by the email they typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    /// Accept the credentials if both fields are non-empty. Whitespace is
    /// not trimmed.
    pub fn authenticate(&self) -> Result<Session, LoginError> {
        if self.email.is_empty() || self.password.is_empty() {
            debug!("sign-in rejected: missing credentials");
            return Err(LoginError::MissingCredentials);
        }
        info!(email = %self.email, "signed in");
        Ok(Session { email: self.email.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_rejected() {
        for (email, password) in [("", ""), ("a@b.in", ""), ("", "secret")] {
            let err = Credentials::new(email, password).authenticate().unwrap_err();
            assert_eq!(err, LoginError::MissingCredentials);
            assert_eq!(err.to_string(), "Please enter both email and password.");
        }
    }

    #[test]
    fn test_any_non_empty_pair_accepted() {
        let session = Credentials::new("officer@kerala.gov.in", "x").authenticate().unwrap();
        assert_eq!(session.email, "officer@kerala.gov.in");
        assert!(Credentials::new(" ", " ").authenticate().is_ok());
    }
}
