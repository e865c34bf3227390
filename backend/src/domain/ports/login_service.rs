//! Driving port for admin authentication.
//!
//! Inbound adapters call it to authenticate credentials without knowing the
//! backing credential store, so handler tests can substitute a double.

use std::fmt;

use async_trait::async_trait;
use subtle::ConstantTimeEq;
use tracing::info;
use zeroize::Zeroizing;

use crate::domain::{AdminAccount, Error, LoginCredentials};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated operator.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<AdminAccount, Error>;
}

/// Single operator account configured at startup.
///
/// ```
/// use reverence::domain::ports::StaticLoginService;
///
/// let service = StaticLoginService::new("admin", "password");
/// assert_eq!(service.username(), "admin");
/// ```
#[derive(Clone)]
pub struct StaticLoginService {
    username: String,
    password: Zeroizing<String>,
}

impl StaticLoginService {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for StaticLoginService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticLoginService")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl LoginService for StaticLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<AdminAccount, Error> {
        let username = credentials.username().as_bytes().ct_eq(self.username.as_bytes());
        let password = credentials.password().as_bytes().ct_eq(self.password.as_bytes());
        if bool::from(username & password) {
            info!(username = %self.username, "admin signed in");
            Ok(AdminAccount::new(self.username.clone()))
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("curator", "tailored", true)]
    #[case("curator", "Tailored", false)]
    #[case("admin", "tailored", false)]
    #[case("curator", "tailor", false)]
    #[case("curator", "tailored-suit", false)]
    #[tokio::test]
    async fn only_the_configured_pair_is_accepted(
        #[case] username: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let service = StaticLoginService::new("curator", "tailored");
        let creds =
            LoginCredentials::try_from_parts(username, password).expect("credentials shape");
        match (should_succeed, service.authenticate(&creds).await) {
            (true, Ok(account)) => assert_eq!(account.username(), "curator"),
            (false, Err(err)) => assert_eq!(err.code(), ErrorCode::Unauthorized),
            (true, Err(err)) => panic!("expected success, got error: {err:?}"),
            (false, Ok(account)) => panic!("expected failure, got success: {account}"),
        }
    }

    #[rstest]
    fn debug_output_hides_the_password() {
        let rendered = format!("{:?}", StaticLoginService::new("curator", "tailored"));
        assert!(!rendered.contains("tailored"));
    }
}
