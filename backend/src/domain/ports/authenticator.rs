//! Driving port resolving bearer tokens into users.

use async_trait::async_trait;

use crate::domain::{Error, UserId};

/// Use-case port turning a bearer token into the authenticated user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Resolve the user owning `token`.
    ///
    /// # Errors
    ///
    /// Unauthorized when the token is invalid or has no live session.
    async fn authenticate(&self, token: &str) -> Result<UserId, Error>;
}

/// Token accepted by [`FixtureAuthenticator`].
pub const FIXTURE_TOKEN: &str = "fixture-token";

/// User returned by [`FixtureAuthenticator`].
pub const FIXTURE_USER_ID: UserId = UserId::new(1);

/// Fixture authenticator accepting only [`FIXTURE_TOKEN`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAuthenticator;

#[async_trait]
impl Authenticator for FixtureAuthenticator {
    async fn authenticate(&self, token: &str) -> Result<UserId, Error> {
        if token == FIXTURE_TOKEN {
            Ok(FIXTURE_USER_ID)
        } else {
            Err(Error::unauthorized("invalid session"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(FIXTURE_TOKEN, true)]
    #[case("other", false)]
    #[tokio::test]
    async fn fixture_accepts_only_its_token(#[case] token: &str, #[case] accepted: bool) {
        let result = FixtureAuthenticator.authenticate(token).await;
        match result {
            Ok(user_id) => {
                assert!(accepted);
                assert_eq!(user_id, FIXTURE_USER_ID);
            }
            Err(err) => {
                assert!(!accepted);
                assert_eq!(err.code(), ErrorCode::Unauthorized);
            }
        }
    }
}
