//! Bearer-token authentication backed by persisted login sessions.
//!
//! A token is accepted only when its HS256 signature verifies against the
//! configured secret *and* a session row still exists for it. Signing in
//! happens elsewhere; [`SessionAuthenticator::issue_token`] exists so that
//! tooling and tests can mint tokens with the same claim layout.

use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ports::{Authenticator, SessionRepository, SessionRepositoryError};
use crate::domain::{Error, UserId};

const INVALID_SESSION_MESSAGE: &str = "invalid session";

/// Login session stored alongside the token it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: i32,
    pub user_id: UserId,
    pub token: String,
}

/// Claims carried by access tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenClaims {
    pub user_id: UserId,
}

/// [`Authenticator`] verifying JWT signatures and session presence.
pub struct SessionAuthenticator<S> {
    secret: String,
    sessions: Arc<S>,
}

impl<S> SessionAuthenticator<S> {
    /// Create an authenticator signing and verifying with `secret`.
    pub fn new(secret: impl Into<String>, sessions: Arc<S>) -> Self {
        Self {
            secret: secret.into(),
            sessions,
        }
    }

    /// Sign an access token for `user_id`.
    ///
    /// The token is only usable once a matching session row exists.
    pub fn issue_token(&self, user_id: UserId) -> Result<String, Error> {
        let claims = AccessTokenClaims { user_id };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|err| Error::internal(format!("failed to sign access token: {err}")))
    }

    fn verify(&self, token: &str) -> Result<AccessTokenClaims, Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        decode::<AccessTokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|err| {
            debug!(error = %err, "access token rejected");
            Error::unauthorized(INVALID_SESSION_MESSAGE)
        })
    }
}

fn map_session_error(error: SessionRepositoryError) -> Error {
    match error {
        SessionRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("session repository unavailable: {message}"))
        }
        SessionRepositoryError::Query { message } => {
            Error::internal(format!("session repository error: {message}"))
        }
    }
}

#[async_trait]
impl<S> Authenticator for SessionAuthenticator<S>
where
    S: SessionRepository,
{
    async fn authenticate(&self, token: &str) -> Result<UserId, Error> {
        let claims = self.verify(token)?;
        let session = self
            .sessions
            .find_by_token(token)
            .await
            .map_err(map_session_error)?;

        match session {
            Some(_) => Ok(claims.user_id),
            None => {
                debug!(user_id = %claims.user_id, "no session for access token");
                Err(Error::unauthorized(INVALID_SESSION_MESSAGE))
            }
        }
    }
}
