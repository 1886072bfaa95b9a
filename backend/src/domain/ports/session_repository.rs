//! Port for login session lookup.

use async_trait::async_trait;

use crate::domain::Session;

use super::define_port_error;

define_port_error! {
    /// Errors raised by session repository adapters.
    pub enum SessionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "session repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "session repository query failed: {message}",
    }
}

/// Read access to persisted login sessions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Fetch the session created for `token`, if it is still on record.
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, SessionRepositoryError>;
}
