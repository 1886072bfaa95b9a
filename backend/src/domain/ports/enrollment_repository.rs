//! Port for reading enrollments.

use async_trait::async_trait;

use crate::domain::{Enrollment, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by enrollment repository adapters.
    pub enum EnrollmentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "enrollment repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "enrollment repository query failed: {message}",
    }
}

/// Read access to user enrollments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Fetch the enrollment owned by `user_id`, including its address.
    ///
    /// Returns `None` when the user has not enrolled.
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Enrollment>, EnrollmentRepositoryError>;
}
