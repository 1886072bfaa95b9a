//! PostgreSQL-backed `EnrollmentRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EnrollmentRepository, EnrollmentRepositoryError};
use crate::domain::{Enrollment, UserId};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{AddressRow, EnrollmentRow, enrollment_from_rows};
use super::pool::{DbPool, PoolError};
use super::schema::{addresses, enrollments};

/// Diesel implementation of the enrollment lookup port.
#[derive(Clone)]
pub struct DieselEnrollmentRepository {
    pool: DbPool,
}

impl DieselEnrollmentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EnrollmentRepositoryError {
    map_basic_pool_error(error, |message| EnrollmentRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> EnrollmentRepositoryError {
    map_basic_diesel_error(
        error,
        |message| EnrollmentRepositoryError::query(message),
        |message| EnrollmentRepositoryError::connection(message),
    )
}

#[async_trait]
impl EnrollmentRepository for DieselEnrollmentRepository {
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Enrollment>, EnrollmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<(EnrollmentRow, Option<AddressRow>)> = enrollments::table
            .left_join(addresses::table)
            .filter(enrollments::user_id.eq(user_id.get()))
            .select((
                EnrollmentRow::as_select(),
                Option::<AddressRow>::as_select(),
            ))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(|(enrollment, address)| enrollment_from_rows(enrollment, address)))
    }
}
