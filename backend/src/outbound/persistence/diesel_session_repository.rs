//! PostgreSQL-backed `SessionRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Session;
use crate::domain::ports::{SessionRepository, SessionRepositoryError};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::SessionRow;
use super::pool::{DbPool, PoolError};
use super::schema::sessions;

/// Diesel implementation of the session lookup used by bearer auth.
#[derive(Clone)]
pub struct DieselSessionRepository {
    pool: DbPool,
}

impl DieselSessionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SessionRepositoryError {
    map_basic_pool_error(error, |message| SessionRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> SessionRepositoryError {
    map_basic_diesel_error(
        error,
        |message| SessionRepositoryError::query(message),
        |message| SessionRepositoryError::connection(message),
    )
}

#[async_trait]
impl SessionRepository for DieselSessionRepository {
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, SessionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<SessionRow> = sessions::table
            .filter(sessions::token.eq(token))
            .select(SessionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Session::from))
    }
}
