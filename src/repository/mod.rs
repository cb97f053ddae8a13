//! Directory provider contract and its Diesel implementation.

use crate::db::{DbConnection, DbPool};
use crate::domain::user::{NewUser, SearchCriteria, User};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod user;

/// Read side of the user directory.
pub trait UserReader {
    /// Returns `None` when no user carries the identifier.
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    /// May return fewer users than requested identifiers.
    fn get_users_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<User>>;
    /// Zero matches is an empty list, never an error.
    fn search_users(&self, criteria: &SearchCriteria) -> RepositoryResult<Vec<User>>;
}

pub trait UserWriter {
    fn create_users(&self, new_users: &[NewUser]) -> RepositoryResult<usize>;
}

/// Diesel-backed provider sharing a pooled SQLite connection.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}
