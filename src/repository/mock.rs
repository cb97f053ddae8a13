//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::user::{NewUser, SearchCriteria, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{UserReader, UserWriter};

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_users_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<User>>;
        fn search_users(&self, criteria: &SearchCriteria) -> RepositoryResult<Vec<User>>;
    }

    impl UserWriter for Repository {
        fn create_users(&self, new_users: &[NewUser]) -> RepositoryResult<usize>;
    }
}
