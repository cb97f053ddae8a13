//! Query façade over the user directory.
//!
//! Each operation translates the wire request, makes exactly one provider
//! call and translates the result back. Provider results are passed through
//! untouched: no re-filtering, re-sorting or deduplication happens here.

use crate::dto::user::{
    GetUserRequest, GetUsersRequest, GetUsersResponse, SearchUsersRequest, SearchUsersResponse,
    UserResponse, to_batch_ids_query, to_search_criteria, to_single_id_query, to_wire_user,
};
use crate::repository::UserReader;
use crate::services::{ServiceError, ServiceResult};

/// Looks up one user, failing with [`ServiceError::NotFound`] when absent.
pub fn retrieve_user_by_id<R>(repo: &R, request: &GetUserRequest) -> ServiceResult<UserResponse>
where
    R: UserReader + ?Sized,
{
    let id = to_single_id_query(request);

    let user = repo
        .get_user_by_id(id)
        .map_err(|err| {
            log::error!("Failed to retrieve user {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or_else(|| {
            log::debug!("User {id} not found");
            ServiceError::NotFound
        })?;

    Ok(to_wire_user(user))
}

/// Looks up a batch of users in a single provider call.
pub fn retrieve_users_by_ids<R>(
    repo: &R,
    request: GetUsersRequest,
) -> ServiceResult<GetUsersResponse>
where
    R: UserReader + ?Sized,
{
    let ids = to_batch_ids_query(request);

    let users = repo.get_users_by_ids(&ids).map_err(|err| {
        log::error!("Failed to retrieve {} users: {err}", ids.len());
        ServiceError::from(err)
    })?;

    if users.len() != ids.len() {
        log::debug!("Requested {} users, provider returned {}", ids.len(), users.len());
    }

    Ok(users.into())
}

/// Searches the directory by name, city and inclusive height range.
pub fn search_users<R>(repo: &R, request: SearchUsersRequest) -> ServiceResult<SearchUsersResponse>
where
    R: UserReader + ?Sized,
{
    let criteria = to_search_criteria(request);

    let users = repo.search_users(&criteria).map_err(|err| {
        log::error!("Failed to search users with {criteria:?}: {err}");
        ServiceError::from(err)
    })?;

    Ok(users.into())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::user::User;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn alice() -> User {
        User {
            id: 1,
            full_name: "Alice".to_string(),
            city: "New York".to_string(),
            phone: 1234567890,
            height: 5.5,
            married: false,
        }
    }

    fn bob() -> User {
        User {
            id: 2,
            full_name: "Bob".to_string(),
            city: "Los Angeles".to_string(),
            phone: 1234567890,
            height: 5.5,
            married: true,
        }
    }

    /// Single lookup returns every field with `married` exposed as `is_married`.
    #[test]
    fn retrieve_user_by_id_translates_user() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(Some(alice())));

        let resp = retrieve_user_by_id(&repo, &GetUserRequest { id: 1 }).expect("user exists");

        assert_eq!(
            resp,
            UserResponse {
                id: 1,
                full_name: "Alice".to_string(),
                city: "New York".to_string(),
                phone: 1234567890,
                height: 5.5,
                is_married: false,
            }
        );
    }

    /// Missing users surface as `NotFound`, never as a placeholder.
    #[test]
    fn retrieve_user_by_id_reports_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_id()
            .withf(|id| *id == 999)
            .times(1)
            .returning(|_| Ok(None));

        let result = retrieve_user_by_id(&repo, &GetUserRequest { id: 999 });

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    /// A provider-side `NotFound` error maps to the same failure.
    #[test]
    fn retrieve_user_by_id_maps_provider_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_id()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let result = retrieve_user_by_id(&repo, &GetUserRequest { id: 5 });

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    /// Other provider failures are forwarded unchanged.
    #[test]
    fn retrieve_user_by_id_propagates_provider_failure() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_id()
            .times(1)
            .returning(|_| Err(RepositoryError::ConnectionError("pool exhausted".to_string())));

        let result = retrieve_user_by_id(&repo, &GetUserRequest { id: 1 });

        match result {
            Err(ServiceError::Provider(RepositoryError::ConnectionError(message))) => {
                assert_eq!(message, "pool exhausted");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    /// Batch lookup is one call carrying the full id list, in order.
    #[test]
    fn retrieve_users_by_ids_keeps_provider_order() {
        let mut repo = MockRepository::new();
        repo.expect_get_users_by_ids()
            .withf(|ids| ids.to_vec() == vec![1, 2])
            .times(1)
            .returning(|_| Ok(vec![alice(), bob()]));

        let resp = retrieve_users_by_ids(&repo, GetUsersRequest { ids: vec![1, 2] })
            .expect("should list users");

        assert_eq!(resp.users.len(), 2);
        assert_eq!(resp.users[0].full_name, "Alice");
        assert!(!resp.users[0].is_married);
        assert_eq!(resp.users[1].full_name, "Bob");
        assert!(resp.users[1].is_married);
    }

    /// Fewer users than requested ids is still a success.
    #[test]
    fn retrieve_users_by_ids_accepts_partial_results() {
        let mut repo = MockRepository::new();
        repo.expect_get_users_by_ids()
            .withf(|ids| ids.to_vec() == vec![2, 42, 2])
            .times(1)
            .returning(|_| Ok(vec![bob()]));

        let resp = retrieve_users_by_ids(
            &repo,
            GetUsersRequest {
                ids: vec![2, 42, 2],
            },
        )
        .expect("partial result is valid");

        assert_eq!(resp.users.len(), 1);
        assert_eq!(resp.users[0].id, 2);
    }

    #[test]
    fn retrieve_users_by_ids_propagates_provider_failure() {
        let mut repo = MockRepository::new();
        repo.expect_get_users_by_ids()
            .times(1)
            .returning(|_| Err(RepositoryError::DatabaseError("disk I/O error".to_string())));

        let result = retrieve_users_by_ids(&repo, GetUsersRequest { ids: vec![1] });

        assert!(matches!(
            result,
            Err(ServiceError::Provider(RepositoryError::DatabaseError(_)))
        ));
    }

    /// Search hands the criteria through and returns the provider's list as-is.
    #[test]
    fn search_users_passes_criteria_and_results_through() {
        let mut repo = MockRepository::new();
        repo.expect_search_users()
            .withf(|criteria| {
                criteria.full_name_filter() == Some("Alice")
                    && criteria.city_filter() == Some("New York")
                    && criteria.min_height() == 0.0
                    && criteria.max_height() == 10.0
            })
            .times(1)
            .returning(|_| Ok(vec![alice(), bob()]));

        let resp = search_users(
            &repo,
            SearchUsersRequest {
                full_name: "Alice".to_string(),
                city: "New York".to_string(),
                min_height: 0.0,
                max_height: 10.0,
            },
        )
        .expect("should search users");

        // Bob does not match the filters but the façade must not re-filter.
        let names: Vec<_> = resp.users.iter().map(|u| u.full_name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    /// Zero matches is an empty success.
    #[test]
    fn search_users_with_no_matches_is_empty() {
        let mut repo = MockRepository::new();
        repo.expect_search_users()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let resp = search_users(
            &repo,
            SearchUsersRequest {
                full_name: String::new(),
                city: String::new(),
                min_height: 9.0,
                max_height: 1.0,
            },
        )
        .expect("empty result is valid");

        assert!(resp.users.is_empty());
    }
}
