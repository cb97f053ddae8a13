//! Wire shapes of the `user_management.UserService` surface and their
//! translation to and from domain values.
//!
//! Every conversion here is total and free of side effects. The only renamed
//! field is `married`, which travels as `isMarried`.

use serde::{Deserialize, Serialize};

use crate::domain::user::{SearchCriteria, User};

/// Request body of `RetrieveUserById`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetUserRequest {
    pub id: i32,
}

/// Request body of `RetrieveUsersByIds`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetUsersRequest {
    #[serde(default)]
    pub ids: Vec<i32>,
}

/// Request body of `SearchUsers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchUsersRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub city: String,
    pub min_height: f64,
    pub max_height: f64,
}

/// A single user as returned over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub full_name: String,
    pub city: String,
    pub phone: i64,
    pub height: f64,
    pub is_married: bool,
}

/// Response body of `RetrieveUsersByIds`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GetUsersResponse {
    pub users: Vec<UserResponse>,
}

/// Response body of `SearchUsers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchUsersResponse {
    pub users: Vec<UserResponse>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            city: user.city,
            phone: user.phone,
            height: user.height,
            is_married: user.married,
        }
    }
}

impl From<SearchUsersRequest> for SearchCriteria {
    fn from(request: SearchUsersRequest) -> Self {
        SearchCriteria::new(
            request.full_name,
            request.city,
            request.min_height,
            request.max_height,
        )
    }
}

impl From<Vec<User>> for GetUsersResponse {
    fn from(users: Vec<User>) -> Self {
        Self {
            users: to_wire_user_list(users),
        }
    }
}

impl From<Vec<User>> for SearchUsersResponse {
    fn from(users: Vec<User>) -> Self {
        Self {
            users: to_wire_user_list(users),
        }
    }
}

/// Extracts the identifier; any value, including non-positive ones, passes through.
pub fn to_single_id_query(request: &GetUserRequest) -> i32 {
    request.id
}

/// Extracts the identifiers, keeping order and duplicates.
pub fn to_batch_ids_query(request: GetUsersRequest) -> Vec<i32> {
    request.ids
}

pub fn to_search_criteria(request: SearchUsersRequest) -> SearchCriteria {
    request.into()
}

pub fn to_wire_user(user: User) -> UserResponse {
    user.into()
}

pub fn to_wire_user_list(users: Vec<User>) -> Vec<UserResponse> {
    users.into_iter().map(to_wire_user).collect()
}
