use diesel::prelude::*;

use crate::domain::user::{NewUser as DomainNewUser, User as DomainUser};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
/// Diesel model for [`crate::domain::user::User`].
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub city: String,
    pub phone: i64,
    pub height: f64,
    pub married: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
/// Insertable form of [`User`].
pub struct NewUser<'a> {
    pub full_name: &'a str,
    pub city: &'a str,
    pub phone: i64,
    pub height: f64,
    pub married: bool,
}

impl From<User> for DomainUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            city: user.city,
            phone: user.phone,
            height: user.height,
            married: user.married,
        }
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(user: &'a DomainNewUser) -> Self {
        Self {
            full_name: &user.full_name,
            city: &user.city,
            phone: user.phone,
            height: user.height,
            married: user.married,
        }
    }
}
