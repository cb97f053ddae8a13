use std::collections::HashMap;

use diesel::prelude::*;

use crate::domain::user::{NewUser, SearchCriteria, User};
use crate::models::user::{NewUser as DbNewUser, User as DbUser};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, UserReader, UserWriter};
use crate::schema::users;

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>> {
        let mut conn = self.conn()?;

        let user = users::table
            .find(id)
            .select(DbUser::as_select())
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }

    fn get_users_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;

        let found: HashMap<i32, User> = users::table
            .filter(users::id.eq_any(ids))
            .select(DbUser::as_select())
            .load::<DbUser>(&mut conn)?
            .into_iter()
            .map(|row| (row.id, row.into()))
            .collect();

        // Follow the requested order; unknown ids are dropped, repeats are kept.
        Ok(ids.iter().filter_map(|id| found.get(id).cloned()).collect())
    }

    fn search_users(&self, criteria: &SearchCriteria) -> RepositoryResult<Vec<User>> {
        let mut conn = self.conn()?;

        let mut query = users::table.select(DbUser::as_select()).into_boxed();

        if let Some(full_name) = criteria.full_name_filter() {
            query = query.filter(users::full_name.eq(full_name));
        }
        if let Some(city) = criteria.city_filter() {
            query = query.filter(users::city.eq(city));
        }

        let items = query
            .filter(
                users::height
                    .ge(criteria.min_height())
                    .and(users::height.le(criteria.max_height())),
            )
            .order(users::id.asc())
            .load::<DbUser>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl UserWriter for DieselRepository {
    fn create_users(&self, new_users: &[NewUser]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let insertables: Vec<DbNewUser> = new_users.iter().map(Into::into).collect();
        let affected = diesel::insert_into(users::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
