//! Repository implementation for users.

use diesel::prelude::*;

use crate::domain::types::UserId;
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::models::user::{
    NewUser as DbNewUser, UpdateUser as DbUpdateUser, User as DbUser,
};
use crate::repository::{
    DieselRepository, RepositoryError, RepositoryResult, UserReader, UserWriter, ensure_found,
};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let user = users::table
            .find(id.get())
            .select(DbUser::as_select())
            .first(&mut conn)
            .optional()?;

        user.map(User::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_users(&self) -> RepositoryResult<Vec<User>> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let users = users::table
            .order(users::id.asc())
            .select(DbUser::as_select())
            .load(&mut conn)?;

        users
            .into_iter()
            .map(|user| User::try_from(user).map_err(RepositoryError::from))
            .collect()
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let insertable = DbNewUser::from(new_user);

        let user = diesel::insert_into(users::table)
            .values(&insertable)
            .returning(DbUser::as_returning())
            .get_result(&mut conn)?;

        Ok(User::try_from(user)?)
    }

    fn update_user(&self, id: UserId, updates: &UpdateUser) -> RepositoryResult<User> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let changes = DbUpdateUser::from(updates);

        let user = diesel::update(users::table.find(id.get()))
            .set(&changes)
            .returning(DbUser::as_returning())
            .get_result(&mut conn)?;

        Ok(User::try_from(user)?)
    }

    fn delete_user(&self, id: UserId) -> RepositoryResult<()> {
        use crate::schema::{user_profiles, users};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(user_profiles::table.find(id.get())).execute(conn)?;
            ensure_found(diesel::delete(users::table.find(id.get())).execute(conn)?)
        })
    }
}
