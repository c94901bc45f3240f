use diesel::prelude::*;

use crate::domain::types::UserId;
use crate::domain::user_profile::UserProfile;
use crate::models::user_profile::UserProfile as DbUserProfile;
use crate::repository::{
    DieselRepository, RepositoryError, RepositoryResult, UserProfileReader, UserProfileWriter,
};

impl UserProfileReader for DieselRepository {
    fn get_user_profile(&self, user_id: UserId) -> RepositoryResult<Option<UserProfile>> {
        use crate::schema::user_profiles;

        let mut conn = self.conn()?;

        let profile = user_profiles::table
            .find(user_id.get())
            .select(DbUserProfile::as_select())
            .first(&mut conn)
            .optional()?;

        profile
            .map(UserProfile::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }
}

impl UserProfileWriter for DieselRepository {
    fn save_user_profile(&self, profile: &UserProfile) -> RepositoryResult<UserProfile> {
        use crate::schema::user_profiles;

        let mut conn = self.conn()?;
        let row = DbUserProfile::from(profile);

        let saved = diesel::insert_into(user_profiles::table)
            .values(&row)
            .on_conflict(user_profiles::user_id)
            .do_update()
            .set(&row)
            .returning(DbUserProfile::as_returning())
            .get_result(&mut conn)?;

        Ok(UserProfile::try_from(saved)?)
    }
}
