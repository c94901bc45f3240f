use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::types::{Address, PhoneNumber, TypeConstraintError, UserId};
use crate::domain::user_profile::UserProfile as DomainUserProfile;

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::user_profiles)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserProfile {
    pub user_id: i32,
    pub phone_number: String,
    pub address: String,
    pub date_of_birth: NaiveDate,
}

impl TryFrom<UserProfile> for DomainUserProfile {
    type Error = TypeConstraintError;

    fn try_from(profile: UserProfile) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: UserId::new(profile.user_id)?,
            phone_number: PhoneNumber::new(profile.phone_number)?,
            address: Address::new(profile.address)?,
            date_of_birth: profile.date_of_birth,
        })
    }
}

impl From<&DomainUserProfile> for UserProfile {
    fn from(profile: &DomainUserProfile) -> Self {
        Self {
            user_id: profile.user_id.get(),
            phone_number: profile.phone_number.as_str().to_string(),
            address: profile.address.as_str().to_string(),
            date_of_birth: profile.date_of_birth,
        }
    }
}
