//! Extra contact details attached one-to-one to a [`User`](crate::domain::user::User).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Address, PhoneNumber, UserId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub user_id: UserId,
    pub phone_number: PhoneNumber,
    pub address: Address,
    pub date_of_birth: NaiveDate,
}
