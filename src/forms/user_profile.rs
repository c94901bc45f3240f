//! Form for the extra contact details stored next to a user.

use chrono::NaiveDate;

use crate::domain::types::{Address, PhoneNumber, UserId};
use crate::domain::user_profile::UserProfile;
use crate::forms::FormError;
use crate::forms::schema::{FieldKind, FieldMessages, FieldSpec, FormInput, FormSchema};

static USER_PROFILE_FIELDS: [FieldSpec; 3] = [
    FieldSpec::new("phone_number", FieldKind::Phone)
        .max_length(15)
        .messages(FieldMessages {
            required: "Enter a phone number.",
            max_length: "Phone number must be at most 15 characters.",
            invalid: "Enter a valid phone number.",
        }),
    FieldSpec::text("address", 100).messages(FieldMessages {
        required: "Enter an address.",
        max_length: "Address must be at most 100 characters.",
        invalid: "Enter a valid address.",
    }),
    FieldSpec::new("date_of_birth", FieldKind::Date).messages(FieldMessages {
        required: "Enter a date of birth.",
        max_length: "Enter a valid date.",
        invalid: "Enter a valid date (YYYY-MM-DD).",
    }),
];

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfileForm {
    pub phone_number: PhoneNumber,
    pub address: Address,
    pub date_of_birth: NaiveDate,
}

impl UserProfileForm {
    pub fn schema() -> Result<FormSchema, FormError> {
        Ok(FormSchema::new(&USER_PROFILE_FIELDS)?)
    }

    pub fn parse(input: &FormInput) -> Result<Self, FormError> {
        let cleaned = Self::schema()?.validate(input)?;

        let date_of_birth = cleaned.required_date("date_of_birth")?;

        Ok(Self {
            phone_number: PhoneNumber::new(cleaned.text("phone_number").unwrap_or_default())?,
            address: Address::new(cleaned.text("address").unwrap_or_default())?,
            date_of_birth,
        })
    }

    pub fn into_profile(self, user_id: UserId) -> UserProfile {
        UserProfile {
            user_id,
            phone_number: self.phone_number,
            address: self.address,
            date_of_birth: self.date_of_birth,
        }
    }
}
