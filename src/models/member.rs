//! Member model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Member model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub member_id: i32,
    pub member_first_name: String,
    pub member_last_name: String,
    pub phone_1: String,
    pub phone_2: Option<String>,
    pub street_1: String,
    pub street_2: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub created_date: DateTime<Utc>,
    pub changed_date: DateTime<Utc>,
}

/// Create member request
///
/// `state` and `country` are the stricter two-character variant; the columns
/// are CHAR(2) so the looser 255-char rule would only fail later at the
/// database layer.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMember {
    #[validate(length(min = 1, max = 255, message = "First name is required"))]
    pub member_first_name: String,
    #[validate(length(min = 1, max = 255, message = "Last name is required"))]
    pub member_last_name: String,
    #[validate(length(min = 1, max = 255, message = "Phone 1 is required"))]
    pub phone_1: String,
    pub phone_2: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Street 1 is required"))]
    pub street_1: String,
    pub street_2: Option<String>,
    #[validate(length(min = 1, max = 255, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 2, max = 2, message = "Please enter two characters for state"))]
    pub state: String,
    #[validate(length(min = 2, max = 2, message = "Please enter two characters for country"))]
    pub country: String,
    #[validate(length(min = 1, max = 255, message = "Zip code is required"))]
    pub zip_code: String,
    /// Defaults to the current time when omitted
    pub created_date: Option<DateTime<Utc>>,
    /// Defaults to the current time when omitted
    pub changed_date: Option<DateTime<Utc>>,
}

impl CreateMember {
    /// Validated fields in declared order, driving the order of failure
    /// messages on the wire
    pub const FIELD_ORDER: &'static [&'static str] = &[
        "member_first_name",
        "member_last_name",
        "phone_1",
        "street_1",
        "city",
        "state",
        "country",
        "zip_code",
    ];

    pub fn normalize(&mut self) {
        self.member_first_name = self.member_first_name.trim().to_string();
        self.member_last_name = self.member_last_name.trim().to_string();
        self.phone_1 = self.phone_1.trim().to_string();
        self.street_1 = self.street_1.trim().to_string();
        self.city = self.city.trim().to_string();
        self.state = self.state.trim().to_string();
        self.country = self.country.trim().to_string();
        self.zip_code = self.zip_code.trim().to_string();
    }
}

/// Update member request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMember {
    #[validate(length(min = 1, max = 255, message = "First name is required"))]
    pub member_first_name: String,
    #[validate(length(min = 1, max = 255, message = "Last name is required"))]
    pub member_last_name: String,
    #[validate(length(min = 1, max = 255, message = "Phone 1 is required"))]
    pub phone_1: String,
    pub phone_2: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Street 1 is required"))]
    pub street_1: String,
    pub street_2: Option<String>,
    #[validate(length(min = 1, max = 255, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 2, max = 2, message = "Please enter two characters for state"))]
    pub state: String,
    #[validate(length(min = 2, max = 2, message = "Please enter two characters for country"))]
    pub country: String,
    #[validate(length(min = 1, max = 255, message = "Zip code is required"))]
    pub zip_code: String,
    /// Defaults to the current time when omitted
    pub changed_date: Option<DateTime<Utc>>,
}

impl UpdateMember {
    pub const FIELD_ORDER: &'static [&'static str] = &[
        "member_first_name",
        "member_last_name",
        "phone_1",
        "street_1",
        "city",
        "state",
        "country",
        "zip_code",
    ];

    pub fn normalize(&mut self) {
        self.member_first_name = self.member_first_name.trim().to_string();
        self.member_last_name = self.member_last_name.trim().to_string();
        self.phone_1 = self.phone_1.trim().to_string();
        self.street_1 = self.street_1.trim().to_string();
        self.city = self.city.trim().to_string();
        self.state = self.state.trim().to_string();
        self.country = self.country.trim().to_string();
        self.zip_code = self.zip_code.trim().to_string();
    }
}
