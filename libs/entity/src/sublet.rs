use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use validator::{Validate, ValidationError};

use crate::user::AuthContext;

/// A property listing on the sublet marketplace.
#[derive(Debug, Default, PartialEq, Clone, Validate)]
#[validate(schema(function = "validate_sublet"))]
pub struct Sublet {
    pub id: Option<i64>,
    pub subletter: i64,
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,
    pub address: Option<String>,
    #[validate(range(max = 20))]
    pub beds: Option<u32>,
    #[validate(range(min = 0.0, max = 20.0))]
    pub baths: Option<f32>,
    pub description: Option<String>,
    #[validate(url(message = "external link must be a valid url"))]
    pub external_link: Option<String>,
    #[validate(range(
        min = 0.0,
        max = 99_999_999.99,
        message = "price is out of range"
    ))]
    pub price: f64,
    pub negotiable: bool,
    /// Absent when the backend sent nothing usable. Required on submit.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub expires_at: Option<DateTime<Utc>>,
    pub amenities: Vec<String>,
    pub images: Vec<SubletImage>,
    /// Set while a listing is claimed but not yet confirmed.
    pub pending: bool,
}

#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct SubletImage {
    pub id: i64,
    pub image_url: String,
}

#[derive(Debug, Default, PartialEq, Clone, Validate)]
pub struct Offer {
    pub id: Option<i64>,
    pub user: i64,
    pub sublet: i64,
    #[validate(email(message = "email must be valid"))]
    pub email: Option<String>,
    #[validate(length(min = 7, max = 20, message = "phone number is invalid"))]
    pub phone_number: String,
    pub message: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ListingState {
    Posted,
    Pending,
    Expired,
}

impl Sublet {
    /// A listing without an expiry never expires.
    pub fn state(&self, now: DateTime<Utc>) -> ListingState {
        if self.expires_at.is_some_and(|expires_at| expires_at < now) {
            ListingState::Expired
        } else if self.pending {
            ListingState::Pending
        } else {
            ListingState::Posted
        }
    }

    pub fn is_owned_by(&self, auth: &AuthContext) -> bool {
        auth.pennid() == Some(self.subletter)
    }

    /// Stay length in nights, when both dates are known.
    pub fn nights(&self) -> Option<i64> {
        Some((self.end_date? - self.start_date?).num_days())
    }
}

fn validate_sublet(sublet: &Sublet) -> Result<(), ValidationError> {
    let (Some(start_date), Some(end_date), Some(_)) =
        (sublet.start_date, sublet.end_date, sublet.expires_at)
    else {
        return Err(ValidationError::new("dates").with_message(Cow::Borrowed(
            "start date, end date and expiry are required",
        )));
    };
    if end_date < start_date {
        return Err(ValidationError::new("dates").with_message(Cow::Borrowed(
            "end date must be after start date",
        )));
    }

    let cents = sublet.price * 100.0;
    if (cents - cents.round()).abs() > 1e-6 {
        return Err(ValidationError::new("price").with_message(Cow::Borrowed(
            "price allows at most two decimal places",
        )));
    }

    Ok(())
}
