use std::borrow::Cow;

use chrono::{DateTime, Utc};
use validator::ValidationError;

/// Expiry must not precede the start when both are set.
pub(crate) fn validate_schedule(
    start: Option<DateTime<Utc>>,
    expire: Option<DateTime<Utc>>,
) -> Result<(), ValidationError> {
    match (start, expire) {
        (Some(start), Some(expire)) if expire < start => Err(
            ValidationError::new("schedule").with_message(Cow::Borrowed(
                "expire date must be after start date",
            )),
        ),
        _ => Ok(()),
    }
}
