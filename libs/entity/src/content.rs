use chrono::{DateTime, Utc};

use crate::status::Status;

/// Anything that moves through the review lifecycle and is scheduled by a
/// start and expire date.
pub trait Content {
    fn status(&self) -> Status;
    fn set_status(&mut self, status: Status);
    fn start_date(&self) -> Option<DateTime<Utc>>;
    fn expire_date(&self) -> Option<DateTime<Utc>>;

    fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expire_date().is_some_and(|expire| expire < now)
    }

    fn has_started_at(&self, now: DateTime<Utc>) -> bool {
        self.start_date().is_some_and(|start| start <= now)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ContentKind {
    Post,
    Poll,
}

macro_rules! impl_content {
    ($entity:ty) => {
        impl $crate::content::Content for $entity {
            fn status(&self) -> $crate::status::Status {
                self.status
            }

            fn set_status(&mut self, status: $crate::status::Status) {
                self.status = status;
            }

            fn start_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.start_date
            }

            fn expire_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.expire_date
            }
        }
    };
}

pub(crate) use impl_content;
