use chrono::{DateTime, NaiveDate, Utc};
use entity::prelude::*;

/// A partial update: every field that is set overwrites the target.
pub trait Patch<T> {
    fn apply_to(self, target: &mut T);
}

macro_rules! define_patch {
    ($name:ident for $entity:ty { $($field:ident: $ty:ty),* $(,)? }) => {
        #[derive(Debug, Default, Clone, PartialEq)]
        pub struct $name {
            $(pub $field: Option<$ty>,)*
        }

        impl Patch<$entity> for $name {
            fn apply_to(self, target: &mut $entity) {
                $(
                    if let Some(value) = self.$field {
                        target.$field = value;
                    }
                )*
            }
        }

        impl $name {
            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }

            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

define_patch!(PostPatch for PostEntity {
    club_code: String,
    title: String,
    subtitle: String,
    post_url: Option<String>,
    image_url: Option<String>,
    start_date: Option<DateTime<Utc>>,
    expire_date: Option<DateTime<Utc>>,
    target_populations: Vec<i64>,
    club_comment: Option<String>,
});

define_patch!(PollPatch for PollEntity {
    club_code: String,
    question: String,
    multiselect: bool,
    start_date: Option<DateTime<Utc>>,
    expire_date: Option<DateTime<Utc>>,
    target_populations: Vec<i64>,
    club_comment: Option<String>,
});

define_patch!(SubletPatch for SubletEntity {
    title: String,
    address: Option<String>,
    beds: Option<u32>,
    baths: Option<f32>,
    description: Option<String>,
    external_link: Option<String>,
    price: f64,
    negotiable: bool,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    expires_at: Option<DateTime<Utc>>,
    amenities: Vec<String>,
});
