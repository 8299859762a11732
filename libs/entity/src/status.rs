use serde::{Deserialize, Serialize};

/// Review lifecycle of a post or poll.
///
/// Declaration order is the ordinal used by progress rendering. `Rejected`
/// sorts after `Expired` even though it is a terminal failure rather than a
/// later stage; callers comparing ordinals inherit that.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Draft = 0,
    Pending = 1,
    Revision = 2,
    Approved = 3,
    Live = 4,
    Expired = 5,
    Rejected = 6,
}

impl Status {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// True when `self` is at or past `threshold` in ordinal order.
    pub fn satisfies(self, threshold: Status) -> bool {
        self.ordinal() >= threshold.ordinal()
    }

    pub fn is_visible_in_app(self) -> bool {
        self == Status::Live
    }
}
