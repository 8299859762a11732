use std::{borrow::Cow, collections::HashSet};

use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};

use crate::{content::impl_content, schedule::validate_schedule, status::Status};

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 6;

#[derive(Debug, Default, PartialEq, Clone, Validate)]
#[validate(schema(function = "validate_poll"))]
pub struct Poll {
    pub id: Option<i64>,
    pub club_code: String,
    #[validate(length(min = 1, message = "question is required"))]
    pub question: String,
    #[validate(nested)]
    pub options: Vec<PollOption>,
    pub multiselect: bool,
    pub status: Status,
    pub start_date: Option<DateTime<Utc>>,
    pub expire_date: Option<DateTime<Utc>>,
    /// Empty means every user.
    pub target_populations: Vec<i64>,
    pub club_comment: Option<String>,
    pub admin_comment: Option<String>,
}

/// One answer of a poll. `id` is unique within its poll.
#[derive(Debug, Default, PartialEq, Eq, Clone, Validate)]
pub struct PollOption {
    pub id: i64,
    #[validate(length(min = 1, message = "option text is required"))]
    pub choice: String,
    pub vote_count: i64,
}

impl PollOption {
    pub fn new(id: i64, choice: impl Into<String>) -> Self {
        Self {
            id,
            choice: choice.into(),
            vote_count: 0,
        }
    }
}

impl Poll {
    pub fn option(&self, id: i64) -> Option<&PollOption> {
        self.options.iter().find(|option| option.id == id)
    }

    pub fn total_votes(&self) -> i64 {
        self.options.iter().map(|option| option.vote_count).sum()
    }

    /// Two blank options, the shape of a freshly opened poll form.
    pub fn blank(club_code: impl Into<String>) -> Self {
        Self {
            club_code: club_code.into(),
            options: vec![PollOption::new(0, ""), PollOption::new(1, "")],
            ..Default::default()
        }
    }
}

impl_content!(Poll);

fn validate_poll(poll: &Poll) -> Result<(), ValidationError> {
    validate_schedule(poll.start_date, poll.expire_date)?;

    if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&poll.options.len()) {
        return Err(ValidationError::new("options").with_message(Cow::Borrowed(
            "polls need between 2 and 6 options",
        )));
    }

    let mut seen = HashSet::new();
    if poll.options.iter().any(|option| !seen.insert(option.id)) {
        return Err(ValidationError::new("options")
            .with_message(Cow::Borrowed("option ids must be unique")));
    }

    Ok(())
}
