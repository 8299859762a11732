use chrono::{DateTime, Utc};
use entity::prelude::*;

use crate::status::set_statuses;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Column {
    Drafts,
    Revisions,
    Approved,
    Expired,
}

impl Column {
    /// Column an item with `status` is shown in. Pending and rejected items
    /// have no column.
    pub fn for_status(status: Status) -> Option<Self> {
        match status {
            Status::Draft => Some(Column::Drafts),
            Status::Revision => Some(Column::Revisions),
            Status::Approved | Status::Live => Some(Column::Approved),
            Status::Expired => Some(Column::Expired),
            Status::Pending | Status::Rejected => None,
        }
    }
}

/// Read-only projection of a derived list into side-by-side columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Columns<C> {
    pub drafts: Vec<C>,
    pub revisions: Vec<C>,
    pub approved: Vec<C>,
    pub expired: Vec<C>,
}

impl<C> Default for Columns<C> {
    fn default() -> Self {
        Self {
            drafts: Vec::new(),
            revisions: Vec::new(),
            approved: Vec::new(),
            expired: Vec::new(),
        }
    }
}

impl<C: Content> Columns<C> {
    /// Buckets `items` by status, keeping their order inside each column.
    pub fn group<I: IntoIterator<Item = C>>(items: I) -> Self {
        let mut columns = Self::default();
        for item in items {
            if let Some(column) = Column::for_status(item.status()) {
                columns.column_mut(column).push(item);
            }
        }
        columns
    }

    pub fn column(&self, column: Column) -> &[C] {
        match column {
            Column::Drafts => &self.drafts,
            Column::Revisions => &self.revisions,
            Column::Approved => &self.approved,
            Column::Expired => &self.expired,
        }
    }

    fn column_mut(&mut self, column: Column) -> &mut Vec<C> {
        match column {
            Column::Drafts => &mut self.drafts,
            Column::Revisions => &mut self.revisions,
            Column::Approved => &mut self.approved,
            Column::Expired => &mut self.expired,
        }
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
            + self.revisions.len()
            + self.approved.len()
            + self.expired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Posts and polls of one club, derived at `now` and grouped.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub posts: Columns<PostEntity>,
    pub polls: Columns<PollEntity>,
    pub generated_at: DateTime<Utc>,
}

impl Dashboard {
    pub fn build(
        posts: Vec<PostEntity>,
        polls: Vec<PollEntity>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            posts: Columns::group(set_statuses(posts, now)),
            polls: Columns::group(set_statuses(polls, now)),
            generated_at: now,
        }
    }
}
