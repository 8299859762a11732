use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use entity::prelude::*;

/// Rewrites time-driven statuses and orders items for display.
///
/// Past `expire_date` wins over everything, then approved items whose
/// `start_date` has arrived go live. The result is sorted by `start_date`,
/// latest first with undated items last, and live items are pinned to the
/// front. Both orderings are stable.
pub fn set_statuses<C, I>(items: I, now: DateTime<Utc>) -> Vec<C>
where
    C: Content,
    I: IntoIterator<Item = C>,
{
    let mut items: Vec<C> = items
        .into_iter()
        .map(|mut item| {
            if let Some(status) = derive_status(&item, now) {
                item.set_status(status);
            }
            item
        })
        .collect();

    items.sort_by(|a, b| latest_start_first(a.start_date(), b.start_date()));

    let (mut live, rest): (Vec<C>, Vec<C>) = items
        .into_iter()
        .partition(|item| item.status() == Status::Live);
    live.extend(rest);

    live
}

/// The status `item` should carry at `now`, if it differs from the stored
/// one.
pub fn derive_status<C: Content>(item: &C, now: DateTime<Utc>) -> Option<Status> {
    let current = item.status();

    let derived = if item.is_expired_at(now) {
        Status::Expired
    } else if current == Status::Approved && item.has_started_at(now) {
        Status::Live
    } else {
        current
    };

    (derived != current).then_some(derived)
}

fn latest_start_first(
    a: Option<DateTime<Utc>>,
    b: Option<DateTime<Utc>>,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
