use entity::prelude::*;

/// One segment of the review progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub label: &'static str,
    pub threshold: Status,
    pub reached: bool,
}

const STEPS: [(&str, Status); 5] = [
    ("Draft", Status::Draft),
    ("Submitted", Status::Pending),
    ("Approved", Status::Approved),
    ("Live", Status::Live),
    ("Expired", Status::Expired),
];

/// Progress bar for `status`, using plain ordinal comparison. A rejected
/// item therefore shows every step reached.
pub fn progress(status: Status) -> Vec<Step> {
    STEPS
        .iter()
        .map(|&(label, threshold)| Step {
            label,
            threshold,
            reached: status.satisfies(threshold),
        })
        .collect()
}
