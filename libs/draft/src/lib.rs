//! Client-side form state: patch-merged drafts, poll option editing and
//! the write plan that syncs edited options back to the server.

mod draft;
mod error;
mod options;
pub mod patch;
pub mod sync;

pub use draft::Draft;
pub use error::DraftError;
pub use patch::{Patch, PollPatch, PostPatch, SubletPatch};
pub use sync::{plan_option_sync, OptionStep, OptionSyncPlan};
