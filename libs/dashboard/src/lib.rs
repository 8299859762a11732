//! Read-side views over portal content: time-driven status derivation,
//! dashboard columns and small presentation helpers.

pub mod columns;
pub mod palette;
pub mod populations;
pub mod progress;
pub mod status;

pub use columns::{Column, Columns, Dashboard};
pub use palette::label_color;
pub use populations::{describe_targets, group_populations};
pub use progress::{progress, Step};
pub use status::{derive_status, set_statuses};
