pub mod classifier;
pub mod snapshot;

pub use classifier::{bias_from_counts, classify};
pub use snapshot::{pick_latest_rows, row_time_text};
