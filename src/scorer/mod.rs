pub mod ranking;
pub mod sector_strength;

pub use ranking::{rank_and_trim, rank_desc};
pub use sector_strength::aggregate_sectors;
