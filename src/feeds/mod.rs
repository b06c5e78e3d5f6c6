//! Feed builders. Each takes one raw upstream payload and returns the
//! canonical view for that feed; none of them can fail.

pub mod ai_signals;
pub mod analytics;
pub mod item;
pub mod radar;
pub mod sector;
pub mod swing;
pub mod velocity;

pub use ai_signals::build_ai_signals;
pub use analytics::build_analytics;
pub use radar::build_radar;
pub use sector::build_sectors;
pub use swing::build_swings;
pub use velocity::build_velocity;
