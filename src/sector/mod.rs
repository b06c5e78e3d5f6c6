pub mod resolver;
pub mod tables;

pub use resolver::resolve_sector;
