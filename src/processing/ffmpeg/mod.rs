mod executor;
pub mod stats;

pub use executor::{DiffEngine, DEFAULT_PROGRAM};
pub use stats::parse_ssim_stats;
