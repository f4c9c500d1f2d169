//! Perceptual image diffing with FFmpeg.
//!
//! Builds an FFmpeg filtergraph that highlights the differences between two
//! images, runs it, and returns the per-channel SSIM values FFmpeg reports.
//! All pixel work happens inside FFmpeg.

// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod commands;

// Public exports for external consumers
pub use crate::core::{ComparisonRequest, DiffOptions, HighlightColor, SsimStats};
pub use processing::{DiffEngine, build_diff_graph, stats_only_graph};
pub use utils::{DiffError, DiffResult};
pub use commands::*;
