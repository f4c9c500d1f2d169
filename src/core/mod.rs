//! Core types shared by the builder, the executor and the CLI.
//!
//! - [`DiffOptions`]: settings for the differential image
//! - [`HighlightColor`]: hue of the highlighted differences
//! - [`SsimStats`]: per-channel SSIM values returned by a comparison
//! - [`ComparisonRequest`]: one comparison to run

mod types;
mod task;

pub use types::{DiffOptions, HighlightColor, SsimStats};
pub use task::ComparisonRequest;
