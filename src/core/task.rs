//! Comparison request definition.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::core::DiffOptions;

/// A single image comparison.
///
/// Without an `output` path only SSIM statistics are computed; with one, a
/// differential image is written there as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRequest {
    /// Path to the reference image (FFmpeg input 0)
    pub reference: PathBuf,
    /// Path to the image compared against the reference (FFmpeg input 1)
    pub comparison: PathBuf,
    /// Path where the differential image will be written
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Diff image settings, ignored when there is no output path
    #[serde(default)]
    pub options: DiffOptions,
}

impl ComparisonRequest {
    pub fn new(reference: impl AsRef<Path>, comparison: impl AsRef<Path>) -> Self {
        Self {
            reference: reference.as_ref().to_path_buf(),
            comparison: comparison.as_ref().to_path_buf(),
            output: None,
            options: DiffOptions::default(),
        }
    }

    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_options(mut self, options: DiffOptions) -> Self {
        self.options = options;
        self
    }

    /// Whether the engine will print an SSIM line for this request.
    pub fn expects_stats(&self) -> bool {
        self.output.is_none() || self.options.compute_ssim
    }
}
