//! Public comparison entry point.

use std::path::Path;
use tracing::debug;
use crate::core::{ComparisonRequest, DiffOptions, SsimStats};
use crate::processing::DiffEngine;
use crate::utils::DiffResult;

/// Compares two images with the `ffmpeg` found on `PATH`.
///
/// Without `output` only SSIM statistics are computed. With `output` a
/// differential image is written there (overwriting any existing file), and
/// the statistics are returned unless `options.compute_ssim` is off, in which
/// case the result is empty.
///
/// # Arguments
/// * `reference` - Path to the reference image
/// * `comparison` - Path to the image compared against the reference
/// * `output` - Path for the differential image
/// * `options` - Diff image settings, defaults when `None`
///
/// # Returns
/// Per-channel SSIM values keyed by `R`, `G`, `B` and `All`.
pub async fn compare(
    reference: impl AsRef<Path>,
    comparison: impl AsRef<Path>,
    output: Option<&Path>,
    options: Option<DiffOptions>,
) -> DiffResult<SsimStats> {
    let mut request = ComparisonRequest::new(reference, comparison)
        .with_options(options.unwrap_or_default());
    if let Some(output) = output {
        request = request.with_output(output);
    }
    compare_with(&DiffEngine::default(), &request).await
}

/// Runs `request` on an explicitly configured engine.
pub async fn compare_with(engine: &DiffEngine, request: &ComparisonRequest) -> DiffResult<SsimStats> {
    debug!("Received compare request using {}", engine.program().display());
    engine.compare(request).await
}
