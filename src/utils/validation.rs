use std::path::Path;
use crate::core::{ComparisonRequest, DiffOptions};
use crate::utils::{DiffResult, ValidationError};

/// Validates a comparison request before it is handed to FFmpeg.
///
/// Input paths are left to FFmpeg, which reports unreadable images itself.
pub fn validate_request(request: &ComparisonRequest) -> DiffResult<()> {
    if let Some(output) = &request.output {
        validate_output_path(output)?;
        validate_options(&request.options)?;
    }
    Ok(())
}

/// Validates that the output image can be created at `path`
pub fn validate_output_path(path: &Path) -> DiffResult<()> {
    if path.is_dir() {
        return Err(ValidationError::not_a_file(path).into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(ValidationError::missing_dir(parent).into());
        }
    }

    Ok(())
}

/// Validates that all ratios are within 0.0 - 1.0
pub fn validate_options(options: &DiffOptions) -> DiffResult<()> {
    let ratios = [
        ("similarity", options.similarity),
        ("blend", options.blend),
        ("opacity", options.opacity),
    ];
    for (name, value) in ratios {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::option(format!(
                "Invalid {} value: {}. Must be between 0 and 1",
                name, value
            ))
            .into());
        }
    }
    Ok(())
}
