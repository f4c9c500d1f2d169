use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};
use crate::core::{ComparisonRequest, SsimStats};
use crate::processing::diff_graph::{diff_graph, stats_only_graph};
use crate::utils::{DiffError, DiffResult};
use super::stats::parse_ssim_stats;

/// Binary looked up on `PATH` when no explicit program is configured.
pub const DEFAULT_PROGRAM: &str = "ffmpeg";

/// Runs one FFmpeg process per comparison.
///
/// Holds no state besides the program to launch, so a single engine can serve
/// any number of concurrent comparisons. Concurrent comparisons writing to the
/// same output path race; the last one to finish wins.
#[derive(Debug, Clone)]
pub struct DiffEngine {
    program: PathBuf,
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffEngine {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Engine launching `program` instead of the `ffmpeg` found on `PATH`.
    pub fn with_program(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Command line arguments for `request`, excluding the program itself.
    ///
    /// ```text
    /// -loglevel error -i <reference> -i <comparison> -filter_complex <graph> (-f null - | -y <output>)
    /// ```
    pub fn build_args(&self, request: &ComparisonRequest) -> Vec<OsString> {
        let graph = match &request.output {
            Some(_) => diff_graph(&request.options),
            None => stats_only_graph(),
        };

        let mut args: Vec<OsString> = vec![
            "-loglevel".into(),
            "error".into(),
            "-i".into(),
            request.reference.clone().into(),
            "-i".into(),
            request.comparison.clone().into(),
            "-filter_complex".into(),
            graph.to_string().into(),
        ];

        match &request.output {
            Some(output) => {
                args.push("-y".into());
                args.push(output.clone().into());
            }
            None => {
                args.extend(["-f", "null", "-"].map(OsString::from));
            }
        }
        args
    }

    /// Runs the comparison and returns the SSIM values FFmpeg reported.
    ///
    /// The process is killed if the returned future is dropped, so callers
    /// can bound the runtime with `tokio::time::timeout`.
    pub async fn compare(&self, request: &ComparisonRequest) -> DiffResult<SsimStats> {
        let args = self.build_args(request);
        debug!(
            "Comparing {} with {} (output: {:?})",
            request.reference.display(),
            request.comparison.display(),
            request.output
        );
        debug!("Spawning {} with {} args", self.program.display(), args.len());

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .inspect_err(|e| warn!("Failed to launch {}: {}", self.program.display(), e))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() || !stderr.trim().is_empty() {
            let message = stderr.trim().to_string();
            warn!("FFmpeg failed with {}: {}", output.status, message);
            return Err(DiffError::engine(output.status, message));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stats = parse_ssim_stats(&stdout);
        if stats.is_empty() && request.expects_stats() {
            warn!("FFmpeg printed no SSIM stats");
        }
        debug!("Comparison completed with {} channel values", stats.len());
        Ok(stats)
    }
}
