// Command line front end for the image differ.
// The library (lib.rs) holds everything except argument handling.

use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Context, bail};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use image_diff_lib::utils::validate_request;
use image_diff_lib::{ComparisonRequest, DiffEngine, DiffOptions, HighlightColor, build_diff_graph, compare_with};

/// Compares two images with FFmpeg and prints per-channel SSIM values as JSON.
#[derive(Debug, Parser)]
#[command(name = "image-diff", version)]
struct Cli {
    /// Reference image
    reference: PathBuf,
    /// Image compared against the reference
    comparison: PathBuf,
    /// Write a differential image to this path
    output: Option<PathBuf>,

    /// Options as JSON, e.g. '{"color": "yellow", "opacity": 0}'
    #[arg(long, value_name = "JSON")]
    options: Option<String>,
    /// Skip SSIM computation when writing a diff image
    #[arg(long)]
    no_ssim: bool,
    /// Threshold below which differences are ignored (0.0 - 1.0)
    #[arg(long)]
    similarity: Option<f64>,
    /// Blend percentage for differential pixels (0.0 - 1.0)
    #[arg(long)]
    blend: Option<f64>,
    /// Opacity of the reference image backdrop (0.0 - 1.0)
    #[arg(long)]
    opacity: Option<f64>,
    /// Highlight color: magenta, pink, yellow, cyan, red, green, blue, '' or raw colorbalance params
    #[arg(long)]
    color: Option<String>,

    /// FFmpeg binary to run
    #[arg(long, env = "IMAGE_DIFF_FFMPEG", default_value = "ffmpeg")]
    ffmpeg: PathBuf,
    /// Kill FFmpeg and fail after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
    /// Print the diff filtergraph and exit without running FFmpeg
    #[arg(long)]
    print_graph: bool,
}

impl Cli {
    /// JSON options first, explicit flags on top.
    fn diff_options(&self) -> anyhow::Result<DiffOptions> {
        let mut options: DiffOptions = match &self.options {
            Some(json) => serde_json::from_str(json).context("Invalid --options JSON")?,
            None => DiffOptions::default(),
        };
        if self.no_ssim {
            options.compute_ssim = false;
        }
        if let Some(similarity) = self.similarity {
            options.similarity = similarity;
        }
        if let Some(blend) = self.blend {
            options.blend = blend;
        }
        if let Some(opacity) = self.opacity {
            options.opacity = opacity;
        }
        if let Some(color) = &self.color {
            options.color = HighlightColor::from(color.as_str());
        }
        Ok(options)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)       // Remove module path
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    let options = cli.diff_options()?;

    if cli.print_graph {
        println!("{}", build_diff_graph(&options));
        return Ok(());
    }

    let mut request = ComparisonRequest::new(&cli.reference, &cli.comparison).with_options(options);
    if let Some(output) = &cli.output {
        request = request.with_output(output);
    }
    validate_request(&request)?;

    let engine = DiffEngine::with_program(&cli.ffmpeg);
    info!("Comparing {} with {}", cli.reference.display(), cli.comparison.display());

    let stats = match cli.timeout {
        Some(secs) => match tokio::time::timeout(Duration::from_secs(secs), compare_with(&engine, &request)).await {
            Ok(result) => result?,
            Err(_) => bail!("FFmpeg did not finish within {}s", secs),
        },
        None => compare_with(&engine, &request).await?,
    };
    debug!("Received {} channel values", stats.len());

    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
