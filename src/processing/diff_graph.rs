//! Filtergraphs for the two comparison modes.
//!
//! Input 0 is the reference image, input 1 the comparison image. The diff
//! graph:
//!
//! 1. optionally prints SSIM stats to stdout and forwards the reference as `[ssim]`
//! 2. subtracts the images with the `phoenix` blend mode, keys out white
//!    (unchanged) pixels and recolors the rest, labelled `[diff]`
//! 3. optionally dims the reference to `opacity`, labelled `[bg]`
//! 4. overlays `[diff]` on the backdrop as RGB

use crate::core::DiffOptions;
use super::graph::{Filter, FilterChain, FilterGraph};
use super::palette::colorbalance_params;

const SSIM_LABEL: &str = "ssim";
const DIFF_LABEL: &str = "diff";
const BACKDROP_LABEL: &str = "bg";
const REFERENCE_INPUT: &str = "0";
const COMPARISON_INPUT: &str = "1";

/// `ssim` filter writing its per-frame report to stdout.
fn ssim_filter() -> Filter {
    Filter::new("ssim").arg("stats_file", "-")
}

/// Graph used when no diff image is requested: SSIM only, frames discarded.
pub fn stats_only_graph() -> FilterGraph {
    FilterGraph::new().chain(FilterChain::new().filter(ssim_filter()))
}

/// Graph rendering the differential image described by `options`.
pub fn diff_graph(options: &DiffOptions) -> FilterGraph {
    let mut graph = FilterGraph::new();

    let mut diff = FilterChain::new();
    if options.compute_ssim {
        graph = graph.chain(FilterChain::new().filter(ssim_filter()).output(SSIM_LABEL));
        diff = diff.input(SSIM_LABEL).input(COMPARISON_INPUT);
    }

    let diff = diff
        .filter(Filter::new("blend").arg("all_mode", "phoenix"))
        .filter(Filter::new("format").positional("rgba"))
        .filter(
            Filter::new("colorkey")
                .positional("white")
                .arg("similarity", options.similarity)
                .arg("blend", options.blend),
        )
        .filter(Filter::raw("colorbalance", colorbalance_params(&options.color)))
        .output(DIFF_LABEL);
    graph = graph.chain(diff);

    let backdrop = if options.opacity < 1.0 {
        graph = graph.chain(
            FilterChain::new()
                .input(REFERENCE_INPUT)
                .filter(Filter::new("format").positional("rgba"))
                .filter(Filter::new("colorchannelmixer").arg("aa", options.opacity))
                .output(BACKDROP_LABEL),
        );
        BACKDROP_LABEL
    } else {
        REFERENCE_INPUT
    };

    graph.chain(
        FilterChain::new()
            .input(backdrop)
            .input(DIFF_LABEL)
            .filter(Filter::new("overlay").arg("format", "rgb")),
    )
}

/// Serialized diff graph, ready for `-filter_complex`.
pub fn build_diff_graph(options: &DiffOptions) -> String {
    diff_graph(options).to_string()
}
