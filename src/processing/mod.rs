pub mod graph;
pub mod palette;
pub mod ffmpeg;
mod diff_graph;

pub use diff_graph::{build_diff_graph, diff_graph, stats_only_graph};
pub use ffmpeg::{DiffEngine, parse_ssim_stats};
pub use graph::{Filter, FilterArg, FilterChain, FilterGraph};
