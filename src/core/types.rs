//! Core types for diff options and comparison results.

use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};

/// Settings for the differential image.
///
/// Deserializes from partial JSON: any key left out keeps its default, so
/// `{"color": "yellow"}` only changes the highlight color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Whether to compute SSIM statistics alongside the diff image
    #[serde(rename = "ssim")]
    pub compute_ssim: bool,
    /// Threshold (0.0 - 1.0) below which pixel differences count as unchanged
    pub similarity: f64,
    /// Blend percentage (0.0 - 1.0) for the edges of the keyed-out area
    pub blend: f64,
    /// Opacity (0.0 - 1.0) of the reference image used as backdrop
    pub opacity: f64,
    /// Color balance applied to the differential pixels
    pub color: HighlightColor,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            compute_ssim: true,
            similarity: 0.01,
            blend: 1.0,
            opacity: 0.1,
            color: HighlightColor::Magenta,
        }
    }
}

/// Hue used to highlight differing pixels.
///
/// Anything that is not a known color name is handed to FFmpeg's
/// `colorbalance` filter verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HighlightColor {
    #[default]
    Magenta,
    Yellow,
    Cyan,
    Red,
    Green,
    Blue,
    /// Leave the differential pixels uncolored
    None,
    /// Raw `colorbalance` parameter list. A raw palette name such as
    /// `Raw("yellow")` still selects that palette preset.
    Raw(String),
}

impl HighlightColor {
    /// Name under which the color is selected, or the raw parameters.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::None => "",
            Self::Raw(params) => params.as_str(),
        }
    }
}

impl From<&str> for HighlightColor {
    fn from(value: &str) -> Self {
        match value {
            "magenta" | "pink" => Self::Magenta,
            "yellow" => Self::Yellow,
            "cyan" => Self::Cyan,
            "red" => Self::Red,
            "green" => Self::Green,
            "blue" => Self::Blue,
            "" => Self::None,
            raw => Self::Raw(raw.to_string()),
        }
    }
}

impl From<String> for HighlightColor {
    fn from(value: String) -> Self {
        match Self::from(value.as_str()) {
            Self::Raw(_) => Self::Raw(value),
            known => known,
        }
    }
}

impl From<HighlightColor> for String {
    fn from(color: HighlightColor) -> Self {
        match color {
            HighlightColor::Raw(params) => params,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-channel SSIM values reported by FFmpeg.
///
/// Keys are the channel names as printed by the `ssim` filter (`R`, `G`, `B`,
/// `All`). Empty when SSIM computation was disabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SsimStats(BTreeMap<String, f64>);

impl SsimStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, channel: &str) -> Option<f64> {
        self.0.get(channel).copied()
    }

    /// Red channel similarity
    pub fn r(&self) -> Option<f64> {
        self.get("R")
    }

    /// Green channel similarity
    pub fn g(&self) -> Option<f64> {
        self.get("G")
    }

    /// Blue channel similarity
    pub fn b(&self) -> Option<f64> {
        self.get("B")
    }

    /// Combined similarity over all channels
    pub fn all(&self) -> Option<f64> {
        self.get("All")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for SsimStats {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let options: DiffOptions = serde_json::from_str(r#"{"color": "yellow", "opacity": 0}"#).unwrap();
        assert_eq!(options.color, HighlightColor::Yellow);
        assert_eq!(options.opacity, 0.0);
        assert!(options.compute_ssim);
        assert_eq!(options.similarity, 0.01);
        assert_eq!(options.blend, 1.0);
    }

    #[test]
    fn ssim_flag_uses_historical_key() {
        let options: DiffOptions = serde_json::from_str(r#"{"ssim": false}"#).unwrap();
        assert!(!options.compute_ssim);
    }

    #[test]
    fn pink_is_an_alias_for_magenta() {
        assert_eq!(HighlightColor::from("pink"), HighlightColor::Magenta);
        assert_eq!(HighlightColor::from("magenta"), HighlightColor::Magenta);
    }

    #[test]
    fn unknown_color_passes_through() {
        let color = HighlightColor::from("rs=0.5:bh=-0.3");
        assert_eq!(color, HighlightColor::Raw("rs=0.5:bh=-0.3".to_string()));
        assert_eq!(String::from(color), "rs=0.5:bh=-0.3");
    }

    #[test]
    fn empty_color_means_no_recoloring() {
        let options: DiffOptions = serde_json::from_str(r#"{"color": ""}"#).unwrap();
        assert_eq!(options.color, HighlightColor::None);
        assert_eq!(serde_json::to_value(&options).unwrap()["color"], "");
    }

    #[test]
    fn stats_serialize_as_flat_object() {
        let stats: SsimStats = [("R".to_string(), 0.5), ("All".to_string(), 0.75)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"All":0.75,"R":0.5}"#);
        assert_eq!(stats.r(), Some(0.5));
        assert_eq!(stats.g(), None);
    }
}
