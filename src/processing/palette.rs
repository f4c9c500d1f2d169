//! Color balance presets for highlighting differences.
//!
//! Each preset pushes every tonal range (shadows, midtones, highlights) of a
//! channel fully up (`1`) or down (`-1`), which turns the white-on-black
//! difference pixels into the named hue.

use std::collections::HashMap;
use lazy_static::lazy_static;
use crate::core::HighlightColor;

/// Direction in which a channel is shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelShift {
    pub r: i8,
    pub g: i8,
    pub b: i8,
}

impl ChannelShift {
    const fn new(r: i8, g: i8, b: i8) -> Self {
        Self { r, g, b }
    }

    /// `colorbalance` parameter list applying the shift to all tonal ranges.
    pub fn to_params(self) -> String {
        ["s", "m", "h"]
            .iter()
            .map(|range| {
                format!(
                    "r{range}={}:g{range}={}:b{range}={}",
                    self.r, self.g, self.b
                )
            })
            .collect::<Vec<_>>()
            .join(":")
    }
}

lazy_static! {
    static ref PRESETS: HashMap<HighlightColor, ChannelShift> = HashMap::from([
        (HighlightColor::Magenta, ChannelShift::new(1, -1, 1)),
        (HighlightColor::Yellow, ChannelShift::new(1, 1, -1)),
        (HighlightColor::Cyan, ChannelShift::new(-1, 1, 1)),
        (HighlightColor::Red, ChannelShift::new(1, -1, -1)),
        (HighlightColor::Green, ChannelShift::new(-1, 1, -1)),
        (HighlightColor::Blue, ChannelShift::new(-1, -1, 1)),
    ]);
}

/// Channel shift of a named color, `None` for empty or custom raw colors.
///
/// Raw values holding a palette name resolve to that palette.
pub fn channel_shift(color: &HighlightColor) -> Option<ChannelShift> {
    match color {
        HighlightColor::Raw(raw) => PRESETS.get(&HighlightColor::from(raw.as_str())).copied(),
        named => PRESETS.get(named).copied(),
    }
}

/// Parameter string for the `colorbalance` filter.
///
/// Named colors map to their preset, raw colors are returned verbatim and the
/// empty color yields an empty string.
pub fn colorbalance_params(color: &HighlightColor) -> String {
    match channel_shift(color) {
        Some(shift) => shift.to_params(),
        None => color.as_str().to_string(),
    }
}
