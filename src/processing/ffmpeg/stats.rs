//! Parsing of the `ssim` filter's stats output.
//!
//! With `stats_file=-` FFmpeg prints one line per frame:
//!
//! ```text
//! n:1 R:0.987654 G:0.991234 B:0.989000 All:0.989296 (17.4)
//! ```
//!
//! The frame counter and the trailing dB value are dropped, the channel
//! values are kept.

use tracing::warn;
use crate::core::SsimStats;

/// Parses the first non-empty line of `stdout` into per-channel values.
///
/// Values are read leniently: a malformed number yields `NaN` for that
/// channel instead of an error. No line at all yields empty stats.
pub fn parse_ssim_stats(stdout: &str) -> SsimStats {
    let Some(line) = stdout.lines().find(|line| !line.trim().is_empty()) else {
        return SsimStats::new();
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return SsimStats::new();
    }

    tokens[1..tokens.len() - 1]
        .iter()
        .copied()
        .map(|token| {
            let (channel, value) = token.split_once(':').unwrap_or((token, ""));
            let value = parse_float_prefix(value);
            if value.is_nan() {
                warn!("Unparseable SSIM value in token {:?}", token);
            }
            (channel.to_string(), value)
        })
        .collect()
}

/// Reads the longest leading decimal number of `s`, `NaN` if there is none.
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent and the literal `Infinity`. Trailing garbage is ignored.
fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        mantissa_digits += fraction_end - fraction_start;
        if mantissa_digits > 0 {
            end = fraction_end;
        }
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
