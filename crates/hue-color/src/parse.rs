// SPDX-License-Identifier: MIT
//
// Color string parsing — permissive probe, strict consumers.
//
// `parse_color_to_hsl` tries each supported notation in turn and reports
// "no match" as `None`. Anything that cannot continue without a color
// (normalization, schemes, contrast) turns that `None` into a
// `ColorError::InvalidColorFormat`.
//
// Supported notations (function names and hex digits are case-insensitive):
//
//   #RGB  #RRGGBB
//   rgb(r, g, b)       rgba(r, g, b, a)      r, g, b in 0–255
//   hsl(h, s%, l%)     hsla(h, s%, l%, a)    h in degrees
//
// Alpha is accepted and discarded.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::color::{Hsl, hex_to_hsl, rgb_to_hsl};
use crate::error::{ColorError, ColorResult};

static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(rgba?)\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)(?:\s*,\s*[0-9.]+)?\s*\)",
    )
    .expect("rgb pattern is a valid regex")
});

static HSL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(hsla?)\(\s*([0-9.]+)\s*,\s*([0-9.]+)%\s*,\s*([0-9.]+)%(?:\s*,\s*[0-9.]+)?\s*\)",
    )
    .expect("hsl pattern is a valid regex")
});

// ─── ColorFormat ─────────────────────────────────────────────────────────────

/// The textual notation a color string was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `#RGB` or `#RRGGBB`.
    Hex,
    /// `rgb(r, g, b)`.
    Rgb,
    /// `rgba(r, g, b, a)`.
    Rgba,
    /// `hsl(h, s%, l%)`.
    Hsl,
    /// `hsla(h, s%, l%, a)`.
    Hsla,
}

impl ColorFormat {
    /// Lowercase family name, as listed in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
        }
    }

    /// All supported formats, in the order the parser tries them.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Hex, Self::Rgb, Self::Rgba, Self::Hsl, Self::Hsla]
    }

    fn from_function(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "rgba" => Self::Rgba,
            "hsl" => Self::Hsl,
            "hsla" => Self::Hsla,
            _ => Self::Rgb,
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Parse a color string in any supported notation to HSL.
///
/// Surrounding whitespace is ignored. Returns `None` when no notation
/// matches, or when a matched notation carries unusable numbers
/// (an `rgb()` channel above 255, a malformed hex length).
///
/// # Examples
///
/// ```
/// use hue_color::parse_color_to_hsl;
///
/// let a = parse_color_to_hsl("rgb(255, 0, 0)").unwrap();
/// let b = parse_color_to_hsl("  HSL(0, 100%, 50%) ").unwrap();
/// assert_eq!(a.to_hex(), b.to_hex());
/// assert!(parse_color_to_hsl("not-a-color").is_none());
/// ```
#[must_use]
pub fn parse_color_to_hsl(input: &str) -> Option<Hsl> {
    let input = input.trim();

    if input.starts_with('#') {
        return hex_to_hsl(input);
    }

    if let Some(caps) = RGB_PATTERN.captures(input) {
        let r = capture::<u8>(&caps, 2)?;
        let g = capture::<u8>(&caps, 3)?;
        let b = capture::<u8>(&caps, 4)?;
        return Some(rgb_to_hsl(r, g, b));
    }

    if let Some(caps) = HSL_PATTERN.captures(input) {
        let h = capture::<f64>(&caps, 2)? / 360.0;
        let s = capture::<f64>(&caps, 3)? / 100.0;
        let l = capture::<f64>(&caps, 4)? / 100.0;
        return Some(Hsl::new(h, s, l));
    }

    log::trace!("no color notation matched {input:?}");
    None
}

/// Identify which notation `input` is written in, without converting it.
#[must_use]
pub fn detect_format(input: &str) -> Option<ColorFormat> {
    let input = input.trim();

    if input.starts_with('#') {
        return Some(ColorFormat::Hex);
    }
    RGB_PATTERN
        .captures(input)
        .or_else(|| HSL_PATTERN.captures(input))
        .map(|caps| ColorFormat::from_function(&caps[1]))
}

/// Convert any supported color string to canonical `#rrggbb`.
///
/// Input that already starts with `#` is returned untouched, without
/// checking the digits.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if the input matches no
/// supported notation.
pub fn normalize_to_hex(input: &str) -> ColorResult<String> {
    if input.starts_with('#') {
        return Ok(input.to_owned());
    }

    parse_color_to_hsl(input)
        .map(Hsl::to_hex)
        .ok_or_else(|| ColorError::invalid_format(input))
}

/// Parse a required color, failing with `InvalidColorFormat` on no match.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if the input matches no
/// supported notation.
pub fn require_hsl(input: &str) -> ColorResult<Hsl> {
    parse_color_to_hsl(input).ok_or_else(|| ColorError::invalid_format(input))
}

fn capture<T: std::str::FromStr>(caps: &Captures<'_>, idx: usize) -> Option<T> {
    caps.get(idx)?.as_str().parse().ok()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn hex_of(input: &str) -> String {
        parse_color_to_hsl(input)
            .unwrap_or_else(|| panic!("{input} should parse"))
            .to_hex()
    }

    // ── hex ──────────────────────────────────────────────────────────────

    #[test]
    fn parses_long_hex() {
        let hsl = parse_color_to_hsl("#ff0000").unwrap();
        assert_eq!(hsl, Hsl { h: 0.0, s: 1.0, l: 0.5 });
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!(hex_of("#f00"), "#ff0000");
        assert_eq!(hex_of("#FFF"), "#ffffff");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(hex_of("  #00ff00\n"), "#00ff00");
    }

    #[test]
    fn bad_hex_length_is_no_match() {
        assert!(parse_color_to_hsl("#ff00").is_none());
        assert!(parse_color_to_hsl("#ff00ff00").is_none());
    }

    // ── rgb / rgba ───────────────────────────────────────────────────────

    #[test]
    fn parses_rgb() {
        assert_eq!(hex_of("rgb(255, 0, 0)"), "#ff0000");
        assert_eq!(hex_of("rgb(170,160,0)"), "#aaa000");
    }

    #[test]
    fn parses_rgba_and_drops_alpha() {
        assert_eq!(hex_of("rgba(0, 0, 255, 0.5)"), "#0000ff");
        assert_eq!(hex_of("rgba(0, 0, 255, 1)"), "#0000ff");
    }

    #[test]
    fn rgb_is_case_insensitive() {
        assert_eq!(hex_of("RGB(18, 52, 86)"), "#123456");
        assert_eq!(hex_of("Rgba( 18 ,52 , 86 , .3 )"), "#123456");
    }

    #[test]
    fn rgb_channel_above_255_is_no_match() {
        assert!(parse_color_to_hsl("rgb(256, 0, 0)").is_none());
        assert!(parse_color_to_hsl("rgb(99999999999, 0, 0)").is_none());
    }

    #[test]
    fn rgb_rejects_negative_and_fractional_channels() {
        assert!(parse_color_to_hsl("rgb(-1, 0, 0)").is_none());
        assert!(parse_color_to_hsl("rgb(1.5, 0, 0)").is_none());
    }

    // ── hsl / hsla ───────────────────────────────────────────────────────

    #[test]
    fn parses_hsl_into_unit_interval() {
        let hsl = parse_color_to_hsl("hsl(180, 50%, 25%)").unwrap();
        assert!(approx_eq(hsl.h, 0.5, 1e-12));
        assert!(approx_eq(hsl.s, 0.5, 1e-12));
        assert!(approx_eq(hsl.l, 0.25, 1e-12));
    }

    #[test]
    fn parses_hsla_and_drops_alpha() {
        assert_eq!(hex_of("hsla(120, 100%, 50%, 0.2)"), "#00ff00");
    }

    #[test]
    fn hsl_accepts_fractional_values() {
        let hsl = parse_color_to_hsl("hsl(90.5, 12.5%, 40.25%)").unwrap();
        assert!(approx_eq(hsl.h, 90.5 / 360.0, 1e-12));
        assert!(approx_eq(hsl.s, 0.125, 1e-12));
        assert!(approx_eq(hsl.l, 0.4025, 1e-12));
    }

    #[test]
    fn hsl_hue_past_full_turn_wraps() {
        assert_eq!(hex_of("hsl(360, 100%, 50%)"), "#ff0000");
        assert_eq!(hex_of("hsl(480, 100%, 50%)"), "#00ff00");
    }

    #[test]
    fn hsl_requires_percent_signs() {
        assert!(parse_color_to_hsl("hsl(120, 100, 50)").is_none());
    }

    // ── no match ─────────────────────────────────────────────────────────

    #[test]
    fn garbage_is_no_match() {
        assert!(parse_color_to_hsl("not-a-color").is_none());
        assert!(parse_color_to_hsl("").is_none());
        assert!(parse_color_to_hsl("red").is_none());
        assert!(parse_color_to_hsl("rgb(1, 2)").is_none());
    }

    // ── detect_format ────────────────────────────────────────────────────

    #[test]
    fn detects_each_family() {
        assert_eq!(detect_format("#abc"), Some(ColorFormat::Hex));
        assert_eq!(detect_format("rgb(1, 2, 3)"), Some(ColorFormat::Rgb));
        assert_eq!(detect_format("RGBA(1, 2, 3, 0.5)"), Some(ColorFormat::Rgba));
        assert_eq!(detect_format("hsl(1, 2%, 3%)"), Some(ColorFormat::Hsl));
        assert_eq!(detect_format("hsla(1, 2%, 3%, 1)"), Some(ColorFormat::Hsla));
        assert_eq!(detect_format("tomato"), None);
    }

    #[test]
    fn format_names() {
        let names: Vec<_> = ColorFormat::all().iter().map(ToString::to_string).collect();
        assert_eq!(names, ["hex", "rgb", "rgba", "hsl", "hsla"]);
    }

    // ── normalize_to_hex ─────────────────────────────────────────────────

    #[test]
    fn normalize_passes_hex_through() {
        assert_eq!(normalize_to_hex("#ABC").unwrap(), "#ABC");
        assert_eq!(normalize_to_hex("#not-hex").unwrap(), "#not-hex");
    }

    #[test]
    fn normalize_converts_functions() {
        assert_eq!(normalize_to_hex("rgb(255, 255, 255)").unwrap(), "#ffffff");
        assert_eq!(normalize_to_hex("hsl(240, 100%, 50%)").unwrap(), "#0000ff");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["rgb(12, 34, 56)", "hsla(300, 40%, 60%, 0.9)", "#a1b2c3"] {
            let once = normalize_to_hex(input).unwrap();
            let twice = normalize_to_hex(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn normalize_rejects_garbage() {
        let err = normalize_to_hex("not-a-color").unwrap_err();
        assert_eq!(err, ColorError::InvalidColorFormat("not-a-color".into()));
    }

    #[test]
    fn require_hsl_reports_input() {
        assert!(require_hsl("rgb(0, 0, 0)").is_ok());
        assert_eq!(
            require_hsl("hsl(nope)").unwrap_err(),
            ColorError::InvalidColorFormat("hsl(nope)".into())
        );
    }
}
