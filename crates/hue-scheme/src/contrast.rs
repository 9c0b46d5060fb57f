//! WCAG relative luminance and readable text color selection.
//!
//! Luminance follows WCAG 2.0: each sRGB channel is gamma-decoded to
//! linear light and the channels are weighted by the eye's sensitivity.
//! Text color choice is a binary threshold on that luminance, not a full
//! contrast-ratio search; [`contrast_ratio`] is provided for callers that
//! want the real number.

use std::fmt;

use hue_color::{ColorError, ColorResult, hex_to_rgb, normalize_to_hex, srgb_to_linear};

/// Backgrounds brighter than this get black text.
pub const LUMINANCE_THRESHOLD: f64 = 0.5;

/// Compute the relative luminance of a color per WCAG 2.0.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Accepts every notation the parser does; `#RGB` shorthand is expanded.
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if the color cannot be parsed,
/// including `#`-prefixed strings that are not 3 or 6 hex digits.
pub fn relative_luminance(color: &str) -> ColorResult<f64> {
    let hex = normalize_to_hex(color)?;
    let (r, g, b) = hex_to_rgb(&hex).ok_or_else(|| ColorError::invalid_format(color))?;

    let r_lin = srgb_to_linear(f64::from(r) / 255.0);
    let g_lin = srgb_to_linear(f64::from(g) / 255.0);
    let b_lin = srgb_to_linear(f64::from(b) / 255.0);
    Ok(0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin)))
}

/// Compute the WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is the same regardless of argument order.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if either color cannot be parsed.
pub fn contrast_ratio(a: &str, b: &str) -> ColorResult<f64> {
    let la = relative_luminance(a)?;
    let lb = relative_luminance(b)?;
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    Ok((lighter + 0.05) / (darker + 0.05))
}

// ─── Text color ──────────────────────────────────────────────────────────────

/// Text color to draw on top of a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    /// For light backgrounds (luminance above the threshold).
    Black,
    /// For dark and mid backgrounds.
    White,
}

impl TextColor {
    /// `"black"` or `"white"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick black or white text for `background`.
///
/// Black when the background's luminance exceeds [`LUMINANCE_THRESHOLD`],
/// white otherwise.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if the background cannot be
/// parsed.
pub fn contrast_text_color(background: &str) -> ColorResult<TextColor> {
    let luminance = relative_luminance(background)?;
    Ok(if luminance > LUMINANCE_THRESHOLD {
        TextColor::Black
    } else {
        TextColor::White
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance("#000000").unwrap();
        assert!(approx_eq(lum, 0.0, 0.001), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance("#ffffff").unwrap();
        assert!(approx_eq(lum, 1.0, 0.001), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_red() {
        let lum = relative_luminance("rgb(255, 0, 0)").unwrap();
        assert!(approx_eq(lum, 0.2126, 0.001), "Red luminance: {lum}");
    }

    #[test]
    fn luminance_pure_green() {
        let lum = relative_luminance("hsl(120, 100%, 50%)").unwrap();
        assert!(approx_eq(lum, 0.7152, 0.001), "Green luminance: {lum}");
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = relative_luminance("#808080").unwrap();
        assert!(lum > 0.15 && lum < 0.30, "Mid-gray luminance: {lum}");
    }

    #[test]
    fn luminance_expands_shorthand() {
        let short = relative_luminance("#fa0").unwrap();
        let long = relative_luminance("#ffaa00").unwrap();
        assert!(approx_eq(short, long, 1e-12), "{short} vs {long}");
    }

    #[test]
    fn luminance_rejects_bad_input() {
        assert_eq!(
            relative_luminance("not-a-color"),
            Err(ColorError::InvalidColorFormat("not-a-color".into()))
        );
        assert!(relative_luminance("#12345").is_err());
        assert!(relative_luminance("#zzzzzz").is_err());
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio("#000000", "#ffffff").unwrap();
        assert!(approx_eq(ratio, 21.0, 0.1), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let ratio = contrast_ratio("#3366cc", "rgb(51, 102, 204)").unwrap();
        assert!(approx_eq(ratio, 1.0, 0.01), "Same-color contrast: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let ab = contrast_ratio("#cc3344", "#1a1a66").unwrap();
        let ba = contrast_ratio("#1a1a66", "#cc3344").unwrap();
        assert!(approx_eq(ab, ba, 0.001), "Asymmetric: {ab} vs {ba}");
    }

    #[test]
    fn contrast_gray_on_white() {
        // The classic AA-passing grey.
        let ratio = contrast_ratio("#767676", "#ffffff").unwrap();
        assert!(approx_eq(ratio, 4.54, 0.1), "Grey contrast: {ratio}");
    }

    // ── Text color ──────────────────────────────────────────────────

    #[test]
    fn white_background_gets_black_text() {
        assert_eq!(contrast_text_color("#ffffff"), Ok(TextColor::Black));
    }

    #[test]
    fn black_background_gets_white_text() {
        assert_eq!(contrast_text_color("#000000"), Ok(TextColor::White));
    }

    #[test]
    fn threshold_is_on_luminance_not_lightness() {
        // Pure red is mid-lightness but dark by luminance.
        assert_eq!(contrast_text_color("#ff0000"), Ok(TextColor::White));
        // Pure green is bright by luminance.
        assert_eq!(contrast_text_color("#00ff00"), Ok(TextColor::Black));
    }

    #[test]
    fn text_color_names() {
        assert_eq!(TextColor::Black.to_string(), "black");
        assert_eq!(TextColor::White.name(), "white");
    }

    #[test]
    fn invalid_background_is_an_error() {
        assert!(contrast_text_color("nope").is_err());
    }
}
