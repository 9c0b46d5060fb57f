// SPDX-License-Identifier: MIT
//
// hue-color value types — HSL as the canonical internal form.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// Every color entering the system is reduced to an `Hsl` whose three
// components live in [0, 1]. Hue is stored in turns rather than degrees so
// that rotating by a scheme offset is a single wrapping addition.
//
// Conversion pipeline:
//
//   hex ↔ 8-bit RGB ↔ HSL
//
// The RGB triple is only an intermediate; callers see HSL or hex strings.

use std::fmt;

/// An 8-bit sRGB channel triple `(r, g, b)`.
pub type Rgb8 = (u8, u8, u8);

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in hue/saturation/lightness form, every component in [0, 1].
///
/// - `h`: Hue as a fraction of a full turn (0.5 = 180°). Wraps, so 1.0 ≡ 0.0.
/// - `s`: Saturation, 0.0 (grey) to 1.0 (fully saturated).
/// - `l`: Lightness, 0.0 (black) to 1.0 (white).
///
/// # Examples
///
/// ```
/// use hue_color::Hsl;
///
/// let red = Hsl::new(0.0, 1.0, 0.5);
/// assert_eq!(red.to_hex(), "#ff0000");
/// assert_eq!(red.rotate(0.5).to_hex(), "#00ffff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in turns, [0, 1).
    pub h: f64,

    /// Saturation, [0, 1].
    pub s: f64,

    /// Lightness, [0, 1].
    pub l: f64,
}

impl Hsl {
    /// Create an HSL value, wrapping hue into [0, 1) and clamping
    /// saturation and lightness into [0, 1].
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    /// Advance the hue by `turns` (may be negative), keeping it in [0, 1).
    ///
    /// Saturation and lightness are unchanged.
    #[inline]
    #[must_use]
    pub fn rotate(self, turns: f64) -> Self {
        Self {
            h: wrap_hue(self.h + turns),
            ..self
        }
    }

    /// Whether the color is a pure grey (saturation exactly zero).
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_achromatic(self) -> bool {
        self.s == 0.0
    }

    /// Convert to 8-bit sRGB channels.
    #[must_use]
    pub fn to_rgb8(self) -> Rgb8 {
        hsl_to_rgb(self.h, self.s, self.l)
    }

    /// Convert to a canonical `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        hsl_to_hex(self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsl {
    /// CSS notation: `hsl(210, 50%, 40%)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.0}, {:.0}%, {:.0}%)",
            self.h * 360.0,
            self.s * 100.0,
            self.l * 100.0
        )
    }
}

/// Wrap a hue expressed in turns into [0, 1).
#[inline]
fn wrap_hue(h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    // rem_euclid can round tiny negative inputs up to exactly 1.0.
    if h >= 1.0 { 0.0 } else { h }
}

// ─── RGB → HSL ───────────────────────────────────────────────────────────────

/// Convert 8-bit sRGB channels to HSL.
///
/// Greys (all channels equal) have no defined hue; they come back with
/// `h = 0` and `s = 0`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    // Six-piece hue formula, in sixths of a turn.
    let sixths = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl { h: sixths / 6.0, s, l }
}

/// Parse a `#RGB` or `#RRGGBB` string (leading `#` optional) to HSL.
///
/// Returns `None` for any other digit count or a non-hex digit.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    let (r, g, b) = hex_to_rgb(hex)?;
    Some(rgb_to_hsl(r, g, b))
}

// ─── HSL → RGB / hex ─────────────────────────────────────────────────────────

/// Convert HSL components to 8-bit sRGB channels.
///
/// Channels are rounded half-up, then clamped to [0, 255].
#[must_use]
#[allow(clippy::float_cmp)]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb8 {
    if s == 0.0 {
        let v = to_u8(l);
        return (v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l.mul_add(-s, l + s)
    };
    let p = 2.0f64.mul_add(l, -q);

    (
        to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_u8(hue_to_channel(p, q, h)),
        to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// Convert HSL components to a `#rrggbb` hex string.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let (r, g, b) = hsl_to_rgb(h, s, l);
    rgb_to_hex(r, g, b)
}

/// Format 8-bit channels as `#rrggbb` (lowercase, zero-padded).
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Piecewise hue-to-channel helper for one of the three channel offsets.
#[inline]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        (q - p).mul_add(6.0 * t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
    } else {
        p
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse a `#RGB` or `#RRGGBB` string (leading `#` optional) to channels.
///
/// Shorthand digits are duplicated (`#f80` → `#ff8800`).
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<Rgb8> {
    let s = hex.strip_prefix('#').unwrap_or(hex);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some((r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some((r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding half-up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Gamma ───────────────────────────────────────────────────────────────────

/// Convert a single sRGB component (0.0–1.0) to linear light.
///
/// Uses the WCAG 2.0 threshold of 0.03928 for the linear segment.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
