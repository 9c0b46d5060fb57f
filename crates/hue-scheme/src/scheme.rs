//! Harmony schemes — fixed hue rotations applied to a base color.
//!
//! Each scheme is a table of hue offsets measured in turns (degrees / 360).
//! Every offset is added to the base hue, wrapped into [0, 1), and combined
//! with the base saturation and lightness. The table order is the output
//! order: most schemes lead with the base color, analogous puts it in the
//! middle.
//!
//! | Scheme              | Offsets (degrees)   |
//! |---------------------|---------------------|
//! | triadic             | 0, 120, 240         |
//! | analogous           | -30, 0, 30          |
//! | complementary       | 0, 180              |
//! | split-complementary | 0, 150, 210         |
//! | tetradic            | 0, 90, 180, 270     |

use std::fmt;
use std::str::FromStr;

use hue_color::{ColorError, ColorResult, Hsl, require_hsl};

const TRIADIC: [f64; 3] = [0.0, 1.0 / 3.0, 2.0 / 3.0];
const ANALOGOUS: [f64; 3] = [-1.0 / 12.0, 0.0, 1.0 / 12.0];
const COMPLEMENTARY: [f64; 2] = [0.0, 0.5];
// Neighbours of the complement, 30 degrees either side of it.
const SPLIT_COMPLEMENTARY: [f64; 3] = [0.0, 0.5 - 1.0 / 12.0, 0.5 + 1.0 / 12.0];
const TETRADIC: [f64; 4] = [0.0, 0.25, 0.5, 0.75];

/// The kind of harmony used to derive related colors from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    /// 120-degree spacing (3 colors).
    Triadic,
    /// Neighbours at -30 and +30 degrees (3 colors, base in the middle).
    Analogous,
    /// Opposite hue (2 colors).
    Complementary,
    /// Both neighbours of the complement, 150 and 210 degrees (3 colors).
    SplitComplementary,
    /// 90-degree spacing (4 colors).
    Tetradic,
}

impl SchemeKind {
    /// Hue offsets in turns, in output order.
    #[must_use]
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Triadic => &TRIADIC,
            Self::Analogous => &ANALOGOUS,
            Self::Complementary => &COMPLEMENTARY,
            Self::SplitComplementary => &SPLIT_COMPLEMENTARY,
            Self::Tetradic => &TETRADIC,
        }
    }

    /// Number of colors this scheme produces.
    #[must_use]
    pub const fn color_count(self) -> usize {
        self.offsets().len()
    }

    /// Kebab-case name of this scheme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Triadic => "triadic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Tetradic => "tetradic",
        }
    }

    /// Parse a scheme from its name (case-insensitive, surrounding
    /// whitespace ignored).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnsupportedScheme`] for any other name.
    pub fn from_name(name: &str) -> ColorResult<Self> {
        let lower = name.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|k| k.name() == lower)
            .copied()
            .ok_or_else(|| ColorError::unsupported_scheme(name))
    }

    /// All available schemes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Triadic,
            Self::Analogous,
            Self::Complementary,
            Self::SplitComplementary,
            Self::Tetradic,
        ]
    }

    /// Rotate `base` by every offset of this scheme, in output order.
    #[must_use]
    pub fn apply(self, base: Hsl) -> Vec<String> {
        self.offsets()
            .iter()
            .map(|&turns| base.rotate(turns).to_hex())
            .collect()
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemeKind {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

// ─── Scheme generation ───────────────────────────────────────────────────────

/// A generated scheme: the untouched input, the scheme, and its colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeResult {
    /// The color string exactly as the caller passed it.
    pub original: String,

    /// The scheme that produced `colors`.
    pub scheme: SchemeKind,

    /// `#rrggbb` colors in scheme order.
    pub colors: Vec<String>,
}

/// Derive the colors of `kind` from `color`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `color` matches no
/// supported notation.
pub fn color_scheme(color: &str, kind: SchemeKind) -> ColorResult<SchemeResult> {
    let base = require_hsl(color)?;
    let colors = kind.apply(base);
    log::debug!("{kind} scheme for {color:?} ({base}): {colors:?}");

    Ok(SchemeResult {
        original: color.to_owned(),
        scheme: kind,
        colors,
    })
}

/// Derive a scheme chosen by name.
///
/// The name is checked before the color, so an unknown scheme is reported
/// even when the color is also invalid.
///
/// # Errors
///
/// Returns [`ColorError::UnsupportedScheme`] for an unknown name, then
/// [`ColorError::InvalidColorFormat`] for an unparseable color.
pub fn color_scheme_by_name(color: &str, name: &str) -> ColorResult<SchemeResult> {
    let kind = SchemeKind::from_name(name)?;
    color_scheme(color, kind)
}

/// Base, +120°, +240°.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for an unparseable color.
pub fn triadic_colors(color: &str) -> ColorResult<[String; 3]> {
    rotations(color, TRIADIC)
}

/// -30°, base, +30°.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for an unparseable color.
pub fn analogous_colors(color: &str) -> ColorResult<[String; 3]> {
    rotations(color, ANALOGOUS)
}

/// Base, +180°.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for an unparseable color.
pub fn complementary_colors(color: &str) -> ColorResult<[String; 2]> {
    rotations(color, COMPLEMENTARY)
}

/// Base, +150°, +210°.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for an unparseable color.
pub fn split_complementary_colors(color: &str) -> ColorResult<[String; 3]> {
    rotations(color, SPLIT_COMPLEMENTARY)
}

/// Base, +90°, +180°, +270°.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for an unparseable color.
pub fn tetradic_colors(color: &str) -> ColorResult<[String; 4]> {
    rotations(color, TETRADIC)
}

fn rotations<const N: usize>(color: &str, offsets: [f64; N]) -> ColorResult<[String; N]> {
    let base = require_hsl(color)?;
    Ok(offsets.map(|turns| base.rotate(turns).to_hex()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
