//! Display session: the state a front end keeps between user actions.
//!
//! A [`Session`] owns the current input color, the selected scheme, the
//! last generated colors, and a style pair for painting a swatch. Core
//! failures stop here: they are logged and the previous results are kept.

use hue_scheme::{SchemeKind, color_scheme, contrast_text_color};

use crate::options::DEFAULT_COLOR;

/// Background and text color for a swatch, as CSS color values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorStyle {
    pub background_color: String,
    pub color: String,
}

impl Default for ColorStyle {
    fn default() -> Self {
        Self {
            background_color: "grey".to_owned(),
            color: "#ffffff".to_owned(),
        }
    }
}

/// Per-session color scheme state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    style: ColorStyle,
    color: String,
    scheme: SchemeKind,
    colors: Vec<String>,
    original_color: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            style: ColorStyle::default(),
            color: DEFAULT_COLOR.to_owned(),
            scheme: SchemeKind::Triadic,
            colors: Vec::new(),
            original_color: String::new(),
        }
    }
}

impl Session {
    // ── Accessors ────────────────────────────────────────────────────────

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub const fn scheme(&self) -> SchemeKind {
        self.scheme
    }

    /// Colors from the last successful [`generate_scheme`](Self::generate_scheme).
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Input color of the last successful generation (empty before one).
    #[must_use]
    pub fn original_color(&self) -> &str {
        &self.original_color
    }

    #[must_use]
    pub const fn style(&self) -> &ColorStyle {
        &self.style
    }

    // ── Updates ──────────────────────────────────────────────────────────

    /// Replace the input color. Nothing is regenerated until
    /// [`generate_scheme`](Self::generate_scheme) is called.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub const fn set_scheme(&mut self, scheme: SchemeKind) {
        self.scheme = scheme;
    }

    /// Select a scheme by name. Unknown names are logged and the current
    /// scheme is kept.
    pub fn set_scheme_name(&mut self, name: &str) -> bool {
        match SchemeKind::from_name(name) {
            Ok(kind) => {
                self.scheme = kind;
                true
            }
            Err(e) => {
                log::error!("Error selecting color scheme: {e}");
                false
            }
        }
    }

    /// Regenerate `colors` from the current color and scheme.
    ///
    /// Returns `false` (and logs) if the color cannot be parsed; the
    /// previous colors and original color are left in place.
    pub fn generate_scheme(&mut self) -> bool {
        match color_scheme(&self.color, self.scheme) {
            Ok(result) => {
                log::info!(
                    "generated {} scheme for {}: {}",
                    result.scheme,
                    result.original,
                    result.colors.join(" ")
                );
                self.colors = result.colors;
                self.original_color = result.original;
                true
            }
            Err(e) => {
                log::error!("Error generating color scheme: {e}");
                false
            }
        }
    }

    /// Point the swatch style at generated color `index`, with readable
    /// text on top. Out-of-range indices are logged and ignored.
    pub fn select_swatch(&mut self, index: usize) -> bool {
        let Some(hex) = self.colors.get(index) else {
            log::warn!("swatch {index} out of range ({} colors)", self.colors.len());
            return false;
        };

        match contrast_text_color(hex) {
            Ok(text) => {
                self.style = ColorStyle {
                    background_color: hex.clone(),
                    color: text.name().to_owned(),
                };
                true
            }
            Err(e) => {
                log::error!("Error picking text color for {hex}: {e}");
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
