// SPDX-License-Identifier: MIT
//
// Error taxonomy shared by every huewheel crate.
//
// The parser itself never fails (it returns `None`); these errors are raised
// by the layers that need a parsed value and cannot continue without one.

use thiserror::Error;

/// Errors raised by color normalization, scheme generation, and contrast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input matched none of the recognized color formats.
    #[error("invalid color format '{0}'. Supported formats: hex, rgb, rgba, hsl, hsla")]
    InvalidColorFormat(String),

    /// The scheme name is outside the closed set of known schemes.
    #[error("unsupported color scheme: {0}")]
    UnsupportedScheme(String),
}

impl ColorError {
    /// Build an [`InvalidColorFormat`](Self::InvalidColorFormat) for `input`.
    #[must_use]
    pub fn invalid_format(input: &str) -> Self {
        Self::InvalidColorFormat(input.to_owned())
    }

    /// Build an [`UnsupportedScheme`](Self::UnsupportedScheme) for `name`.
    #[must_use]
    pub fn unsupported_scheme(name: &str) -> Self {
        Self::UnsupportedScheme(name.to_owned())
    }
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_lists_every_family() {
        let msg = ColorError::invalid_format("nope").to_string();
        assert!(msg.contains("'nope'"), "{msg}");
        for family in ["hex", "rgb", "rgba", "hsl", "hsla"] {
            assert!(msg.contains(family), "missing {family} in {msg}");
        }
    }

    #[test]
    fn unsupported_scheme_names_the_scheme() {
        let msg = ColorError::unsupported_scheme("hexagonal").to_string();
        assert_eq!(msg, "unsupported color scheme: hexagonal");
    }
}
