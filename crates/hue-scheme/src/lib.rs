//! # hue-scheme — harmony and accessibility engine
//!
//! Derives related colors from a single input color by rotating its hue,
//! and picks readable text colors from WCAG relative luminance.
//!
//! # Architecture
//!
//! ```text
//! color string ("#aaa000", "rgb(…)", "hsl(…)")
//!     │
//!     ▼
//! hue-color:   parse to Hsl (None on no match → InvalidColorFormat)
//!     │
//!     ▼
//! scheme.rs:   rotate hue by the scheme's offset table, back to #rrggbb
//!     │
//!     ▼
//! contrast.rs: luminance → black/white text per swatch
//! ```
//!
//! Every function is pure and synchronous; there is no state to share.

pub mod contrast;
pub mod scheme;

pub use contrast::{TextColor, contrast_ratio, contrast_text_color, relative_luminance};
pub use hue_color::{ColorError, ColorResult};
pub use scheme::{
    SchemeKind, SchemeResult, analogous_colors, color_scheme, color_scheme_by_name,
    complementary_colors, split_complementary_colors, tetradic_colors, triadic_colors,
};
