// SPDX-License-Identifier: MIT
//
// hue-color — color parsing and conversion for huewheel.
//
// Turns hex, rgb(), rgba(), hsl() and hsla() strings into a canonical HSL
// value and converts back to `#rrggbb`. Everything here is pure arithmetic:
// no I/O, no shared state, safe to call from any thread.
//
//   "rgb(170, 160, 0)" ──parse──▶ Hsl { h, s, l } ──convert──▶ "#aaa000"

pub mod color;
pub mod error;
pub mod parse;

pub use color::{
    Hsl, Rgb8, hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex, rgb_to_hsl,
    srgb_to_linear,
};
pub use error::{ColorError, ColorResult};
pub use parse::{ColorFormat, detect_format, normalize_to_hex, parse_color_to_hsl, require_hsl};
