//! Command-line options for `huewheel`.
//!
//! Flags are declared with `clap`'s derive API. The log level is resolved
//! after parsing, because it also depends on the environment.
//!
//! # Supported syntax
//!
//! | Syntax                      | Effect                               | Default   |
//! |-----------------------------|--------------------------------------|-----------|
//! | `COLOR`                     | Base color (any supported notation)  | `#aaa000` |
//! | `-s NAME`, `--scheme NAME`  | Scheme to generate                   | triadic   |
//! | `-a`, `--all`               | Generate every scheme                | off       |
//! | `--log FILE`                | Write log records to FILE            | stderr    |
//! | `-v`, `-vv`, `-vvv`         | Raise log level (info/debug/trace)   | warn      |
//! | `-q`, `--quiet`             | Disable logging                      |           |
//!
//! When neither `-v` nor `-q` is given, the `HUEWHEEL_LOG` environment
//! variable may name a level (`off`, `error`, `warn`, `info`, `debug`,
//! `trace`).

use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use thiserror::Error;

/// Base color used when none is given.
pub const DEFAULT_COLOR: &str = "#aaa000";

/// Environment variable consulted for the log level.
pub const LOG_ENV: &str = "HUEWHEEL_LOG";

/// Errors from resolving options after the command line has been parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("invalid log level '{0}' in {LOG_ENV} (expected off, error, warn, info, debug, trace)")]
    InvalidLevel(String),
}

#[derive(Debug, Parser)]
#[command(name = "huewheel")]
#[command(version)]
#[command(about = "Derive harmonious color schemes from a single color", long_about = None)]
pub struct Options {
    /// Base color: #RGB, #RRGGBB, rgb(r, g, b), rgba(r, g, b, a),
    /// hsl(h, s%, l%) or hsla(h, s%, l%, a)
    #[arg(default_value = DEFAULT_COLOR)]
    pub color: String,

    /// Scheme to generate: triadic, analogous, complementary,
    /// split-complementary or tetradic (default: triadic)
    ///
    /// Names are matched case-insensitively; an unknown name is reported
    /// by the session, not rejected here.
    #[arg(short, long, value_name = "NAME")]
    pub scheme: Option<String>,

    /// Print every scheme
    #[arg(short, long, default_value_t = false)]
    pub all: bool,

    /// Write log records to FILE instead of stderr
    #[arg(long = "log", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// More logging (repeatable: info, debug, trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// No logging
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Options {
    /// Resolve the log level.
    ///
    /// `-q` turns logging off, `-v` counts raise it from warn, and
    /// otherwise `env_level` (the value of [`LOG_ENV`], if set) names it.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidLevel`] if `env_level` is consulted
    /// and is not a level name.
    pub fn log_level(&self, env_level: Option<&str>) -> Result<LevelFilter, OptionsError> {
        if self.quiet {
            return Ok(LevelFilter::Off);
        }
        if self.verbose > 0 {
            return Ok(level_for_verbosity(self.verbose));
        }
        match env_level {
            Some(name) => LevelFilter::from_str(name.trim())
                .map_err(|_| OptionsError::InvalidLevel(name.to_owned())),
            None => Ok(LevelFilter::Warn),
        }
    }
}

/// Map a `-v` count onto a level, starting from the default of warn.
const fn level_for_verbosity(n: u8) -> LevelFilter {
    match n {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
