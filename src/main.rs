// SPDX-License-Identifier: MIT
//
// huewheel — color scheme generator for the command line.
//
// This is the main binary that wires together the crates:
//
//   hue-color  → parse hex/rgb/hsl strings, convert HSL ↔ RGB ↔ hex
//   hue-scheme → hue-rotation schemes, luminance, black/white text
//
// A run flows through:
//
//   argv → Options → Session (color + scheme) → generate_scheme
//        → one line per swatch: hex, text color, luminance
//
// Core failures (bad color, unknown scheme) are caught by the Session and
// logged; they surface as a non-zero exit status, never a panic.

mod options;
mod session;

use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use clap::Parser;
use hue_color::detect_format;
use hue_scheme::{SchemeKind, relative_luminance};
use log::{LevelFilter, SetLoggerError};
use simplelog::{Config, WriteLogger};
use thiserror::Error;

use crate::options::{LOG_ENV, Options};
use crate::session::Session;

/// Errors from installing the global logger.
#[derive(Debug, Error)]
enum LoggingError {
    #[error("failed to open log file: {0}")]
    Open(#[from] io::Error),

    #[error("failed to install logger: {0}")]
    Install(SetLoggerError),
}

fn main() {
    let options = Options::parse();

    let env_level = env::var(LOG_ENV).ok();
    let level = options.log_level(env_level.as_deref()).unwrap_or_else(|e| {
        eprintln!("huewheel: {e}");
        process::exit(2);
    });

    if let Err(e) = init_logging(options.log_file.as_deref(), level) {
        eprintln!("huewheel: {e}");
        process::exit(1);
    }

    let stdout = io::stdout();
    match run(&options, &mut stdout.lock()) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("huewheel: {e}");
            process::exit(1);
        }
    }
}

/// Install the global logger: the `--log` file if given, stderr otherwise.
fn init_logging(log_file: Option<&Path>, level: LevelFilter) -> Result<(), LoggingError> {
    match log_file {
        Some(path) => WriteLogger::init(level, Config::default(), File::create(path)?),
        None => WriteLogger::init(level, Config::default(), io::stderr()),
    }
    .map_err(LoggingError::Install)
}

/// Generate and print the requested schemes.
///
/// Returns `Ok(false)` if any scheme could not be generated (the reason has
/// already been logged by the session).
fn run(options: &Options, out: &mut impl Write) -> io::Result<bool> {
    let mut session = Session::default();
    session.set_color(options.color.as_str());

    if let Some(name) = &options.scheme {
        if !session.set_scheme_name(name) {
            return Ok(false);
        }
    }

    match detect_format(session.color()) {
        Some(format) => log::debug!("input {:?} is {format}", session.color()),
        None => log::debug!("input {:?} has no recognizable format", session.color()),
    }

    let kinds: Vec<SchemeKind> = if options.all {
        SchemeKind::all().to_vec()
    } else {
        vec![session.scheme()]
    };

    let mut ok = true;
    for (i, kind) in kinds.into_iter().enumerate() {
        session.set_scheme(kind);
        if !session.generate_scheme() {
            ok = false;
            break;
        }
        if i > 0 {
            writeln!(out)?;
        }
        render(&mut session, out)?;
    }

    Ok(ok)
}

/// Print the session's current scheme: a header, then one swatch per line.
fn render(session: &mut Session, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{} of {}", session.scheme(), session.original_color())?;
    for index in 0..session.colors().len() {
        if !session.select_swatch(index) {
            continue;
        }
        let style = session.style();
        match relative_luminance(&style.background_color) {
            Ok(luminance) => writeln!(
                out,
                "  {}  text: {}  luminance: {luminance:.3}",
                style.background_color, style.color
            )?,
            Err(e) => {
                log::error!("Error computing luminance for {}: {e}", style.background_color);
                writeln!(out, "  {}  text: {}", style.background_color, style.color)?;
            }
        }
    }
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
