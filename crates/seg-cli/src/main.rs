//! Demo CLI over the segmentation engine: reads a file (or stdin) and
//! prints one segment per line, literal-escaped, for the requested
//! boundary kind.

use std::fmt;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use seg_core::{
    grapheme_cluster_units, line_units, sentence_units, word_units,
};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Grapheme clusters (UAX #29).
    #[value(name = "g")]
    Grapheme,
    /// Words (UAX #29).
    #[value(name = "w")]
    Word,
    /// Sentences (UAX #29).
    #[value(name = "s")]
    Sentence,
    /// Lines (UAX #14).
    #[value(name = "l")]
    Line,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Grapheme => "g",
            Mode::Word => "w",
            Mode::Sentence => "s",
            Mode::Line => "l",
        };
        f.write_str(s)
    }
}

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "seg-cli", version, about = "Unicode text segmentation demo")]
struct Args {
    /// Boundary kind to segment by.
    #[arg(long = "mode", value_enum)]
    mode: Mode,

    /// Use the legacy (pre-LB1-tailoring) ambiguous-class resolution.
    /// Only meaningful with `--mode l`.
    #[arg(long)]
    legacy: bool,

    /// Input file, or `-` (the default) for standard input.
    path: Option<PathBuf>,
}

/// Argument-validation failures, distinct from I/O failures: these are
/// the ones that map to exit code 2 (spec.md §6).
#[derive(Debug, thiserror::Error)]
enum ArgsError {
    #[error("--legacy only applies to --mode l, not --mode {0}")]
    LegacyRequiresLineMode(Mode),
}

fn validate(args: &Args) -> Result<(), ArgsError> {
    if args.legacy && args.mode != Mode::Line {
        return Err(ArgsError::LegacyRequiresLineMode(args.mode));
    }
    Ok(())
}

fn configure_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path.as_deref() {
        None => read_stdin(),
        Some(p) if p.as_os_str() == "-" => read_stdin(),
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read standard input")?;
    Ok(buf)
}

/// Escapes a segment's code points for one-line-per-segment output, the
/// way `core-text`'s debug helpers render buffer content for logs.
fn escape_segment(unit: &[char]) -> String {
    unit.iter().flat_map(|c| c.escape_default()).collect()
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    validate(args).map_err(|e| {
        info!(target: "cli.args", error = %e, "argument_error");
        e
    })?;

    let content = read_input(&args.path)?;
    let text: Vec<char> = content.chars().collect();
    debug!(target: "cli.input", code_points = text.len(), mode = %args.mode, "loaded");

    let units: Vec<&[char]> = match args.mode {
        Mode::Grapheme => grapheme_cluster_units(&text, None),
        Mode::Word => word_units(&text, None),
        Mode::Sentence => sentence_units(&text, None),
        Mode::Line => line_units(&text, args.legacy, None),
    };

    for unit in units {
        writeln!(out, "{}", escape_segment(unit))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    configure_logging();
    let args = Args::parse();

    if let Err(e) = validate(&args) {
        eprintln!("error: {e}");
        return ExitCode::from(2);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match run(&args, &mut handle) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(target: "cli", error = %e, "run_failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_flag_without_line_mode_is_rejected() {
        let args = Args {
            mode: Mode::Word,
            legacy: true,
            path: None,
        };
        assert!(validate(&args).is_err());
    }

    #[test]
    fn legacy_flag_with_line_mode_is_accepted() {
        let args = Args {
            mode: Mode::Line,
            legacy: true,
            path: None,
        };
        assert!(validate(&args).is_ok());
    }

    #[test]
    fn escape_segment_renders_newline_as_escape() {
        let unit: Vec<char> = "a\nb".chars().collect();
        assert_eq!(escape_segment(&unit), "a\\nb");
    }

    #[test]
    fn grapheme_units_render_one_escaped_line_each() {
        let mut out = Vec::new();
        let text: Vec<char> = "g\u{0308}o".chars().collect();
        let units = grapheme_cluster_units(&text, None);
        for unit in units {
            writeln!(&mut out, "{}", escape_segment(unit)).unwrap();
        }
        let rendered = String::from_utf8(out).unwrap();
        assert_eq!(rendered, "g\u{308}\no\n");
    }
}
