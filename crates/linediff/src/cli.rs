use crate::config::{ColorChoice, Config, OutputFormat, Settings};
use crate::views::{self, Labels};
use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use linediff_core::{DiffEngine, DiffResult, LineEnding};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const STDIN_PATH: &str = "-";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Old text file, or `-` for stdin
    #[arg(value_name = "OLD")]
    pub old: PathBuf,

    /// New text file, or `-` for stdin
    #[arg(value_name = "NEW")]
    pub new: PathBuf,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Context lines around unified hunks
    #[arg(short = 'U', long, value_name = "N")]
    pub context: Option<usize>,

    /// When to color output
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Total width of side-by-side output
    #[arg(long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when the inputs differ
    #[arg(long)]
    pub exit_code: bool,
}

impl Args {
    /// Merge flags over config values
    pub fn settings(&self, config: &Config, is_tty: bool) -> Settings {
        let display = &config.display;
        Settings {
            format: self.format.unwrap_or(display.format),
            color: self.color.unwrap_or(display.color).enabled(is_tty),
            context: self.context.unwrap_or(display.context),
            width: self.width.unwrap_or(display.width),
        }
    }
}

pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_env("LINEDIFF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(err) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("linediff: logging disabled: {err}");
    }
}

pub fn run() -> Result<ExitCode> {
    init_logging();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    let stdout = std::io::stdout();
    let settings = args.settings(&config, stdout.is_tty());

    let differs = run_with_settings(&args, &settings, &mut stdout.lock())?;
    if args.exit_code && differs {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Diff the inputs named by `args` and render to `out`. Returns whether they differ.
fn run_with_settings(args: &Args, settings: &Settings, out: &mut impl Write) -> Result<bool> {
    if is_stdin(&args.old) && is_stdin(&args.new) {
        bail!("only one of OLD and NEW can be read from stdin");
    }
    let engine = DiffEngine::new().with_context(settings.context);
    let result = if is_stdin(&args.old) || is_stdin(&args.new) {
        let old = read_input(&args.old)?;
        let new = read_input(&args.new)?;
        engine.diff(&old, &new)
    } else {
        engine.diff_files(&args.old, &args.new)?.result
    };
    warn_on_line_endings(&result);
    tracing::debug!(
        added = result.stats.added,
        removed = result.stats.removed,
        unchanged = result.stats.unchanged,
        "diff computed"
    );

    let labels = Labels {
        old: label(&args.old),
        new: label(&args.new),
    };
    views::render(out, &engine, &result, &labels, settings).context("failed to write output")?;

    Ok(!result.is_identical())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

fn label(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Lines are compared verbatim, so `\r\n` input never matches `\n` input
fn warn_on_line_endings(result: &DiffResult) {
    let old_ending = LineEnding::of_lines(&result.old_lines());
    let new_ending = LineEnding::of_lines(&result.new_lines());
    if old_ending.conflicts_with(new_ending) {
        tracing::warn!(
            old = ?old_ending,
            new = ?new_ending,
            "inputs use different line endings; carriage returns are compared as content"
        );
    }
}
