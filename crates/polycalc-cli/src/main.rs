//! polycalc - interactive calculator for single-variable polynomials

mod input;
mod session;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use polycalc_poly::RenderStyle;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use input::{EditorSource, LineSource, ReaderSource};
use session::{Session, SessionOptions};

/// Verbosity level of the diagnostic log on stderr
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity {
    /// No log output
    Quiet,
    /// Warnings and errors
    Normal,
    /// Menu actions
    Verbose,
    /// Division steps and rejected input
    Debug,
    /// Everything, including dropped rounding residues
    Trace,
}

impl Verbosity {
    fn level(self) -> Option<Level> {
        match self {
            Verbosity::Quiet => None,
            Verbosity::Normal => Some(Level::WARN),
            Verbosity::Verbose => Some(Level::INFO),
            Verbosity::Debug => Some(Level::DEBUG),
            Verbosity::Trace => Some(Level::TRACE),
        }
    }
}

/// Term order of printed polynomials
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum Style {
    /// Highest degree first (`x^2 - 1`)
    Conventional,
    /// Lowest degree first (` - 1 + x^2`)
    Ascending,
}

impl From<Style> for RenderStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Conventional => RenderStyle::Conventional,
            Style::Ascending => RenderStyle::Ascending,
        }
    }
}

/// Polynomial calculator: add, subtract, multiply and divide polynomials
/// with real coefficients from an interactive menu.
#[derive(Parser, Debug, Clone)]
#[command(name = "polycalc")]
#[command(version)]
#[command(about = "Interactive single-variable polynomial calculator")]
struct Args {
    /// Name of the polynomial variable
    #[arg(long, default_value = "x")]
    variable: char,

    /// Term order of printed polynomials
    #[arg(short, long, value_enum, default_value = "conventional")]
    style: Style,

    /// Verbosity level
    #[arg(short, long, value_enum, default_value = "normal")]
    verbosity: Verbosity,

    /// Enable quiet mode (equivalent to --verbosity quiet)
    #[arg(short, long)]
    quiet: bool,

    /// Read plain lines from stdin even when it is a terminal
    #[arg(long)]
    plain: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let verbosity = if args.quiet {
        Verbosity::Quiet
    } else {
        args.verbosity
    };

    if let Some(level) = verbosity.level() {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(io::stderr)
            .finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Failed to set tracing subscriber: {e}");
            return ExitCode::FAILURE;
        }
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("polycalc: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let options = SessionOptions {
        variable: args.variable,
        style: args.style.into(),
    };

    if !args.plain && io::stdin().is_terminal() {
        info!("starting line editor session");
        run_session(EditorSource::new()?, options)
    } else {
        info!("reading plain lines from stdin");
        run_session(ReaderSource::new(io::stdin().lock(), io::stdout()), options)
    }
}

fn run_session<S: LineSource>(source: S, options: SessionOptions) -> Result<()> {
    Session::new(source, io::stdout(), options).run()
}
