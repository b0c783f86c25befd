//! CLI binary for xpdf-menu.
//!
//! A thin shim over the library crate: parse flags, set up logging, verify
//! the external tools exist, then hand stdin/stdout to the menu loop.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use xpdf_menu::{check_tools, MenuConfig, MenuSession, ToolKind, ToolRunObserver};

const AFTER_HELP: &str = r#"EXTERNAL TOOLS:
  The four Xpdf command-line tools must be installed and on PATH:

  Tool        Operation
  ─────────   ─────────────────────────────
  pdftotext   1. Extract Text
  pdfimages   2. Extract Images  (invoked with -j for JPEG output)
  pdftops     3. Convert to PostScript
  pdftopng    4. Convert PDF to PNG

  Download: https://www.xpdfreader.com/download.html

EXAMPLES:
  # Start the interactive menu
  xpdf-menu

  # With debug logs on stderr
  xpdf-menu --verbose

  # Scripted use (one extract-text run, then exit)
  printf '1\ndoc.pdf\ndoc.txt\n\n5\n' | xpdf-menu --quiet

EXIT CODES:
  0   normal menu exit
  1   one or more required tools missing at startup
"#;

/// Interactive menu over the Xpdf tools (pdftotext, pdfimages, pdftops, pdftopng).
#[derive(Parser, Debug)]
#[command(
    name = "xpdf-menu",
    version,
    about = "Interactive menu over the Xpdf PDF tools",
    long_about = "An interactive menu that extracts text and images from PDF files and converts \
them to PostScript or PNG by driving the external Xpdf command-line tools. The tools themselves \
do all PDF processing; this program validates paths, runs them, and reports their errors.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "XPDF_MENU_VERBOSE")]
    verbose: bool,

    /// Suppress logs and the spinner; menu output only.
    #[arg(short, long, env = "XPDF_MENU_QUIET")]
    quiet: bool,

    /// Disable the spinner shown while an external tool runs.
    #[arg(long, env = "XPDF_MENU_NO_SPINNER")]
    no_spinner: bool,
}

/// Spinner shown on stderr while an external tool runs.
///
/// The menu loop is strictly sequential, so at most one spinner is live at a
/// time; the mutex only satisfies the `Sync` bound of the observer trait.
struct SpinnerObserver {
    current: Mutex<Option<ProgressBar>>,
}

impl SpinnerObserver {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            current: Mutex::new(None),
        })
    }
}

impl ToolRunObserver for SpinnerObserver {
    fn on_tool_start(&self, tool: ToolKind) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
        );
        bar.set_message(format!("Running {tool}…"));
        bar.enable_steady_tick(Duration::from_millis(80));
        *self.current.lock().unwrap() = Some(bar);
    }

    fn on_tool_complete(&self, _tool: ToolKind, _elapsed: Duration) {
        if let Some(bar) = self.current.lock().unwrap().take() {
            bar.finish_and_clear();
        }
    }

    fn on_tool_failed(&self, _tool: ToolKind, _detail: &str) {
        if let Some(bar) = self.current.lock().unwrap().take() {
            bar.finish_and_clear();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Startup tool check ───────────────────────────────────────────────
    // Fatal: the menu is useless without the tools, and finding out halfway
    // through an operation would be worse.
    let show_spinner = !cli.quiet && !cli.no_spinner && io::stderr().is_terminal();

    let mut builder = MenuConfig::builder();
    if show_spinner {
        builder = builder.observer(SpinnerObserver::new());
    }
    let config = builder.build().context("Invalid configuration")?;

    if let Err(e) = check_tools(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // ── Menu loop ────────────────────────────────────────────────────────
    let stdin = io::stdin();
    let stdout = io::stdout();
    MenuSession::new(&config, stdin.lock(), stdout.lock())
        .run()
        .context("Menu session failed")?;

    Ok(())
}
