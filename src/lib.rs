//! # xpdf-menu
//!
//! An interactive command-line menu over the Xpdf tools: extract text,
//! extract embedded images, convert to PostScript, and rasterise pages to
//! PNG. All PDF processing is delegated to four external executables —
//! `pdftotext`, `pdfimages`, `pdftops`, `pdftopng` — resolved on PATH at
//! startup; this crate is only the orchestration around them: path
//! validation, tool-availability checking, subprocess invocation, and
//! error surfacing.
//!
//! ## Flow
//!
//! ```text
//! startup ── check_tools ── abort (exit 1) if any tool is missing
//!    │
//!    └─ menu loop:  show menu → read choice → validate paths →
//!                   run external tool → report → back to menu
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use xpdf_menu::{check_tools, MenuConfig, MenuSession};
//! use std::io;
//!
//! fn main() -> io::Result<()> {
//!     let config = MenuConfig::default();
//!     if let Err(e) = check_tools(&config) {
//!         eprintln!("Error: {e}");
//!         std::process::exit(1);
//!     }
//!     let stdin = io::stdin();
//!     let stdout = io::stdout();
//!     MenuSession::new(&config, stdin.lock(), stdout.lock()).run()
//! }
//! ```
//!
//! The operations are also usable directly, without the menu:
//!
//! ```rust,no_run
//! use xpdf_menu::{ops, MenuConfig};
//!
//! let config = MenuConfig::default();
//! let out = ops::extract_text(&config, "report.pdf", "report.txt")?;
//! println!("saved to {}", out.display());
//! # Ok::<(), xpdf_menu::XpdfMenuError>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `xpdf-menu` binary (clap + anyhow + tracing-subscriber + indicatif) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod menu;
pub mod ops;
pub mod paths;
pub mod progress;
pub mod runner;
pub mod tools;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{MenuConfig, MenuConfigBuilder};
pub use error::XpdfMenuError;
pub use menu::MenuSession;
pub use ops::{Operation, PDF_EXTENSION};
pub use progress::ToolRunObserver;
pub use tools::{check_tools, ToolKind};
