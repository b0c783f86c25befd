//! Error types for the xpdf-menu library.
//!
//! A single enum covers every failure the orchestration layer can produce.
//! Only [`XpdfMenuError::ToolsMissing`] is fatal — it is raised once at
//! startup, before any menu interaction. Everything else is recovered at the
//! menu loop: printed to the user, and the loop returns to the menu.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the xpdf-menu library.
#[derive(Debug, Error)]
pub enum XpdfMenuError {
    // ── Input validation ──────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("The file '{path}' does not exist.\nCheck the path and try again.")]
    NotFound { path: PathBuf },

    /// Input file exists but does not carry the expected extension.
    #[error("The file '{path}' does not have the expected {expected} extension.")]
    InvalidExtension { path: PathBuf, expected: String },

    /// Output directory could not be created.
    #[error("Failed to create output folder '{path}': {source}")]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Tool errors ───────────────────────────────────────────────────────
    /// One or more required external tools are not resolvable on PATH.
    ///
    /// Fatal: raised at startup, before the menu is ever shown.
    #[error(
        "The following tools are not installed or not found in PATH: {}\n\
         Please install these tools and add them to your PATH.",
        .tools.join(", ")
    )]
    ToolsMissing { tools: Vec<String> },

    /// The external tool could not be spawned at all.
    ///
    /// Distinct from [`XpdfMenuError::ToolFailed`]: the tool passed the
    /// startup check but vanished (or lost execute permission) before this
    /// invocation.
    #[error("Failed to run '{tool}': {source}\nEnsure the Xpdf tools are still installed.")]
    SpawnFailed {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The external tool ran but exited with a non-zero status.
    #[error(
        "'{tool}' exited with {status}:\n{stderr}",
        status = .code.map(|c| format!("code {c}")).unwrap_or_else(|| "a signal".into())
    )]
    ToolFailed {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tools_missing_lists_every_tool() {
        let e = XpdfMenuError::ToolsMissing {
            tools: vec!["pdftops".into(), "pdftopng".into()],
        };
        let msg = e.to_string();
        assert!(msg.contains("pdftops, pdftopng"), "got: {msg}");
        assert!(msg.contains("PATH"));
    }

    #[test]
    fn tool_failed_display_with_code() {
        let e = XpdfMenuError::ToolFailed {
            tool: "pdftotext".into(),
            code: Some(3),
            stderr: "Syntax Error: bad xref".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("code 3"), "got: {msg}");
        assert!(msg.contains("bad xref"));
    }

    #[test]
    fn tool_failed_display_on_signal() {
        let e = XpdfMenuError::ToolFailed {
            tool: "pdftopng".into(),
            code: None,
            stderr: String::new(),
        };
        assert!(e.to_string().contains("a signal"));
    }

    #[test]
    fn invalid_extension_names_the_expected_suffix() {
        let e = XpdfMenuError::InvalidExtension {
            path: PathBuf::from("/tmp/report.docx"),
            expected: ".pdf".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("report.docx"));
        assert!(msg.contains(".pdf"));
    }
}
