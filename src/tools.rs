//! Startup check that the external Xpdf tools are resolvable.
//!
//! The whole program is glue around four executables; discovering halfway
//! through an operation that one is missing makes for a poor session. The
//! check runs once before the menu is shown and aborts with every missing
//! name at once, so the user fixes their installation in one go.

use crate::config::MenuConfig;
use crate::error::XpdfMenuError;
use tracing::debug;

/// The four external tools this program drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// `pdftotext` — text extraction.
    PdfToText,
    /// `pdfimages` — embedded image extraction.
    PdfImages,
    /// `pdftops` — PostScript conversion.
    PdfToPs,
    /// `pdftopng` — page rasterisation to PNG.
    PdfToPng,
}

impl ToolKind {
    /// Every tool, in the order the startup check reports them.
    pub const ALL: [ToolKind; 4] = [
        ToolKind::PdfToText,
        ToolKind::PdfImages,
        ToolKind::PdfToPs,
        ToolKind::PdfToPng,
    ];

    /// The conventional executable name for this tool.
    pub fn default_command(self) -> &'static str {
        match self {
            ToolKind::PdfToText => "pdftotext",
            ToolKind::PdfImages => "pdfimages",
            ToolKind::PdfToPs => "pdftops",
            ToolKind::PdfToPng => "pdftopng",
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.default_command())
    }
}

/// Check that every configured tool command resolves to an executable.
///
/// Commands containing a path separator (absolute or relative overrides) are
/// accepted when they point at an existing executable; bare names are
/// resolved against PATH, exactly like a shell would.
///
/// Returns `Err(ToolsMissing)` listing every unresolved command. Callers
/// treat this as fatal at startup.
pub fn check_tools(config: &MenuConfig) -> Result<(), XpdfMenuError> {
    let missing: Vec<String> = ToolKind::ALL
        .iter()
        .map(|&tool| config.command_for(tool))
        .filter(|cmd| !is_tool_installed(cmd))
        .map(|cmd| cmd.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(XpdfMenuError::ToolsMissing { tools: missing })
    }
}

/// True when `command` resolves to an executable.
fn is_tool_installed(command: &str) -> bool {
    match which::which(command) {
        Ok(path) => {
            debug!("Resolved '{}' -> {}", command, path.display());
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_all(cmd: &str) -> MenuConfig {
        let mut builder = MenuConfig::builder();
        for tool in ToolKind::ALL {
            builder = builder.tool_command(tool, cmd);
        }
        builder.build().unwrap()
    }

    #[test]
    fn missing_tools_are_all_reported() {
        let config = config_with_all("definitely-not-a-real-tool-4712");
        let err = check_tools(&config).unwrap_err();
        match err {
            XpdfMenuError::ToolsMissing { tools } => {
                assert_eq!(tools.len(), 4);
                assert!(tools.iter().all(|t| t == "definitely-not-a-real-tool-4712"));
            }
            other => panic!("expected ToolsMissing, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn resolvable_commands_pass() {
        // `sh` is on PATH everywhere we run tests.
        let config = config_with_all("sh");
        check_tools(&config).expect("sh should resolve");
    }

    #[cfg(unix)]
    #[test]
    fn absolute_override_counts_as_resolved() {
        let config = config_with_all("/bin/sh");
        check_tools(&config).expect("/bin/sh should resolve");
    }

    #[cfg(unix)]
    #[test]
    fn one_missing_tool_is_singled_out() {
        let config = MenuConfig::builder()
            .tool_command(ToolKind::PdfToText, "sh")
            .tool_command(ToolKind::PdfImages, "sh")
            .tool_command(ToolKind::PdfToPs, "sh")
            .tool_command(ToolKind::PdfToPng, "no-such-pdftopng-here")
            .build()
            .unwrap();
        let err = check_tools(&config).unwrap_err();
        match err {
            XpdfMenuError::ToolsMissing { tools } => {
                assert_eq!(tools, vec!["no-such-pdftopng-here".to_string()]);
            }
            other => panic!("expected ToolsMissing, got {other:?}"),
        }
    }

    #[test]
    fn check_order_is_stable() {
        let names: Vec<&str> = ToolKind::ALL.iter().map(|t| t.default_command()).collect();
        assert_eq!(names, ["pdftotext", "pdfimages", "pdftops", "pdftopng"]);
    }
}
