//! Configuration for the menu and its four operations.
//!
//! Everything tunable lives in one [`MenuConfig`] built via its
//! [`MenuConfigBuilder`]. The most important knob in practice is the per-tool
//! command override: tests point it at fake executables, and users with the
//! tools installed outside PATH can point it at absolute paths.

use crate::error::XpdfMenuError;
use crate::progress::ToolRunObserver;
use crate::tools::ToolKind;
use std::fmt;
use std::sync::Arc;

/// Configuration for a [`crate::menu::MenuSession`] and the operation
/// functions in [`crate::ops`].
///
/// # Example
/// ```rust
/// use xpdf_menu::MenuConfig;
///
/// let config = MenuConfig::builder()
///     .jpeg_images(false)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct MenuConfig {
    /// Command invoked for text extraction. Default: `pdftotext`.
    pub pdftotext_cmd: String,

    /// Command invoked for image extraction. Default: `pdfimages`.
    pub pdfimages_cmd: String,

    /// Command invoked for PostScript conversion. Default: `pdftops`.
    pub pdftops_cmd: String,

    /// Command invoked for PNG rasterisation. Default: `pdftopng`.
    pub pdftopng_cmd: String,

    /// Pass `-j` to pdfimages so embedded JPEGs are written as-is instead of
    /// being re-encoded. Default: true.
    pub jpeg_images: bool,

    /// Filename prefix for extracted images inside the output folder.
    /// Default: `image` (pdfimages appends `-NNN.jpg`/`.ppm` itself).
    pub image_prefix: String,

    /// Filename prefix for rasterised pages inside the output folder.
    /// Default: `page` (pdftopng appends `-NNNNNN.png` itself).
    pub page_prefix: String,

    /// Observer notified around each tool run. Default: none.
    pub observer: Option<Arc<dyn ToolRunObserver>>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            pdftotext_cmd: ToolKind::PdfToText.default_command().to_string(),
            pdfimages_cmd: ToolKind::PdfImages.default_command().to_string(),
            pdftops_cmd: ToolKind::PdfToPs.default_command().to_string(),
            pdftopng_cmd: ToolKind::PdfToPng.default_command().to_string(),
            jpeg_images: true,
            image_prefix: "image".to_string(),
            page_prefix: "page".to_string(),
            observer: None,
        }
    }
}

impl fmt::Debug for MenuConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuConfig")
            .field("pdftotext_cmd", &self.pdftotext_cmd)
            .field("pdfimages_cmd", &self.pdfimages_cmd)
            .field("pdftops_cmd", &self.pdftops_cmd)
            .field("pdftopng_cmd", &self.pdftopng_cmd)
            .field("jpeg_images", &self.jpeg_images)
            .field("image_prefix", &self.image_prefix)
            .field("page_prefix", &self.page_prefix)
            .field("observer", &self.observer.as_ref().map(|_| "<dyn ToolRunObserver>"))
            .finish()
    }
}

impl MenuConfig {
    /// Create a new builder for `MenuConfig`.
    pub fn builder() -> MenuConfigBuilder {
        MenuConfigBuilder {
            config: Self::default(),
        }
    }

    /// The command configured for `tool`.
    pub fn command_for(&self, tool: ToolKind) -> &str {
        match tool {
            ToolKind::PdfToText => &self.pdftotext_cmd,
            ToolKind::PdfImages => &self.pdfimages_cmd,
            ToolKind::PdfToPs => &self.pdftops_cmd,
            ToolKind::PdfToPng => &self.pdftopng_cmd,
        }
    }

    /// The configured observer, or a no-op.
    pub(crate) fn observer(&self) -> Arc<dyn ToolRunObserver> {
        self.observer
            .clone()
            .unwrap_or_else(|| Arc::new(crate::progress::NoopObserver))
    }
}

/// Builder for [`MenuConfig`].
#[derive(Debug)]
pub struct MenuConfigBuilder {
    config: MenuConfig,
}

impl MenuConfigBuilder {
    /// Override the command for one tool.
    pub fn tool_command(mut self, tool: ToolKind, cmd: impl Into<String>) -> Self {
        let cmd = cmd.into();
        match tool {
            ToolKind::PdfToText => self.config.pdftotext_cmd = cmd,
            ToolKind::PdfImages => self.config.pdfimages_cmd = cmd,
            ToolKind::PdfToPs => self.config.pdftops_cmd = cmd,
            ToolKind::PdfToPng => self.config.pdftopng_cmd = cmd,
        }
        self
    }

    pub fn jpeg_images(mut self, v: bool) -> Self {
        self.config.jpeg_images = v;
        self
    }

    pub fn image_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.image_prefix = prefix.into();
        self
    }

    pub fn page_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.page_prefix = prefix.into();
        self
    }

    pub fn observer(mut self, observer: Arc<dyn ToolRunObserver>) -> Self {
        self.config.observer = Some(observer);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<MenuConfig, XpdfMenuError> {
        let c = &self.config;
        for tool in ToolKind::ALL {
            if c.command_for(tool).trim().is_empty() {
                return Err(XpdfMenuError::ToolsMissing {
                    tools: vec![tool.default_command().to_string()],
                });
            }
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_commands_match_tool_names() {
        let c = MenuConfig::default();
        assert_eq!(c.command_for(ToolKind::PdfToText), "pdftotext");
        assert_eq!(c.command_for(ToolKind::PdfImages), "pdfimages");
        assert_eq!(c.command_for(ToolKind::PdfToPs), "pdftops");
        assert_eq!(c.command_for(ToolKind::PdfToPng), "pdftopng");
        assert!(c.jpeg_images);
    }

    #[test]
    fn builder_overrides_single_command() {
        let c = MenuConfig::builder()
            .tool_command(ToolKind::PdfToPng, "/opt/xpdf/bin/pdftopng")
            .build()
            .unwrap();
        assert_eq!(c.command_for(ToolKind::PdfToPng), "/opt/xpdf/bin/pdftopng");
        // Others untouched.
        assert_eq!(c.command_for(ToolKind::PdfToText), "pdftotext");
    }

    #[test]
    fn empty_command_is_rejected() {
        let err = MenuConfig::builder()
            .tool_command(ToolKind::PdfToPs, "  ")
            .build()
            .unwrap_err();
        assert!(matches!(err, XpdfMenuError::ToolsMissing { .. }));
    }

    #[test]
    fn debug_impl_does_not_require_observer_debug() {
        let c = MenuConfig::builder()
            .observer(Arc::new(crate::progress::NoopObserver))
            .build()
            .unwrap();
        let s = format!("{c:?}");
        assert!(s.contains("dyn ToolRunObserver"));
    }
}
