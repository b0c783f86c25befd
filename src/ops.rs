//! The four PDF operations, each a thin composition of path validation and
//! subprocess invocation.
//!
//! Every operation follows the same shape: validate the input PDF, resolve
//! (and for folder targets, create) the output location, hand the argument
//! vector to the runner, and return the resolved output location for the
//! caller's success message. Nothing here inspects what the tool actually
//! wrote — zero exit status is the whole success criterion, and pre-existing
//! outputs are overwritten without ceremony, as the Xpdf tools themselves do.

use crate::config::MenuConfig;
use crate::error::XpdfMenuError;
use crate::paths::{normalize, validate_input_file, validate_output_location};
use crate::runner::run_tool;
use crate::tools::ToolKind;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

/// Extension every input file must carry.
pub const PDF_EXTENSION: &str = ".pdf";

/// The four transformations offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ExtractText,
    ExtractImages,
    ConvertToPostScript,
    ConvertToPng,
}

impl Operation {
    /// Menu label, in menu order.
    pub fn label(self) -> &'static str {
        match self {
            Operation::ExtractText => "Extract Text",
            Operation::ExtractImages => "Extract Images",
            Operation::ConvertToPostScript => "Convert to PostScript",
            Operation::ConvertToPng => "Convert PDF to PNG",
        }
    }

    /// The external tool this operation drives.
    pub fn tool(self) -> ToolKind {
        match self {
            Operation::ExtractText => ToolKind::PdfToText,
            Operation::ExtractImages => ToolKind::PdfImages,
            Operation::ConvertToPostScript => ToolKind::PdfToPs,
            Operation::ConvertToPng => ToolKind::PdfToPng,
        }
    }

    /// True when the operation writes many files under a folder (the second
    /// prompt asks for a folder rather than a file path).
    pub fn writes_to_folder(self) -> bool {
        matches!(self, Operation::ExtractImages | Operation::ConvertToPng)
    }
}

/// Extract text: `pdftotext <pdf> <out.txt>`.
///
/// Returns the resolved output file path.
pub fn extract_text(
    config: &MenuConfig,
    pdf_path: impl AsRef<Path>,
    output_txt_path: impl AsRef<Path>,
) -> Result<PathBuf, XpdfMenuError> {
    let pdf = validate_input_file(pdf_path, PDF_EXTENSION)?;
    let out = normalize(output_txt_path);

    run_tool(config, ToolKind::PdfToText, [pdf.as_os_str(), out.as_os_str()])?;
    info!("Text extracted to {}", out.display());
    Ok(out)
}

/// Extract embedded images: `pdfimages [-j] <pdf> <folder>/image`.
///
/// The final argument is a filename *prefix*; pdfimages appends its own
/// numbering and extension. Returns the resolved output folder.
pub fn extract_images(
    config: &MenuConfig,
    pdf_path: impl AsRef<Path>,
    output_folder: impl AsRef<Path>,
) -> Result<PathBuf, XpdfMenuError> {
    let pdf = validate_input_file(pdf_path, PDF_EXTENSION)?;
    let folder = validate_output_location(output_folder)?;
    let prefix = folder.join(&config.image_prefix);

    let mut args: Vec<OsString> = Vec::with_capacity(3);
    if config.jpeg_images {
        args.push("-j".into());
    }
    args.push(pdf.into_os_string());
    args.push(prefix.into_os_string());

    run_tool(config, ToolKind::PdfImages, args)?;
    info!("Images extracted to {}", folder.display());
    Ok(folder)
}

/// Convert to PostScript: `pdftops <pdf> <out.ps>`.
///
/// Returns the resolved output file path.
pub fn convert_to_postscript(
    config: &MenuConfig,
    pdf_path: impl AsRef<Path>,
    output_ps_path: impl AsRef<Path>,
) -> Result<PathBuf, XpdfMenuError> {
    let pdf = validate_input_file(pdf_path, PDF_EXTENSION)?;
    let out = normalize(output_ps_path);

    run_tool(config, ToolKind::PdfToPs, [pdf.as_os_str(), out.as_os_str()])?;
    info!("PDF converted to PostScript at {}", out.display());
    Ok(out)
}

/// Rasterise pages to PNG: `pdftopng <pdf> <folder>/page`.
///
/// Like [`extract_images`], the final argument is a prefix. Returns the
/// resolved output folder.
pub fn convert_to_png(
    config: &MenuConfig,
    pdf_path: impl AsRef<Path>,
    output_folder: impl AsRef<Path>,
) -> Result<PathBuf, XpdfMenuError> {
    let pdf = validate_input_file(pdf_path, PDF_EXTENSION)?;
    let folder = validate_output_location(output_folder)?;
    let prefix = folder.join(&config.page_prefix);

    run_tool(
        config,
        ToolKind::PdfToPng,
        [pdf.as_os_str(), prefix.as_os_str()],
    )?;
    info!("PDF pages rasterised to {}", folder.display());
    Ok(folder)
}

/// Dispatch `op` with the two user-supplied paths.
///
/// `output` is interpreted as a file path or a folder depending on
/// [`Operation::writes_to_folder`]. Returns the resolved output location.
pub fn dispatch(
    config: &MenuConfig,
    op: Operation,
    pdf_path: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<PathBuf, XpdfMenuError> {
    match op {
        Operation::ExtractText => extract_text(config, pdf_path, output),
        Operation::ExtractImages => extract_images(config, pdf_path, output),
        Operation::ConvertToPostScript => convert_to_postscript(config, pdf_path, output),
        Operation::ConvertToPng => convert_to_png(config, pdf_path, output),
    }
}
