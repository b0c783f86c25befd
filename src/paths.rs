//! Path validation: normalisation, input-file checks, output-folder creation.
//!
//! Every path a user types goes through here before any tool is invoked, so
//! the subprocesses only ever see absolute, verified paths and their error
//! output never has to be second-guessed for "was the path even right".

use crate::error::XpdfMenuError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Return an absolute, lexically normalised form of `path`.
///
/// Relative paths are resolved against the current directory; `.` and
/// redundant separators are cleaned up. The path does not have to exist and
/// symlinks are not followed.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    match std::path::absolute(path) {
        Ok(abs) => abs,
        // absolute() only fails on an empty path (or a platform oddity);
        // fall back to the input so validation reports on something sensible.
        Err(_) => path.to_path_buf(),
    }
}

/// Validate that `path` exists and carries `expected_extension`
/// (case-insensitive). Returns the normalised absolute path.
///
/// `expected_extension` includes the dot, e.g. `".pdf"`.
pub fn validate_input_file(
    path: impl AsRef<Path>,
    expected_extension: &str,
) -> Result<PathBuf, XpdfMenuError> {
    let resolved = normalize(path);

    if !resolved.exists() {
        return Err(XpdfMenuError::NotFound { path: resolved });
    }

    let matches = resolved
        .to_string_lossy()
        .to_lowercase()
        .ends_with(&expected_extension.to_lowercase());
    if !matches {
        return Err(XpdfMenuError::InvalidExtension {
            path: resolved,
            expected: expected_extension.to_string(),
        });
    }

    debug!("Validated input file: {}", resolved.display());
    Ok(resolved)
}

/// Validate an output folder, creating it (and parents) if absent.
/// Idempotent. Returns the normalised absolute path.
pub fn validate_output_location(path: impl AsRef<Path>) -> Result<PathBuf, XpdfMenuError> {
    let resolved = normalize(path);

    std::fs::create_dir_all(&resolved).map_err(|source| XpdfMenuError::OutputDirFailed {
        path: resolved.clone(),
        source,
    })?;

    debug!("Output folder ready: {}", resolved.display());
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn normalize_makes_relative_paths_absolute() {
        let p = normalize("some/relative/file.pdf");
        assert!(p.is_absolute());
        assert!(p.ends_with("some/relative/file.pdf"));
    }

    #[test]
    fn normalize_cleans_cur_dir_segments() {
        let p = normalize("./a/./b.pdf");
        assert!(!p.to_string_lossy().contains("/./"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.pdf");
        let err = validate_input_file(&missing, ".pdf").unwrap_err();
        assert!(matches!(err, XpdfMenuError::NotFound { .. }), "got {err:?}");
    }

    #[test]
    fn wrong_extension_is_rejected_even_if_file_exists() {
        let dir = TempDir::new().unwrap();
        let doc = dir.path().join("report.docx");
        fs::write(&doc, b"not a pdf").unwrap();

        let err = validate_input_file(&doc, ".pdf").unwrap_err();
        match err {
            XpdfMenuError::InvalidExtension { expected, .. } => assert_eq!(expected, ".pdf"),
            other => panic!("expected InvalidExtension, got {other:?}"),
        }
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let doc = dir.path().join("REPORT.PDF");
        fs::write(&doc, b"%PDF-1.4").unwrap();

        let resolved = validate_input_file(&doc, ".pdf").unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("REPORT.PDF"));
    }

    #[test]
    fn nonexistence_wins_over_bad_extension() {
        // A missing path must report NotFound regardless of its suffix.
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.docx");
        let err = validate_input_file(&missing, ".pdf").unwrap_err();
        assert!(matches!(err, XpdfMenuError::NotFound { .. }));
    }

    #[test]
    fn output_location_is_created_and_idempotent() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out/images");

        let first = validate_output_location(&target).unwrap();
        assert!(first.is_dir());

        let second = validate_output_location(&target).unwrap();
        assert_eq!(first, second);
        assert!(second.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn unwritable_parent_reports_output_dir_failed() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        let result = validate_output_location(locked.join("child"));
        // Root bypasses permission bits; only assert when the OS enforced them.
        if let Err(err) = result {
            assert!(matches!(err, XpdfMenuError::OutputDirFailed { .. }));
        }

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }
}
