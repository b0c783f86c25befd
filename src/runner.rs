//! Subprocess execution: spawn an external tool, wait, surface failures.
//!
//! The runner is deliberately dumb. It does not retry, does not time out,
//! and never reads the files a tool produced — success is zero exit status,
//! nothing else. A hung tool therefore hangs the session, which is the
//! documented trade-off of having no in-process PDF engine at all.

use crate::config::MenuConfig;
use crate::error::XpdfMenuError;
use crate::tools::ToolKind;
use std::ffi::OsStr;
use std::process::Command;
use std::time::Instant;
use tracing::{debug, info};

/// Run `tool` (under its configured command) with `args`, blocking until it
/// exits. stdout and stderr are captured; stderr is carried into the error
/// on non-zero exit.
pub fn run_tool<I, S>(config: &MenuConfig, tool: ToolKind, args: I) -> Result<(), XpdfMenuError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = config.command_for(tool);
    let args: Vec<std::ffi::OsString> = args.into_iter().map(|a| a.as_ref().to_owned()).collect();

    debug!(
        "Running: {} {}",
        program,
        args.iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let observer = config.observer();
    observer.on_tool_start(tool);
    let started = Instant::now();

    let output = Command::new(program).args(&args).output().map_err(|source| {
        let err = XpdfMenuError::SpawnFailed {
            tool: program.to_string(),
            source,
        };
        observer.on_tool_failed(tool, &err.to_string());
        err
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let err = XpdfMenuError::ToolFailed {
            tool: program.to_string(),
            code: output.status.code(),
            stderr,
        };
        observer.on_tool_failed(tool, &err.to_string());
        return Err(err);
    }

    let elapsed = started.elapsed();
    observer.on_tool_complete(tool, elapsed);
    info!("'{}' finished in {:.1}s", program, elapsed.as_secs_f64());
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::progress::ToolRunObserver;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn sh_config() -> MenuConfig {
        MenuConfig::builder()
            .tool_command(ToolKind::PdfToText, "sh")
            .build()
            .unwrap()
    }

    #[test]
    fn zero_exit_is_success() {
        let config = sh_config();
        run_tool(&config, ToolKind::PdfToText, ["-c", "exit 0"]).unwrap();
    }

    #[test]
    fn nonzero_exit_carries_code_and_stderr() {
        let config = sh_config();
        let err = run_tool(
            &config,
            ToolKind::PdfToText,
            ["-c", "echo 'Syntax Error: boom' >&2; exit 3"],
        )
        .unwrap_err();

        match err {
            XpdfMenuError::ToolFailed { tool, code, stderr } => {
                assert_eq!(tool, "sh");
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "Syntax Error: boom");
            }
            other => panic!("expected ToolFailed, got {other:?}"),
        }
    }

    #[test]
    fn unspawnable_command_is_spawn_failed() {
        let config = MenuConfig::builder()
            .tool_command(ToolKind::PdfToText, "no-such-binary-9931")
            .build()
            .unwrap();
        let err = run_tool(&config, ToolKind::PdfToText, ["x.pdf"]).unwrap_err();
        assert!(matches!(err, XpdfMenuError::SpawnFailed { .. }), "got {err:?}");
    }

    #[test]
    fn observer_sees_success_and_failure() {
        #[derive(Default)]
        struct Counts {
            ok: AtomicUsize,
            failed: AtomicUsize,
        }
        impl ToolRunObserver for Counts {
            fn on_tool_complete(&self, _t: ToolKind, _e: std::time::Duration) {
                self.ok.fetch_add(1, Ordering::SeqCst);
            }
            fn on_tool_failed(&self, _t: ToolKind, _d: &str) {
                self.failed.fetch_add(1, Ordering::SeqCst);
            }
        }

        let counts = Arc::new(Counts::default());
        let config = MenuConfig::builder()
            .tool_command(ToolKind::PdfToText, "sh")
            .observer(counts.clone())
            .build()
            .unwrap();

        run_tool(&config, ToolKind::PdfToText, ["-c", "exit 0"]).unwrap();
        let _ = run_tool(&config, ToolKind::PdfToText, ["-c", "exit 1"]);

        assert_eq!(counts.ok.load(Ordering::SeqCst), 1);
        assert_eq!(counts.failed.load(Ordering::SeqCst), 1);
    }
}
