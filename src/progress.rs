//! Observer hooks fired around each external tool invocation.
//!
//! The library stays terminal-agnostic: it reports lifecycle events through
//! this trait and lets the caller decide how to surface them. The `xpdf-menu`
//! binary implements it with an indicatif spinner; tests implement it with a
//! plain counter.

use crate::tools::ToolKind;
use std::time::Duration;

/// Callback interface for external tool runs.
///
/// All methods have empty default bodies so implementors override only what
/// they care about. Invocations are strictly sequential (the menu loop is
/// single-threaded), but the trait requires `Send + Sync` so an
/// implementation can be shared via `Arc` with the config.
pub trait ToolRunObserver: Send + Sync {
    /// Called immediately before the tool process is spawned.
    fn on_tool_start(&self, _tool: ToolKind) {}

    /// Called after the tool exited with status zero.
    fn on_tool_complete(&self, _tool: ToolKind, _elapsed: Duration) {}

    /// Called after a spawn failure or non-zero exit. `detail` is the
    /// rendered error message.
    fn on_tool_failed(&self, _tool: ToolKind, _detail: &str) {}
}

/// Observer that ignores every event. Used when no observer is configured.
pub struct NoopObserver;

impl ToolRunObserver for NoopObserver {}
