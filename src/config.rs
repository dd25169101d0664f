//! Runtime configuration and the injected `Environment` port.
//!
//! Per spec.md §9 Design Notes, the mappings-WebAssembly lookup and theme
//! detection are environmental concerns owned by the browser-extension
//! host, not the core. The core accepts them through this trait instead of
//! reaching for a global singleton.

use crate::position::MAX_SAFE_LINE;

/// Knobs the spec leaves as implementation constants, exposed so a host
/// can tune them (e.g. a slower safety bound for trusted sources).
#[derive(Debug, Clone)]
pub struct Config {
    /// Translated lines past this bound fail position translation
    /// (spec.md §4.3). Defaults to 100,000.
    pub max_safe_line: u32,
    /// HTTP request timeout for bundle and source-map fetches.
    pub fetch_timeout_secs: u64,
    /// Upper bound on concurrently in-flight fetches.
    pub max_concurrent_fetches: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_safe_line: MAX_SAFE_LINE,
            fetch_timeout_secs: 10,
            max_concurrent_fetches: 8,
        }
    }
}

/// The theme an inspected-page host currently has active; surfaced to the
/// core only because the original environment plumbed it alongside the
/// mappings loader. The hook-name resolver itself never branches on it —
/// it exists so a host can be injected as a single `Environment` without
/// the core reaching into any global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// Environmental services the core is given rather than discovering for
/// itself. A headless/CLI host can implement this trivially; a devtools
/// host wires it to the real WASM mappings module and the inspected page's
/// theme.
pub trait Environment: Send + Sync {
    /// Called once before any source map is decoded, so a host that needs
    /// to lazily load a WASM-backed mappings parser gets a chance to do so.
    /// The default no-op is correct for hosts (like this crate's own CLI)
    /// whose source-map backend has no such initialization step.
    fn prepare_mappings(&self) -> Result<(), String> {
        Ok(())
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// The default environment for headless use (the CLI binary, tests): no
/// WASM module to load, no host theme to report.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessEnvironment;

impl Environment for HeadlessEnvironment {}
