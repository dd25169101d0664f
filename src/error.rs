//! Error types for hookres.
//!
//! Every variant of `HookError` is scoped to a single file or a single hook;
//! the orchestrator catches and absorbs all of them so a failure never
//! aborts resolution for the rest of the tree. `ResolveError` is the only
//! error the public API surfaces to callers.

use std::process::ExitCode;
use thiserror::Error;

/// Errors scoped to one file or one hook, absorbed by the orchestrator.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("fetch failed for {url}: {message}")]
    FetchFailed { url: String, message: String },

    #[error("no sourceMappingURL comment found in {url}")]
    NoSourceMapUrl { url: String },

    #[error("ambiguous sourceMappingURL: {count} matches in {url}")]
    AmbiguousSourceMapUrl { url: String, count: usize },

    #[error("sourceMappingURL token did not resolve to an absolute URL: {token}")]
    InvalidSourceMapUrl { token: String },

    #[error("failed to decode source map at {url}: {message}")]
    SourceMapDecodeFailed { url: String, message: String },

    #[error("position ({line}, {column}) did not translate to an original position")]
    PositionNotFound { line: u32, column: u32 },

    #[error("translated line {line} exceeds the safety bound of {bound}")]
    LineOutOfBounds { line: u32, bound: u32 },

    #[error("failed to parse source for {source}")]
    ParseFailed { source: String },

    #[error("unsupported id.type in bindingNameOf: {kind}")]
    UnsupportedBindingShape { kind: String },
}

/// Top-level error for the public `resolve` API and the CLI.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("invalid hook observation tree: {0}")]
    InvalidInput(String),

    #[error("resolution was cancelled")]
    Cancelled,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResolveError {
    /// Exit code for the CLI binary.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidInput(_) => ExitCode::from(2),
            Self::Cancelled => ExitCode::from(3),
            Self::Io(_) => ExitCode::from(1),
            Self::Json(_) => ExitCode::from(2),
        }
    }
}

/// Result type alias for hookres operations.
pub type Result<T> = std::result::Result<T, ResolveError>;
