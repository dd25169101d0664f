//! hookres: resolves human-readable variable names for React hook
//! observations captured by a devtools bridge.
//!
//! Given a tree of [`model::HookObservation`]s carrying only minified
//! `(file, line, column)` positions, [`resolve`] fetches the bundled source,
//! decodes its source map, parses the original source, and determines which
//! declared binding each hook call was assigned to — merging the result back
//! onto the caller's tree without disturbing any field it doesn't own.
//!
//! # Example
//!
//! ```ignore
//! use hookres::{resolve, Config};
//! use hookres::config::HeadlessEnvironment;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run(hook_log: Vec<hookres::model::HookObservation>) {
//! let client = reqwest::Client::new();
//! let env = HeadlessEnvironment;
//! let config = Config::default();
//! let cancel = CancellationToken::new();
//! let named = resolve(&hook_log, &client, &env, &config, &cancel).await;
//! # }
//! ```

pub mod ast_util;
pub mod cache;
pub mod cli;
pub mod classifier;
pub mod collector;
pub mod config;
pub mod error;
pub mod fetch;
pub mod merge;
pub mod model;
pub mod orchestrator;
pub mod parser;
pub mod position;
pub mod resolver;
pub mod sourcemap_url;

pub use config::{Config, Environment};
pub use error::{ResolveError, Result};
pub use model::{HookObservation, HookObservationNamed, HookSource};

use tokio_util::sync::CancellationToken;

/// Resolves readable variable names for every hook in `hook_log` and merges
/// them back onto a fresh copy of the input tree (spec.md §6).
///
/// Never fails: per-file and per-hook errors are absorbed and logged, and a
/// hook whose name couldn't be resolved simply keeps `hook_variable_name:
/// None`. The returned tree always has the same shape (`id`, `name`,
/// `subHooks` structure) as `hook_log`.
pub async fn resolve(
    hook_log: &[HookObservation],
    client: &reqwest::Client,
    env: &dyn Environment,
    config: &Config,
    cancel: &CancellationToken,
) -> Vec<HookObservationNamed> {
    let named = orchestrator::resolve(hook_log, client, env, config, cancel).await;
    hook_log
        .iter()
        .zip(named.iter())
        .map(|(old, new)| merge::merge(old, new))
        .collect()
}
