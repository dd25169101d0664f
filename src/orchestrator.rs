//! Pipeline Orchestrator — walks the incoming hook tree, groups hooks by
//! source bundle, drives fetch → map → parse → classify → resolve, and
//! isolates per-hook and per-file failures so one bad bundle never taints
//! another (spec.md §4.8).

use std::collections::{HashMap, HashSet};

use futures::stream::{self, StreamExt};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::cache::ResolveCache;
use crate::config::{Config, Environment};
use crate::fetch;
use crate::model::{HookObservation, HookObservationNamed};
use crate::position::PositionTranslator;
use crate::resolver::resolve_binding_name;
use crate::sourcemap_url::extract_source_map_url;

/// Runs the full pipeline for one `hookLog` and returns the enriched tree.
/// Never returns an error: any catastrophic failure (mappings init, no
/// bundles reachable) degenerates to an unnamed copy of `hook_log`, per
/// spec.md §6/§7 "the feature is best-effort cosmetic".
pub async fn resolve(
    hook_log: &[HookObservation],
    client: &reqwest::Client,
    env: &dyn Environment,
    config: &Config,
    cancel: &CancellationToken,
) -> Vec<HookObservationNamed> {
    let unnamed = || hook_log.iter().map(HookObservationNamed::unnamed).collect();

    if env.prepare_mappings().is_err() {
        warn!("environment mappings initialization failed; returning unenriched tree");
        return unnamed();
    }

    let file_names = collect_file_names(hook_log);
    if file_names.is_empty() || cancel.is_cancelled() {
        return unnamed();
    }

    let bundle_texts = fetch_all(client, &file_names, config, cancel).await;
    if cancel.is_cancelled() {
        return unnamed();
    }

    let mut bundle_to_map_url = HashMap::new();
    for (bundle_url, text) in &bundle_texts {
        match extract_source_map_url(bundle_url, text) {
            Ok(map_url) => {
                bundle_to_map_url.insert(bundle_url.clone(), map_url.to_string());
            }
            Err(e) => warn!(bundle = %bundle_url, error = %e, "no usable source map"),
        }
    }

    let map_urls: Vec<String> = bundle_to_map_url.values().cloned().collect();
    let map_texts_by_url = fetch_all(client, &map_urls, config, cancel).await;
    if cancel.is_cancelled() {
        return unnamed();
    }

    let mut file_groups: HashMap<String, PositionTranslator> = HashMap::new();
    for (bundle_url, map_url) in &bundle_to_map_url {
        let Some(map_text) = map_texts_by_url.get(map_url) else {
            continue;
        };
        match PositionTranslator::new(map_text, map_url) {
            Ok(translator) => {
                file_groups.insert(bundle_url.clone(), translator);
            }
            Err(e) => warn!(map = %map_url, error = %e, "failed to decode source map"),
        }
    }

    let mut cache = ResolveCache::new();
    hook_log
        .iter()
        .map(|hook| resolve_hook(hook, &file_groups, &mut cache, config))
        .collect()
}

/// Recursively walks `hookLog` and collects the unique, non-null
/// `hookSource.fileName` values, preserving first-seen order (spec.md §4.8
/// step 1).
fn collect_file_names(hook_log: &[HookObservation]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    fn walk(hooks: &[HookObservation], seen: &mut HashSet<String>, ordered: &mut Vec<String>) {
        for hook in hooks {
            if let Some(name) = hook.hook_source.as_ref().and_then(|s| s.file_name.clone()) {
                if seen.insert(name.clone()) {
                    ordered.push(name);
                }
            }
            walk(&hook.sub_hooks, seen, ordered);
        }
    }
    walk(hook_log, &mut seen, &mut ordered);
    ordered
}

async fn fetch_all(
    client: &reqwest::Client,
    urls: &[String],
    config: &Config,
    cancel: &CancellationToken,
) -> HashMap<String, String> {
    stream::iter(urls.iter().cloned())
        .map(|url| {
            let client = client.clone();
            async move {
                if cancel.is_cancelled() {
                    return None;
                }
                match fetch::fetch(&client, &url).await {
                    Ok(file) => Some((file.url, file.text)),
                    Err(e) => {
                        warn!(url = %url, error = %e, "bundle fetch failed");
                        None
                    }
                }
            }
        })
        .buffer_unordered(config.max_concurrent_fetches.max(1))
        .filter_map(|result| async move { result })
        .collect()
        .await
}

/// Resolves one hook and recurses into its sub-hooks, unconditionally:
/// whether or not this hook itself got a name, a custom hook's children may
/// still resolve against their own (possibly different) source files.
fn resolve_hook(
    hook: &HookObservation,
    file_groups: &HashMap<String, PositionTranslator>,
    cache: &mut ResolveCache,
    config: &Config,
) -> HookObservationNamed {
    let hook_variable_name = resolve_single_hook(hook, file_groups, cache, config);

    HookObservationNamed {
        id: hook.id,
        name: hook.name.clone(),
        value: hook.value.clone(),
        hook_source: hook.hook_source.clone(),
        sub_hooks: hook
            .sub_hooks
            .iter()
            .map(|sub| resolve_hook(sub, file_groups, cache, config))
            .collect(),
        hook_variable_name,
    }
}

fn resolve_single_hook(
    hook: &HookObservation,
    file_groups: &HashMap<String, PositionTranslator>,
    cache: &mut ResolveCache,
    config: &Config,
) -> Option<String> {
    let hook_source = hook.hook_source.as_ref()?;
    let file_name = hook_source.file_name.as_ref()?;
    let translator = file_groups.get(file_name)?;

    let (line, column) = match (hook_source.line_number, hook_source.column_number) {
        (Some(line), Some(column)) => (line, column),
        _ => return None,
    };

    let translated = match translator.translate_with_bound(line, column, config.max_safe_line) {
        Ok(translated) => translated,
        Err(e) => {
            warn!(file = %file_name, line, column, error = %e, "position translation failed");
            return None;
        }
    };

    if let Err(e) = cache.ensure(&translated.source, &translated.file_content) {
        warn!(source = %translated.source, error = %e, "parse failed");
        return None;
    }

    let Some(confirmed_range) = cache.take_confirmed(&translated.source, translated.line, &translated.file_content)
    else {
        if !hook.is_non_declarative_primitive() {
            warn!(source = %translated.source, line = translated.line, "no confirmed hook declaration at position");
        }
        return None;
    };

    let tree = cache.tree(&translated.source).expect("ensure() inserted this tree");
    let root = tree.root_node();
    let Some(confirmed) = confirmed_range.resolve(&root) else {
        warn!(source = %translated.source, "confirmed declarator range did not resolve");
        return None;
    };

    let pool = cache.remaining_candidates(&translated.source, tree);

    match resolve_binding_name(confirmed.node, &pool, hook.is_custom_hook(), &translated.file_content) {
        Ok(name) => name,
        Err(e) => {
            warn!(source = %translated.source, error = %e, "binding resolution failed");
            None
        }
    }
}
