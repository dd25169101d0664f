//! Per-call caches for parsed ASTs and per-file candidate pools, so
//! repeated hooks in one original-source file share work (spec.md §2.10,
//! §5 "Shared resources"). Scoped to a single `resolve` invocation; never
//! shared across calls.
//!
//! The candidate pool is *consumed*: once a hook's confirmed declarator is
//! taken out of the pool, it is gone for the rest of the call, matching
//! spec.md §4.8 step 4e and the Design Notes' "shared mutable candidate
//! pool" note — reimplemented here as an explicit removal from an
//! owned-by-the-cache `Vec`, instead of the source's implicit splice.

use std::collections::HashMap;

use tree_sitter::Tree;

use crate::classifier::is_confirmed_hook_declaration;
use crate::collector::{collect_candidate_ranges, Candidate, CandidateRange};
use crate::error::HookError;
use crate::parser::parse;

#[derive(Default)]
pub struct ResolveCache {
    asts: HashMap<String, Tree>,
    candidate_pools: HashMap<String, Vec<CandidateRange>>,
}

impl ResolveCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `file_content` and collects its candidate pool if `source`
    /// hasn't been seen yet in this call. Both the parse and the collector
    /// walk run at most once per `source`.
    pub fn ensure(&mut self, source: &str, file_content: &str) -> Result<(), HookError> {
        if self.asts.contains_key(source) {
            return Ok(());
        }
        let tree = parse(source, file_content)?;
        let ranges = collect_candidate_ranges(&tree.root_node());
        self.asts.insert(source.to_string(), tree);
        self.candidate_pools.insert(source.to_string(), ranges);
        Ok(())
    }

    pub fn tree(&self, source: &str) -> Option<&Tree> {
        self.asts.get(source)
    }

    /// Finds the unique candidate at `line` that is a confirmed hook
    /// declaration and removes it from the pool (consume-once).
    pub fn take_confirmed(&mut self, source: &str, line: u32, file_content: &str) -> Option<CandidateRange> {
        let tree = self.asts.get(source)?;
        let root = tree.root_node();
        let pool = self.candidate_pools.get_mut(source)?;
        let idx = pool.iter().position(|range| {
            range.resolve(&root).is_some_and(|candidate| {
                candidate.start_line() == line
                    && is_confirmed_hook_declaration(&candidate.node, file_content)
            })
        })?;
        Some(pool.remove(idx))
    }

    /// The remaining candidate pool for `source`, reconstructed as live
    /// `Candidate`s against `tree` (normally `self.tree(source).unwrap()`).
    pub fn remaining_candidates<'t>(&self, source: &str, tree: &'t Tree) -> Vec<Candidate<'t>> {
        let root = tree.root_node();
        self.candidate_pools
            .get(source)
            .map(|ranges| ranges.iter().filter_map(|r| r.resolve(&root)).collect())
            .unwrap_or_default()
    }

    pub fn ast_count(&self) -> usize {
        self.asts.len()
    }
}
