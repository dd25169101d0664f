//! Merge — folds a newly resolved tree back into the caller's original
//! tree in place, without disturbing unrelated fields (spec.md §4.9).
//!
//! The orchestrator builds its enriched tree from scratch (it never has
//! mutable access to the caller's nodes), so "merge" here means: walk
//! `old` and `new` in parallel, and for every position whose `id` matches,
//! take `new`'s `hookVariableName`; recurse into `subHooks` only when both
//! sides have the same length, otherwise leave that subtree untouched.

use crate::model::{HookObservation, HookObservationNamed};

/// Merges `new_tree` (the orchestrator's output) onto `old_tree` (the
/// caller's input), producing the tree the public API returns.
pub fn merge(old_tree: &HookObservation, new_tree: &HookObservationNamed) -> HookObservationNamed {
    let mut result = HookObservationNamed::unnamed(old_tree);

    if old_tree.id == new_tree.id {
        result.hook_variable_name = new_tree.hook_variable_name.clone();

        if old_tree.sub_hooks.len() == new_tree.sub_hooks.len() {
            result.sub_hooks = old_tree
                .sub_hooks
                .iter()
                .zip(new_tree.sub_hooks.iter())
                .map(|(old_sub, new_sub)| merge(old_sub, new_sub))
                .collect();
        }
    }

    result
}
