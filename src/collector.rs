//! Declaration Collector — walks an AST once and returns every
//! `VariableDeclarator` whose `init` could plausibly be part of a hook
//! binding (spec.md §4.5). Collected in source order, at most once per file
//! per resolve call (the orchestrator caches the result).

use tree_sitter::Node;

use crate::ast_util::visit_all;

/// One candidate declarator, carrying only what the resolver needs: its
/// node (for later re-inspection) and its 1-indexed start line (to match
/// hook-reported positions against `isConfirmedHookDeclaration` sites).
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'t> {
    pub node: Node<'t>,
}

impl<'t> Candidate<'t> {
    pub fn start_line(&self) -> u32 {
        self.node.start_position().row as u32 + 1
    }
}

/// Collects every `variable_declarator` whose `value` is a call
/// expression, a member/subscript expression, or a bare identifier.
/// Anything else (object/array literals, arrow functions not already
/// classed as calls, etc.) is not a candidate per spec.md §4.5.
pub fn collect_candidates<'t>(root: &Node<'t>) -> Vec<Candidate<'t>> {
    let mut candidates = Vec::new();
    visit_all(root, |node| {
        if node.kind() != "variable_declarator" {
            return;
        }
        let Some(value) = node.child_by_field_name("value") else {
            return;
        };
        let is_candidate = matches!(
            value.kind(),
            "call_expression" | "member_expression" | "subscript_expression" | "identifier"
        );
        if is_candidate {
            candidates.push(Candidate { node: *node });
        }
    });
    candidates
}

/// An owned, lifetime-free fingerprint of a `Candidate`, suitable for
/// caching across awaits alongside the `Tree` it was collected from.
/// Resolved back into a `Candidate` via [`CandidateRange::resolve`].
#[derive(Debug, Clone, Copy)]
pub struct CandidateRange {
    start_byte: usize,
    end_byte: usize,
}

impl CandidateRange {
    fn of(candidate: &Candidate) -> Self {
        Self {
            start_byte: candidate.node.start_byte(),
            end_byte: candidate.node.end_byte(),
        }
    }

    pub fn resolve<'t>(&self, root: &Node<'t>) -> Option<Candidate<'t>> {
        root.descendant_for_byte_range(self.start_byte, self.end_byte)
            .filter(|n| n.kind() == "variable_declarator")
            .map(|node| Candidate { node })
    }
}

/// Runs the collector once and returns owned ranges, so the result can be
/// cached independently of the borrowed `Tree` it came from.
pub fn collect_candidate_ranges(root: &Node) -> Vec<CandidateRange> {
    collect_candidates(root).iter().map(CandidateRange::of).collect()
}
