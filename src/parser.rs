//! Source Parser — parses an original-source string into a tree-sitter AST.
//!
//! Per spec.md §4.4 the parser must accept ambiguous module type and enable
//! JSX plus typed-syntax support. `tree-sitter-typescript`'s TSX grammar is
//! the superset that covers both: every plain-TypeScript and plain-JSX file
//! parses under it too, so a single grammar serves every source the hook
//! pipeline will ever translate a position into.

use tree_sitter::{Language, Parser, Tree};

use crate::error::HookError;

fn tsx_language() -> Language {
    tree_sitter_typescript::LANGUAGE_TSX.into()
}

/// Parses `source` and returns its AST, or a parse failure scoped to this
/// one file (spec.md §4.4, §7).
pub fn parse(source_name: &str, source: &str) -> Result<Tree, HookError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tsx_language())
        .map_err(|e| HookError::ParseFailed {
            source: format!("{source_name}: failed to load grammar: {e}"),
        })?;

    parser.parse(source, None).ok_or_else(|| HookError::ParseFailed {
        source: source_name.to_string(),
    })
}
