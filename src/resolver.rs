//! Binding Resolver — given a confirmed hook declarator and the pool of
//! candidate declarators from the same file (with the confirmed one
//! already removed), selects the declarator(s) that carry the readable
//! name and derives it (spec.md §4.7).

use tree_sitter::Node;

use crate::ast_util::{array_pattern_first_identifier, as_member_like, node_text};
use crate::classifier::node_contains_readable_binding;
use crate::collector::Candidate;
use crate::error::HookError;

/// Resolves the readable binding name for one confirmed hook declaration.
/// `candidate_pool` must already have `confirmed` removed (consume-once,
/// per spec.md §4.8 step 4e).
pub fn resolve_binding_name(
    confirmed: Node,
    candidate_pool: &[Candidate],
    is_custom_hook: bool,
    source: &str,
) -> Result<Option<String>, HookError> {
    let associated = associated_set(confirmed, candidate_pool, source)?;

    let name = match associated.len() {
        1 => {
            let member = associated[0];
            let member_is_confirmed = member.id() == confirmed.id();
            binding_name_of(&member, source, is_custom_hook && member_is_confirmed)?
        }
        2 => {
            let zero_accessors: Vec<Node> = associated
                .iter()
                .copied()
                .filter(|m| accesses_index_zero(m, source))
                .collect();
            if zero_accessors.len() == 1 {
                binding_name_of(&zero_accessors[0], source, false)?
            } else {
                // No unique index-0 accessor among the two aliasing reads:
                // fall back to the confirmed declarator's own alias rather
                // than fail the hook outright (spec.md §8 scenario 4).
                binding_name_of(&confirmed, source, false)?
            }
        }
        _ => binding_name_of(&confirmed, source, false)?,
    };

    Ok(name.filter(|n| !n.is_empty()))
}

/// Step 1/2 of spec.md §4.7: either `{confirmed}` directly, or every
/// candidate in the pool whose initializer aliases `confirmed`'s bound
/// identifier, in source order.
fn associated_set<'t>(
    confirmed: Node<'t>,
    candidate_pool: &[Candidate<'t>],
    source: &str,
) -> Result<Vec<Node<'t>>, HookError> {
    if node_contains_readable_binding(&confirmed, source) {
        return Ok(vec![confirmed]);
    }

    let alias = identifier_id_text(&confirmed, source)?;
    Ok(candidate_pool
        .iter()
        .map(|c| c.node)
        .filter(|node| references_alias(node, &alias, source))
        .collect())
}

fn identifier_id_text(declarator: &Node, source: &str) -> Result<String, HookError> {
    let id = declarator
        .child_by_field_name("name")
        .ok_or_else(|| HookError::UnsupportedBindingShape {
            kind: "<missing id>".to_string(),
        })?;
    if id.kind() != "identifier" {
        return Err(HookError::UnsupportedBindingShape {
            kind: id.kind().to_string(),
        });
    }
    Ok(node_text(&id, source).to_string())
}

fn references_alias(declarator: &Node, alias: &str, source: &str) -> bool {
    let Some(value) = declarator.child_by_field_name("value") else {
        return false;
    };
    match value.kind() {
        "member_expression" | "subscript_expression" => as_member_like(&value)
            .is_some_and(|(object, _, _)| {
                object.kind() == "identifier" && node_text(&object, source) == alias
            }),
        "identifier" => node_text(&value, source) == alias,
        _ => false,
    }
}

fn accesses_index_zero(declarator: &Node, source: &str) -> bool {
    let Some(value) = declarator.child_by_field_name("value") else {
        return false;
    };
    let Some((_, property, computed)) = as_member_like(&value) else {
        return false;
    };
    computed && property.kind() == "number" && node_text(&property, source) == "0"
}

/// `bindingNameOf(declarator, isCustomHook)` from spec.md §4.7.
fn binding_name_of(
    declarator: &Node,
    source: &str,
    is_custom_hook: bool,
) -> Result<Option<String>, HookError> {
    let id = declarator
        .child_by_field_name("name")
        .ok_or_else(|| HookError::UnsupportedBindingShape {
            kind: "<missing id>".to_string(),
        })?;
    match id.kind() {
        "array_pattern" => {
            if is_custom_hook {
                return Ok(None);
            }
            let first = array_pattern_first_identifier(&id).ok_or_else(|| {
                HookError::UnsupportedBindingShape {
                    kind: "array_pattern with no identifier elements".to_string(),
                }
            })?;
            Ok(Some(node_text(&first, source).to_string()))
        }
        "identifier" => Ok(Some(node_text(&id, source).to_string())),
        other => Err(HookError::UnsupportedBindingShape {
            kind: other.to_string(),
        }),
    }
}
