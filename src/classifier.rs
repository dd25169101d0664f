//! Hook Classifier — pure predicates over AST nodes deciding which
//! identifiers are hook names, which calls are hook calls, and which
//! declarations are confirmed hook declarations.

use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::Node;

use crate::ast_util::{as_member_like, node_text};
use crate::model::NON_DECLARATIVE_PRIMITIVES;

/// `^use[A-Z0-9].*$` — excludes `user`, `used`, etc. per spec.md §4.6.
static HOOK_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^use[A-Z0-9].*$").unwrap());

pub fn is_hook_name(name: &str) -> bool {
    HOOK_NAME_RE.is_match(name)
}

/// True if `node` is a hook identifier, or a non-computed member access off
/// a PascalCase namespace (e.g. `React.useState`) whose property is itself
/// a hook identifier.
pub fn is_hook(node: &Node, source: &str) -> bool {
    match node.kind() {
        "identifier" | "property_identifier" => is_hook_name(node_text(node, source)),
        _ => {
            if let Some((object, property, computed)) = as_member_like(node) {
                if computed || object.kind() != "identifier" {
                    return false;
                }
                let namespace = node_text(&object, source);
                let starts_uppercase = namespace.chars().next().is_some_and(|c| c.is_uppercase());
                starts_uppercase && is_hook(&property, source)
            } else {
                false
            }
        }
    }
}

/// `declarator.init.type == CallExpression && isHook(init.callee)`.
pub fn is_confirmed_hook_declaration(declarator: &Node, source: &str) -> bool {
    let Some(init) = declarator.child_by_field_name("value") else {
        return false;
    };
    init.kind() == "call_expression"
        && init
            .child_by_field_name("function")
            .is_some_and(|callee| is_hook(&callee, source))
}

/// Callee name as written (`useState`, `React.useState`, ...), used to
/// recognize the state/reducer pair and to report identifiers for
/// `bindingNameOf`.
fn callee_text<'a>(declarator: &Node, source: &'a str) -> Option<&'a str> {
    let init = declarator.child_by_field_name("value")?;
    if init.kind() != "call_expression" {
        return None;
    }
    let callee = init.child_by_field_name("function")?;
    Some(node_text(&callee, source))
}

fn callee_simple_name<'a>(declarator: &Node, source: &'a str) -> Option<&'a str> {
    let full = callee_text(declarator, source)?;
    Some(full.rsplit('.').next().unwrap_or(full))
}

/// The callee is `useState`/`useReducer`, bare or as a `React.` property.
pub fn is_state_or_reducer_hook(declarator: &Node, source: &str) -> bool {
    matches!(
        callee_simple_name(declarator, source),
        Some("useState") | Some("useReducer")
    )
}

/// True when `declarator.id` already carries the readable name on its own:
/// an `ArrayPattern` destructure, or a bare identifier binding that is *not*
/// a state/reducer pair (for those, the bare identifier is the alias, and
/// the real name lives one hop away — see the Binding Resolver).
pub fn node_contains_readable_binding(declarator: &Node, source: &str) -> bool {
    let Some(id) = declarator.child_by_field_name("name") else {
        return false;
    };
    match id.kind() {
        "array_pattern" => true,
        "identifier" => !is_state_or_reducer_hook(declarator, source),
        _ => false,
    }
}

/// `Effect`, `ImperativeHandle`, `LayoutEffect`, `DebugValue` — hooks called
/// for their side effect, never assigned to a readable binding.
pub fn is_non_declarative_primitive(hook_name: &str) -> bool {
    NON_DECLARATIVE_PRIMITIVES.contains(&hook_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn first_declarator(tree: &tree_sitter::Tree) -> tree_sitter::Node<'_> {
        let root = tree.root_node();
        let mut found = None;
        crate::ast_util::visit_all(&root, |n| {
            if found.is_none() && n.kind() == "variable_declarator" {
                found = Some(*n);
            }
        });
        found.unwrap()
    }

    #[test]
    fn hook_name_regex() {
        assert!(is_hook_name("useState"));
        assert!(is_hook_name("useCustomHook"));
        assert!(is_hook_name("use1Thing"));
        assert!(!is_hook_name("user"));
        assert!(!is_hook_name("used"));
        assert!(!is_hook_name("use"));
    }

    #[test]
    fn namespaced_hook_is_recognized() {
        let source = "const [a, b] = React.useState(1);";
        let tree = parse("t.tsx", source).unwrap();
        let declarator = first_declarator(&tree);
        assert!(is_confirmed_hook_declaration(&declarator, source));
        assert!(is_state_or_reducer_hook(&declarator, source));
        assert!(!node_contains_readable_binding(&declarator, source));
    }

    #[test]
    fn plain_destructure_is_readable_binding() {
        let source = "const [count, setCount] = useState(1);";
        let tree = parse("t.tsx", source).unwrap();
        let declarator = first_declarator(&tree);
        assert!(node_contains_readable_binding(&declarator, source));
    }
}
