//! Small AST helpers shared by the collector, classifier, and resolver.

use tree_sitter::Node;

/// Get text content of a node.
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Visit every node in a tree, iteratively (avoids stack overflow on deep
/// generated ASTs).
pub fn visit_all<F>(node: &Node, mut visitor: F)
where
    F: FnMut(&Node),
{
    let mut cursor = node.walk();
    let mut did_visit_children = false;

    loop {
        if !did_visit_children {
            visitor(&cursor.node());
            if cursor.goto_first_child() {
                did_visit_children = false;
                continue;
            }
        }

        if cursor.goto_next_sibling() {
            did_visit_children = false;
            continue;
        }

        if !cursor.goto_parent() {
            break;
        }
        did_visit_children = true;
    }
}

/// tree-sitter's JS/TS grammars split Babel's single `MemberExpression` into
/// `member_expression` (non-computed, `a.b`) and `subscript_expression`
/// (computed, `a[b]`). This returns `(object, property)` for either shape,
/// alongside whether it was computed, matching spec.md §3's
/// `MemberExpression { object, property, computed }`.
pub fn as_member_like<'t>(node: &Node<'t>) -> Option<(Node<'t>, Node<'t>, bool)> {
    match node.kind() {
        "member_expression" => {
            let object = node.child_by_field_name("object")?;
            let property = node.child_by_field_name("property")?;
            Some((object, property, false))
        }
        "subscript_expression" => {
            let object = node.child_by_field_name("object")?;
            let property = node.child_by_field_name("index")?;
            Some((object, property, true))
        }
        _ => None,
    }
}

/// The first element of an `array_pattern`, e.g. `count` in
/// `const [count, setCount] = ...`.
pub fn array_pattern_first_identifier<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| child.kind() == "identifier")
}
