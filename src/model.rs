//! The hook-observation tree: the opaque shape handed in by the devtools
//! bridge and handed back enriched with readable variable names.

use serde::{Deserialize, Serialize};

/// Where a hook call lives in the bundled (minified) source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HookSource {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub line_number: Option<u32>,
    #[serde(default)]
    pub column_number: Option<u32>,
    #[serde(default)]
    pub function_name: Option<String>,
}

/// Primitive hook categories whose declarations are never "the" readable
/// binding: they're called for effect, not for their return value.
pub const NON_DECLARATIVE_PRIMITIVES: &[&str] =
    &["Effect", "ImperativeHandle", "LayoutEffect", "DebugValue"];

/// A single hook invocation observed at runtime, as reported by the
/// inspected page. `id` is `None` for custom hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookObservation {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub sub_hooks: Vec<HookObservation>,
    #[serde(default)]
    pub hook_source: Option<HookSource>,
}

impl HookObservation {
    /// Custom hooks are recognized by a missing `id`, per spec.
    pub fn is_custom_hook(&self) -> bool {
        self.id.is_none()
    }

    pub fn is_non_declarative_primitive(&self) -> bool {
        NON_DECLARATIVE_PRIMITIVES.contains(&self.name.as_str())
    }
}

/// `HookObservation` extended with the resolved binding name, with
/// `subHooks` mirrored into the same named shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookObservationNamed {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub sub_hooks: Vec<HookObservationNamed>,
    #[serde(default)]
    pub hook_source: Option<HookSource>,
    pub hook_variable_name: Option<String>,
}

impl HookObservationNamed {
    /// Build an unnamed copy of an observation tree: the identity result
    /// the orchestrator falls back to when resolution fails globally.
    pub fn unnamed(observation: &HookObservation) -> Self {
        Self {
            id: observation.id,
            name: observation.name.clone(),
            value: observation.value.clone(),
            sub_hooks: observation.sub_hooks.iter().map(Self::unnamed).collect(),
            hook_source: observation.hook_source.clone(),
            hook_variable_name: None,
        }
    }

    /// The recursive `(id, name, subHooks structure)` tuple used to assert
    /// `structure(resolve(t)) == structure(t)` (spec.md §8).
    pub fn structure(&self) -> Structure {
        Structure {
            id: self.id,
            name: self.name.clone(),
            sub_hooks: self.sub_hooks.iter().map(Self::structure).collect(),
        }
    }
}

impl HookObservation {
    pub fn structure(&self) -> Structure {
        Structure {
            id: self.id,
            name: self.name.clone(),
            sub_hooks: self.sub_hooks.iter().map(Self::structure).collect(),
        }
    }
}

/// Structural fingerprint of a hook tree, ignoring `hookVariableName` and
/// everything else irrelevant to identity/ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    pub id: Option<u32>,
    pub name: String,
    pub sub_hooks: Vec<Structure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unnamed_preserves_structure() {
        let tree = HookObservation {
            id: Some(1),
            name: "State".into(),
            value: serde_json::Value::Null,
            sub_hooks: vec![HookObservation {
                id: Some(2),
                name: "Effect".into(),
                value: serde_json::Value::Null,
                sub_hooks: vec![],
                hook_source: None,
            }],
            hook_source: None,
        };
        let named = HookObservationNamed::unnamed(&tree);
        assert_eq!(named.structure(), tree.structure());
        assert_eq!(named.hook_variable_name, None);
        assert_eq!(named.sub_hooks[0].hook_variable_name, None);
    }
}
