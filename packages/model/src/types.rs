//! Core document tree types.
//!
//! Field names are chosen for the JSON export format: structs rename to
//! camelCase and the component tag serializes SCREAMING_CASE, so a
//! serialized document reads `{"id": ..., "semanticElement": ...,
//! "component": "CONTAINER", ...}`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The nine layout primitives a section or child can take on.
///
/// Closed set: adding a variant means teaching the defaults provider and
/// the property forms about it, so the enum is the single gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutComponentType {
    Container,
    Stack,
    Grid,
    Cluster,
    Sidebar,
    Switcher,
    Box,
    Center,
    Cover,
}

impl LayoutComponentType {
    /// All variants in palette order.
    pub const ALL: [LayoutComponentType; 9] = [
        LayoutComponentType::Container,
        LayoutComponentType::Stack,
        LayoutComponentType::Grid,
        LayoutComponentType::Cluster,
        LayoutComponentType::Sidebar,
        LayoutComponentType::Switcher,
        LayoutComponentType::Box,
        LayoutComponentType::Center,
        LayoutComponentType::Cover,
    ];

    /// Human-readable label for palette and form headings.
    pub fn label(&self) -> &'static str {
        match self {
            LayoutComponentType::Container => "Container",
            LayoutComponentType::Stack => "Stack",
            LayoutComponentType::Grid => "Grid",
            LayoutComponentType::Cluster => "Cluster",
            LayoutComponentType::Sidebar => "Sidebar",
            LayoutComponentType::Switcher => "Switcher",
            LayoutComponentType::Box => "Box",
            LayoutComponentType::Center => "Center",
            LayoutComponentType::Cover => "Cover",
        }
    }
}

/// A single configurable property value.
///
/// Property bags are open mappings: values are CSS-ish strings, toggles,
/// or a nested bag (e.g. responsive overrides keyed by breakpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    String(String),
    Map(PropBag),
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::String(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

/// Open property mapping. BTreeMap keeps serialization deterministic.
pub type PropBag = BTreeMap<String, PropValue>;

/// Top-level page block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Opaque unique id, assigned at creation and never changed.
    pub id: String,

    /// Display label shown in the section list.
    pub name: String,

    /// Layout role. Changing it resets `props` to the role's defaults.
    pub component: LayoutComponentType,

    /// HTML tag the section renders as. Seeded from the component type
    /// but freely editable afterwards.
    pub semantic_element: String,

    /// Role-shaped configuration. Consistent with `component` at the
    /// moment the component changes; not re-validated afterwards.
    pub props: PropBag,

    /// Nested elements. Vec order is the display order.
    pub children: Vec<ComponentChild>,

    /// Fallback text rendered only when `children` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Section {
    /// Look up a child by id.
    pub fn child(&self, child_id: &str) -> Option<&ComponentChild> {
        self.children.iter().find(|c| c.id == child_id)
    }
}

/// Nested element inside a section. Same schema as [`Section`] minus the
/// display name; `content` is required rather than optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentChild {
    pub id: String,
    pub component: LayoutComponentType,
    pub semantic_element: String,
    pub props: PropBag,
    pub content: String,

    /// Declared for schema symmetry with `Section`; no current operation
    /// populates or reads it, so nesting is effectively one level deep.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentChild>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_type_serializes_screaming_case() {
        let json = serde_json::to_string(&LayoutComponentType::Container).unwrap();
        assert_eq!(json, "\"CONTAINER\"");

        let back: LayoutComponentType = serde_json::from_str("\"SWITCHER\"").unwrap();
        assert_eq!(back, LayoutComponentType::Switcher);
    }

    #[test]
    fn prop_value_untagged_roundtrip() {
        let mut bag = PropBag::new();
        bag.insert("gap".to_string(), "1rem".into());
        bag.insert("autoFit".to_string(), true.into());

        let json = serde_json::to_string(&bag).unwrap();
        assert_eq!(json, r#"{"autoFit":true,"gap":"1rem"}"#);

        let back: PropBag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bag);
    }

    #[test]
    fn section_wire_field_names() {
        let section = Section {
            id: "s-1".to_string(),
            name: "Hero".to_string(),
            component: LayoutComponentType::Cover,
            semantic_element: "section".to_string(),
            props: PropBag::new(),
            children: vec![],
            content: None,
        };

        let json = serde_json::to_string(&section).unwrap();
        assert!(json.contains("\"semanticElement\":\"section\""));
        assert!(json.contains("\"component\":\"COVER\""));
        // Absent content is omitted, not serialized as null.
        assert!(!json.contains("content"));
    }
}
