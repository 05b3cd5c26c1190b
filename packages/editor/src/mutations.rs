//! # Document Mutations
//!
//! High-level semantic operations on a Pagecraft document.
//!
//! ## Design Principles
//!
//! 1. **Pure**: `apply` builds a new section list; the input is never
//!    touched. The caller swaps the result in and discards the old one.
//! 2. **Total**: unknown ids and boundary moves are no-ops, not errors.
//!    There is no failure path out of a mutation.
//! 3. **Intent-preserving**: each variant is one semantic operation the
//!    UI exposes, not a generic tree edit.
//!
//! ## Component-change policy
//!
//! When a patch sets `component`, the node's `props` are replaced with
//! that component's defaults even if the same patch carries `props`.
//! A bag shaped for the old component must never survive a type change.
//! For children the `semantic_element` is reset as well.

use pagecraft_model::{
    default_props, default_semantic_element, ComponentChild, LayoutComponentType, PropBag, Section,
};
use serde::{Deserialize, Serialize};

use crate::id_generator::IdGenerator;

/// Direction for [`Mutation::MoveSection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Partial update for a section. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionPatch {
    pub name: Option<String>,
    pub component: Option<LayoutComponentType>,
    pub semantic_element: Option<String>,
    pub props: Option<PropBag>,
    pub content: Option<String>,
}

/// Partial update for a child component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChildPatch {
    pub component: Option<LayoutComponentType>,
    pub semantic_element: Option<String>,
    pub props: Option<PropBag>,
    pub content: Option<String>,
}

/// Semantic mutations over the section list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    /// Insert a fresh Container section. Out-of-range or absent index
    /// appends at the end.
    AddSection { index: Option<usize> },

    /// Remove a section. Idempotent: removing an absent id is a no-op.
    RemoveSection { section_id: String },

    /// Swap a section with its neighbor in the given direction.
    MoveSection {
        section_id: String,
        direction: Direction,
    },

    /// Insert a deep copy right after the original, with fresh ids for
    /// the section and every child.
    DuplicateSection { section_id: String },

    /// Merge a patch into a section.
    UpdateSection {
        section_id: String,
        patch: SectionPatch,
    },

    /// Append a new child of the given type to a section.
    AddChild {
        section_id: String,
        component: LayoutComponentType,
    },

    /// Remove a child from a section.
    RemoveChild {
        section_id: String,
        child_id: String,
    },

    /// Merge a patch into a child.
    UpdateChild {
        section_id: String,
        child_id: String,
        patch: ChildPatch,
    },
}

impl Mutation {
    /// Apply to a section list, producing the next document state.
    pub fn apply(&self, sections: &[Section], ids: &mut IdGenerator) -> Vec<Section> {
        match self {
            Mutation::AddSection { index } => Self::apply_add_section(sections, *index, ids),

            Mutation::RemoveSection { section_id } => sections
                .iter()
                .filter(|s| s.id != *section_id)
                .cloned()
                .collect(),

            Mutation::MoveSection {
                section_id,
                direction,
            } => Self::apply_move(sections, section_id, *direction),

            Mutation::DuplicateSection { section_id } => {
                Self::apply_duplicate(sections, section_id, ids)
            }

            Mutation::UpdateSection { section_id, patch } => sections
                .iter()
                .map(|s| {
                    if s.id == *section_id {
                        Self::patch_section(s, patch)
                    } else {
                        s.clone()
                    }
                })
                .collect(),

            Mutation::AddChild {
                section_id,
                component,
            } => sections
                .iter()
                .map(|s| {
                    if s.id == *section_id {
                        let mut next = s.clone();
                        next.children.push(Self::new_child(*component, ids));
                        next
                    } else {
                        s.clone()
                    }
                })
                .collect(),

            Mutation::RemoveChild {
                section_id,
                child_id,
            } => sections
                .iter()
                .map(|s| {
                    if s.id == *section_id {
                        let mut next = s.clone();
                        next.children.retain(|c| c.id != *child_id);
                        next
                    } else {
                        s.clone()
                    }
                })
                .collect(),

            Mutation::UpdateChild {
                section_id,
                child_id,
                patch,
            } => sections
                .iter()
                .map(|s| {
                    if s.id == *section_id {
                        let mut next = s.clone();
                        for child in &mut next.children {
                            if child.id == *child_id {
                                *child = Self::patch_child(child, patch);
                            }
                        }
                        next
                    } else {
                        s.clone()
                    }
                })
                .collect(),
        }
    }

    fn apply_add_section(
        sections: &[Section],
        index: Option<usize>,
        ids: &mut IdGenerator,
    ) -> Vec<Section> {
        let mut next: Vec<Section> = sections.to_vec();
        let section = Section {
            id: ids.next_id(),
            name: format!("Section {}", next.len() + 1),
            component: LayoutComponentType::Container,
            semantic_element: default_semantic_element(LayoutComponentType::Container).to_string(),
            props: default_props(LayoutComponentType::Container),
            children: vec![],
            content: None,
        };
        let at = index.unwrap_or(next.len()).min(next.len());
        next.insert(at, section);
        next
    }

    fn apply_move(sections: &[Section], section_id: &str, direction: Direction) -> Vec<Section> {
        let Some(pos) = sections.iter().position(|s| s.id == section_id) else {
            return sections.to_vec();
        };

        let mut next: Vec<Section> = sections.to_vec();
        match direction {
            Direction::Up if pos > 0 => next.swap(pos - 1, pos),
            Direction::Down if pos + 1 < next.len() => next.swap(pos, pos + 1),
            _ => {}
        }
        next
    }

    fn apply_duplicate(
        sections: &[Section],
        section_id: &str,
        ids: &mut IdGenerator,
    ) -> Vec<Section> {
        let Some(pos) = sections.iter().position(|s| s.id == section_id) else {
            return sections.to_vec();
        };

        let mut copy = sections[pos].clone();
        copy.id = ids.next_id();
        copy.name = format!("{} (copy)", copy.name);
        for child in &mut copy.children {
            child.id = ids.next_id();
        }

        let mut next: Vec<Section> = sections.to_vec();
        next.insert(pos + 1, copy);
        next
    }

    fn patch_section(section: &Section, patch: &SectionPatch) -> Section {
        let mut next = section.clone();
        if let Some(name) = &patch.name {
            next.name = name.clone();
        }
        if let Some(element) = &patch.semantic_element {
            next.semantic_element = element.clone();
        }
        if let Some(content) = &patch.content {
            next.content = Some(content.clone());
        }
        match patch.component {
            Some(component) => {
                // Type change wins over any props in the same patch.
                next.component = component;
                next.props = default_props(component);
            }
            None => {
                if let Some(props) = &patch.props {
                    next.props = props.clone();
                }
            }
        }
        next
    }

    fn patch_child(child: &ComponentChild, patch: &ChildPatch) -> ComponentChild {
        let mut next = child.clone();
        if let Some(content) = &patch.content {
            next.content = content.clone();
        }
        match patch.component {
            Some(component) => {
                next.component = component;
                next.semantic_element = default_semantic_element(component).to_string();
                next.props = default_props(component);
            }
            None => {
                if let Some(element) = &patch.semantic_element {
                    next.semantic_element = element.clone();
                }
                if let Some(props) = &patch.props {
                    next.props = props.clone();
                }
            }
        }
        next
    }

    fn new_child(component: LayoutComponentType, ids: &mut IdGenerator) -> ComponentChild {
        ComponentChild {
            id: ids.next_id(),
            component,
            semantic_element: default_semantic_element(component).to_string(),
            props: default_props(component),
            content: format!("New {}", component.label()),
            children: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_serialization_roundtrip() {
        let mutation = Mutation::UpdateSection {
            section_id: "header-1".to_string(),
            patch: SectionPatch {
                name: Some("Hero".to_string()),
                ..Default::default()
            },
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let back: Mutation = serde_json::from_str(&json).unwrap();
        assert_eq!(mutation, back);
    }

    #[test]
    fn patch_deserializes_with_missing_fields() {
        let patch: SectionPatch = serde_json::from_str(r#"{"semanticElement":"main"}"#).unwrap();
        assert_eq!(patch.semantic_element.as_deref(), Some("main"));
        assert_eq!(patch.name, None);
        assert_eq!(patch.component, None);
    }
}
