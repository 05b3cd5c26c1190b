//! # Edit Session
//!
//! Pairs a [`Document`] with the "what is open for editing" state the
//! form panel reads. Selection is stored as plain ids and re-derived by
//! lookup after every mutation, never as references into the section
//! list, so a removed node can never leave a stale selection behind.

use serde::{Deserialize, Serialize};

use pagecraft_model::Section;

use crate::document::Document;
use crate::mutations::Mutation;

/// Which node is currently open in the property form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Selection {
    #[serde(rename_all = "camelCase")]
    Section {
        section_id: String,
    },
    #[serde(rename_all = "camelCase")]
    Child {
        section_id: String,
        child_id: String,
    },
}

impl Selection {
    /// Whether the selected node still exists in the given section list.
    pub fn resolves_in(&self, sections: &[Section]) -> bool {
        match self {
            Selection::Section { section_id } => sections.iter().any(|s| s.id == *section_id),
            Selection::Child {
                section_id,
                child_id,
            } => sections
                .iter()
                .find(|s| s.id == *section_id)
                .is_some_and(|s| s.child(child_id).is_some()),
        }
    }
}

/// One client's editing state: the document plus the open selection.
#[derive(Debug, Clone)]
pub struct EditSession {
    pub document: Document,
    selection: Option<Selection>,
}

impl EditSession {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            selection: None,
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Open a section for editing. Selecting an unknown id clears the
    /// selection instead of holding a dangling one.
    pub fn select_section(&mut self, section_id: impl Into<String>) {
        self.selection = Some(Selection::Section {
            section_id: section_id.into(),
        });
        self.reconcile();
    }

    /// Open a child for editing.
    pub fn select_child(&mut self, section_id: impl Into<String>, child_id: impl Into<String>) {
        self.selection = Some(Selection::Child {
            section_id: section_id.into(),
            child_id: child_id.into(),
        });
        self.reconcile();
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Apply a mutation and re-derive the selection against the new
    /// document. Removing the selected node clears the selection.
    pub fn apply(&mut self, mutation: Mutation) -> u64 {
        let version = self.document.apply(mutation);
        self.reconcile();
        version
    }

    /// The currently selected section, if the selection points at one
    /// (directly or via a child).
    pub fn selected_section(&self) -> Option<&Section> {
        match self.selection.as_ref()? {
            Selection::Section { section_id } | Selection::Child { section_id, .. } => {
                self.document.section(section_id)
            }
        }
    }

    fn reconcile(&mut self) {
        let still_present = self
            .selection
            .as_ref()
            .is_some_and(|sel| sel.resolves_in(self.document.sections()));
        if !still_present {
            self.selection = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removing_selected_section_clears_selection() {
        let mut session = EditSession::new(Document::seeded("untitled"));
        session.select_section("header-1");
        assert!(session.selection().is_some());

        session.apply(Mutation::RemoveSection {
            section_id: "header-1".to_string(),
        });
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn removing_selected_child_clears_selection() {
        let mut session = EditSession::new(Document::seeded("untitled"));
        session.select_child("header-1", "nav-1");

        session.apply(Mutation::RemoveChild {
            section_id: "header-1".to_string(),
            child_id: "nav-1".to_string(),
        });
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn unrelated_mutations_keep_the_selection() {
        let mut session = EditSession::new(Document::seeded("untitled"));
        session.select_section("header-1");

        session.apply(Mutation::AddSection { index: None });
        assert_eq!(
            session.selection(),
            Some(&Selection::Section {
                section_id: "header-1".to_string()
            })
        );
        assert!(session.selected_section().is_some());
    }

    #[test]
    fn selecting_unknown_id_clears_instead_of_dangling() {
        let mut session = EditSession::new(Document::seeded("untitled"));
        session.select_section("nope");
        assert_eq!(session.selection(), None);
    }
}
