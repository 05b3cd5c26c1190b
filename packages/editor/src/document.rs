//! # Document Handle
//!
//! Owns the current section list, the id generator, and a version
//! counter that ticks on every applied mutation.
//!
//! ## Lifecycle
//!
//! ```text
//! Seed → Edit → Export
//!   ↓      ↓       ↓
//! Defaults Mutations JSON/CSS strings
//! ```
//!
//! Mutations themselves are pure (`Mutation::apply` returns a fresh
//! section list); the handle is the one place that swaps state.

use pagecraft_model::{initial_document, ComponentChild, Section};
use tracing::debug;

use crate::id_generator::IdGenerator;
use crate::mutations::Mutation;

/// Editable page document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Display name; also seeds the id generator.
    pub name: String,

    /// Increments on each applied mutation.
    pub version: u64,

    sections: Vec<Section>,
    ids: IdGenerator,
}

impl Document {
    /// Empty document with no sections.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::from_sections(name, vec![])
    }

    /// Document seeded with the stock header/nav fixture.
    pub fn seeded(name: impl Into<String>) -> Self {
        Self::from_sections(name, initial_document())
    }

    /// Document over an existing section list (e.g. a parsed export).
    /// The id counter resumes past any generator-minted id already in
    /// the list, so fresh ids stay unique document-wide.
    pub fn from_sections(name: impl Into<String>, sections: Vec<Section>) -> Self {
        let name = name.into();
        let mut ids = IdGenerator::new(&name);
        ids.skip_existing(sections.iter().flat_map(|section| {
            std::iter::once(section.id.as_str())
                .chain(section.children.iter().map(|child| child.id.as_str()))
        }));
        Self {
            name,
            version: 0,
            sections,
            ids,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by id.
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    /// Look up a child within a section.
    pub fn child(&self, section_id: &str, child_id: &str) -> Option<&ComponentChild> {
        self.section(section_id).and_then(|s| s.child(child_id))
    }

    /// Apply a mutation, replacing the section list and bumping the
    /// version. Never fails; not-found mutations leave the list equal.
    pub fn apply(&mut self, mutation: Mutation) -> u64 {
        debug!(?mutation, version = self.version, "applying mutation");
        self.sections = mutation.apply(&self.sections, &mut self.ids);
        self.version += 1;
        self.version
    }
}
