//! # Pagecraft Editor
//!
//! Document editing engine for the Pagecraft page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Section tree + defaults provider     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Seed or wrap a section list              │
//! │  - Apply pure mutations, bump version       │
//! │  - Reconcile selection after each edit      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-css: document → JSON/CSS strings   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pagecraft_editor::{Document, EditSession, Mutation};
//! use pagecraft_model::LayoutComponentType;
//!
//! let mut session = EditSession::new(Document::seeded("landing"));
//!
//! session.apply(Mutation::AddChild {
//!     section_id: "header-1".to_string(),
//!     component: LayoutComponentType::Grid,
//! });
//!
//! assert_eq!(session.document.section("header-1").unwrap().children.len(), 2);
//! ```

mod document;
mod id_generator;
mod mutations;
mod session;

pub use document::Document;
pub use id_generator::{document_seed, IdGenerator};
pub use mutations::{ChildPatch, Direction, Mutation, SectionPatch};
pub use session::{EditSession, Selection};
