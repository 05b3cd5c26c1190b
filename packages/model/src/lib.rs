//! # Pagecraft Model
//!
//! Data model for the Pagecraft page builder.
//!
//! A page is a flat list of [`Section`]s, each carrying a layout role
//! (one of nine [`LayoutComponentType`]s), a property bag shaped by that
//! role, and an ordered list of nested [`ComponentChild`] elements.
//! A separate [`DesignSystem`] token object feeds CSS export and is never
//! touched by document mutations.
//!
//! The model is deliberately plain data: every struct here derives
//! `Serialize`/`Deserialize` with the wire field names the JSON export
//! uses, and nothing in this crate performs I/O.

mod defaults;
mod design;
mod types;
mod units;

pub use defaults::{
    default_design_system, default_props, default_semantic_element, initial_document,
};
pub use design::{ColorPalette, DesignSystem, ModularScale, ScaleEntry, Typography, RATIOS};
pub use types::{ComponentChild, LayoutComponentType, PropBag, PropValue, Section};
pub use units::rem_to_px;
