//! # Pagecraft Export
//!
//! Serialization of a page document and its design system into the two
//! export formats the builder offers: a pretty-printed JSON document and
//! a CSS custom-properties block.
//!
//! Both generators are deterministic: identical input produces
//! byte-identical output, and token order follows the design system's
//! insertion order. Triggering the actual file download is the caller's
//! concern; this crate's obligation ends at producing the string.

use pagecraft_model::{DesignSystem, Section};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The JSON export payload: the full section tree plus the token set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Export {
    pub sections: Vec<Section>,
    pub design_system: DesignSystem,
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Serialize the document and design system to pretty-printed JSON.
pub fn generate_json(
    sections: &[Section],
    design_system: &DesignSystem,
) -> Result<String, ExportError> {
    let export = Export {
        sections: sections.to_vec(),
        design_system: design_system.clone(),
    };
    let json = serde_json::to_string_pretty(&export).map_err(ExportError::Encode)?;
    debug!(sections = sections.len(), bytes = json.len(), "generated JSON export");
    Ok(json)
}

/// Parse a JSON export back into sections and design system.
/// Round-trips `generate_json` output structurally.
pub fn parse_json(json: &str) -> Result<Export, ExportError> {
    serde_json::from_str(json).map_err(ExportError::Parse)
}

/// Emit the design system's type and spacing scales as CSS custom
/// properties in a single `:root` block.
///
/// Font-size variables come first under a `/* Typography */` label,
/// then one blank line and the `/* Spacing */` group; within each group
/// the declarations follow the scale's insertion order.
pub fn generate_css(design_system: &DesignSystem) -> String {
    let mut css = String::from(":root {\n");

    css.push_str("  /* Typography */\n");
    for entry in &design_system.typography.font_size {
        css.push_str(&format!("  --text-{}: {};\n", entry.name, entry.value));
    }

    css.push('\n');
    css.push_str("  /* Spacing */\n");
    for entry in &design_system.spacing {
        css.push_str(&format!("  --space-{}: {};\n", entry.name, entry.value));
    }

    css.push_str("}\n");
    css
}
