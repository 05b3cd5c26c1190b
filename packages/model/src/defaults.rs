//! Defaults provider: per-component property bags, semantic elements,
//! the stock design system, and the seed document.
//!
//! Everything here is a pure constant-producing function; tests rely on
//! the exact bags, so changes to the values below are behavior changes.

use crate::design::{ColorPalette, DesignSystem, ModularScale, ScaleEntry, Typography};
use crate::types::{ComponentChild, LayoutComponentType, PropBag, PropValue, Section};

fn bag<const N: usize>(entries: [(&str, PropValue); N]) -> PropBag {
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// Default property bag for a component type. Total over the enum;
/// repeated calls return structurally equal bags.
pub fn default_props(component: LayoutComponentType) -> PropBag {
    match component {
        LayoutComponentType::Container => bag([
            ("maxWidth", "1200px".into()),
            ("padding", "1rem".into()),
            ("centered", true.into()),
        ]),
        LayoutComponentType::Stack => bag([
            ("space", "1rem".into()),
            ("recursive", false.into()),
        ]),
        LayoutComponentType::Grid => bag([
            ("minWidth", "250px".into()),
            ("gap", "1rem".into()),
            ("autoFit", true.into()),
        ]),
        LayoutComponentType::Cluster => bag([
            ("gap", "1rem".into()),
            ("justify", "flex-start".into()),
            ("align", "center".into()),
        ]),
        LayoutComponentType::Sidebar => bag([
            ("side", "left".into()),
            ("sideWidth", "250px".into()),
            ("contentMin", "50%".into()),
            ("gap", "1rem".into()),
        ]),
        LayoutComponentType::Switcher => bag([
            ("threshold", "30rem".into()),
            ("gap", "1rem".into()),
            ("limit", "4".into()),
        ]),
        LayoutComponentType::Box => bag([
            ("padding", "1rem".into()),
            ("borderWidth", "0".into()),
        ]),
        LayoutComponentType::Center => bag([
            ("maxWidth", "60ch".into()),
            ("gutters", "1rem".into()),
            ("intrinsic", false.into()),
        ]),
        LayoutComponentType::Cover => bag([
            ("minHeight", "100vh".into()),
            ("padding", "1rem".into()),
            ("centered", "h1".into()),
        ]),
    }
}

/// Semantic HTML tag a freshly created node starts with.
///
/// Currently every type maps to "div"; only the initial value is derived
/// from the component, so this stays a function of the type rather than
/// a bare constant.
pub fn default_semantic_element(component: LayoutComponentType) -> &'static str {
    match component {
        LayoutComponentType::Container
        | LayoutComponentType::Stack
        | LayoutComponentType::Grid
        | LayoutComponentType::Cluster
        | LayoutComponentType::Sidebar
        | LayoutComponentType::Switcher
        | LayoutComponentType::Box
        | LayoutComponentType::Center
        | LayoutComponentType::Cover => "div",
    }
}

/// The stock token set: Major Third type scale from a 1rem base,
/// doubling spacing scale, and the usual breakpoint names.
pub fn default_design_system() -> DesignSystem {
    let scale = ModularScale::by_name("Major Third").unwrap_or(ModularScale {
        name: "Major Third",
        ratio: 1.25,
    });
    let names = ["xs", "sm", "base", "lg", "xl", "2xl"];
    let font_size = scale
        .steps(1.0, 2, 3)
        .into_iter()
        .zip(names)
        .map(|(size, name)| ScaleEntry::new(name, format!("{}rem", size)))
        .collect();

    DesignSystem {
        colors: ColorPalette {
            primary: "#3366ff".to_string(),
            secondary: "#6633ff".to_string(),
            accent: "#ff6633".to_string(),
            neutral: vec![
                ScaleEntry::new("50", "#fafafa"),
                ScaleEntry::new("100", "#f4f4f5"),
                ScaleEntry::new("300", "#d4d4d8"),
                ScaleEntry::new("500", "#71717a"),
                ScaleEntry::new("700", "#3f3f46"),
                ScaleEntry::new("900", "#18181b"),
            ],
        },
        spacing: vec![
            ScaleEntry::new("xs", "0.25rem"),
            ScaleEntry::new("sm", "0.5rem"),
            ScaleEntry::new("md", "1rem"),
            ScaleEntry::new("lg", "2rem"),
            ScaleEntry::new("xl", "4rem"),
        ],
        typography: Typography {
            font_family: vec![
                ScaleEntry::new("heading", "system-ui, sans-serif"),
                ScaleEntry::new("body", "system-ui, sans-serif"),
                ScaleEntry::new("mono", "ui-monospace, monospace"),
            ],
            font_size,
        },
        breakpoints: vec![
            ScaleEntry::new("sm", "640px"),
            ScaleEntry::new("md", "768px"),
            ScaleEntry::new("lg", "1024px"),
            ScaleEntry::new("xl", "1280px"),
        ],
    }
}

/// The seed document: a header container holding a nav cluster.
/// Reproduced exactly; test fixtures depend on the ids and content.
pub fn initial_document() -> Vec<Section> {
    vec![Section {
        id: "header-1".to_string(),
        name: "Header".to_string(),
        component: LayoutComponentType::Container,
        semantic_element: "header".to_string(),
        props: default_props(LayoutComponentType::Container),
        children: vec![ComponentChild {
            id: "nav-1".to_string(),
            component: LayoutComponentType::Cluster,
            semantic_element: "nav".to_string(),
            props: default_props(LayoutComponentType::Cluster),
            content: "Site navigation".to_string(),
            children: vec![],
        }],
        content: None,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_props_is_idempotent_for_every_type() {
        for ty in LayoutComponentType::ALL {
            assert_eq!(default_props(ty), default_props(ty), "{:?}", ty);
            assert!(!default_props(ty).is_empty(), "{:?} has an empty bag", ty);
        }
    }

    #[test]
    fn grid_defaults_match_fixture() {
        let props = default_props(LayoutComponentType::Grid);
        assert_eq!(props["minWidth"], "250px".into());
        assert_eq!(props["gap"], "1rem".into());
        assert_eq!(props["autoFit"], true.into());
        assert_eq!(props.len(), 3);
    }

    #[test]
    fn semantic_element_is_div_for_every_type() {
        for ty in LayoutComponentType::ALL {
            assert_eq!(default_semantic_element(ty), "div");
        }
    }

    #[test]
    fn design_system_carries_base_tokens() {
        let ds = default_design_system();
        let base = ds.typography.font_size.iter().find(|e| e.name == "base");
        assert_eq!(base.map(|e| e.value.as_str()), Some("1rem"));

        let md = ds.spacing.iter().find(|e| e.name == "md");
        assert_eq!(md.map(|e| e.value.as_str()), Some("1rem"));
    }

    #[test]
    fn font_scale_follows_major_third() {
        let ds = default_design_system();
        let values: Vec<&str> = ds
            .typography
            .font_size
            .iter()
            .map(|e| e.value.as_str())
            .collect();
        assert_eq!(
            values,
            vec!["0.64rem", "0.8rem", "1rem", "1.25rem", "1.563rem", "1.953rem"]
        );
    }

    #[test]
    fn seed_document_shape() {
        let doc = initial_document();
        assert_eq!(doc.len(), 1);

        let header = &doc[0];
        assert_eq!(header.id, "header-1");
        assert_eq!(header.component, LayoutComponentType::Container);
        assert_eq!(header.semantic_element, "header");
        assert_eq!(header.props, default_props(LayoutComponentType::Container));
        assert_eq!(header.content, None);

        assert_eq!(header.children.len(), 1);
        let nav = &header.children[0];
        assert_eq!(nav.id, "nav-1");
        assert_eq!(nav.component, LayoutComponentType::Cluster);
        assert_eq!(nav.semantic_element, "nav");
        assert_eq!(nav.content, "Site navigation");
        assert!(nav.children.is_empty());
    }
}
