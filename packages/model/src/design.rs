//! Design-system tokens and the modular scale used to derive them.
//!
//! The design system is read-only in the current scope: it has no mutation
//! API and exists purely as input to CSS/JSON export. Ordered token scales
//! are vectors of named entries so that insertion order survives
//! serialization and drives export order.

use serde::{Deserialize, Serialize};

/// One named token in an ordered scale (`md` → `1rem`, `lg` → `1024px`...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleEntry {
    pub name: String,
    pub value: String,
}

impl ScaleEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Brand colors plus a neutral shade ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub neutral: Vec<ScaleEntry>,
}

/// Font stacks and the stepped size scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: Vec<ScaleEntry>,
    pub font_size: Vec<ScaleEntry>,
}

/// The full token set consumed by export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystem {
    pub colors: ColorPalette,
    pub spacing: Vec<ScaleEntry>,
    pub typography: Typography,
    pub breakpoints: Vec<ScaleEntry>,
}

/// A named type-scale ratio, e.g. "Major Third" = 1.25.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModularScale {
    pub name: &'static str,
    pub ratio: f64,
}

/// The common named ratios offered in the scale picker.
pub const RATIOS: &[ModularScale] = &[
    ModularScale { name: "Minor Second", ratio: 1.067 },
    ModularScale { name: "Major Second", ratio: 1.125 },
    ModularScale { name: "Minor Third", ratio: 1.2 },
    ModularScale { name: "Major Third", ratio: 1.25 },
    ModularScale { name: "Perfect Fourth", ratio: 1.333 },
    ModularScale { name: "Golden Ratio", ratio: 1.618 },
];

impl ModularScale {
    /// Look up a ratio by its display name.
    pub fn by_name(name: &str) -> Option<ModularScale> {
        RATIOS.iter().copied().find(|scale| scale.name == name)
    }

    /// Derive a stepped sequence around `base`: `down` steps below it,
    /// then the base itself, then `up` steps above, smallest first.
    /// Values are rounded to three decimals.
    pub fn steps(&self, base: f64, down: u32, up: u32) -> Vec<f64> {
        let mut sizes = Vec::with_capacity((down + up + 1) as usize);
        for i in (1..=down).rev() {
            sizes.push(round3(base / self.ratio.powi(i as i32)));
        }
        sizes.push(round3(base));
        for i in 1..=up {
            sizes.push(round3(base * self.ratio.powi(i as i32)));
        }
        sizes
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_third_steps() {
        let scale = ModularScale::by_name("Major Third").unwrap();
        assert_eq!(scale.ratio, 1.25);
        assert_eq!(scale.steps(1.0, 2, 3), vec![0.64, 0.8, 1.0, 1.25, 1.563, 1.953]);
    }

    #[test]
    fn unknown_ratio_name() {
        assert!(ModularScale::by_name("Diminished Fifth").is_none());
    }
}
