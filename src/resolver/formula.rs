//! Linear fallback formulas used when a target chart has no matching entry.

use crate::taxonomy::{Convention, Sheet};

/// `target = source * scale + offset`, restricted to one convention pair
/// and optionally one sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRule {
    sheet: Option<Sheet>,
    from: Convention,
    to: Convention,
    scale: f64,
    offset: f64,
    label: String,
}

impl LinearRule {
    pub fn offset(sheet: Option<Sheet>, from: Convention, to: Convention, offset: f64) -> Self {
        let label = if offset < 0.0 {
            format!("{to} = {from} - {}", -offset)
        } else {
            format!("{to} = {from} + {offset}")
        };
        Self { sheet, from, to, scale: 1.0, offset, label }
    }
    pub fn multiply(sheet: Option<Sheet>, from: Convention, to: Convention, factor: f64) -> Self {
        Self { sheet, from, to, scale: factor, offset: 0.0, label: format!("{to} = {from} x {factor}") }
    }
    pub fn divide(sheet: Option<Sheet>, from: Convention, to: Convention, divisor: f64) -> Self {
        Self { sheet, from, to, scale: 1.0 / divisor, offset: 0.0, label: format!("{to} = {from} / {divisor}") }
    }
    pub fn applies(&self, sheet: Sheet, from: Convention, to: Convention) -> bool {
        self.from == from && self.to == to && self.sheet.is_none_or(|s| s == sheet)
    }
    pub fn apply(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Tops and jackets: `US <-> EU`, men ±10 and women ±30.
pub fn apparel_rules() -> Vec<LinearRule> {
    vec![
        LinearRule::offset(Some(Sheet::Men), Convention::Us, Convention::Eu, 10.0),
        LinearRule::offset(Some(Sheet::Men), Convention::Eu, Convention::Us, -10.0),
        LinearRule::offset(Some(Sheet::Women), Convention::Us, Convention::Eu, 30.0),
        LinearRule::offset(Some(Sheet::Women), Convention::Eu, Convention::Us, -30.0),
    ]
}

/// Waist based sizes: `US <-> EU` ±16 and `US <-> CM` by 2.54.
pub fn belt_rules() -> Vec<LinearRule> {
    vec![
        LinearRule::offset(None, Convention::Us, Convention::Eu, 16.0),
        LinearRule::offset(None, Convention::Eu, Convention::Us, -16.0),
        LinearRule::multiply(None, Convention::Us, Convention::Cm, 2.54),
        LinearRule::divide(None, Convention::Cm, Convention::Us, 2.54),
    ]
}

const DRESS_OFFSETS: [(Convention, f64); 7] = [
    (Convention::Us, 0.0),
    (Convention::Uk, 4.0),
    (Convention::Eu, 30.0),
    (Convention::Fr, 32.0),
    (Convention::It, 36.0),
    (Convention::Au, 4.0),
    (Convention::Jp, 3.0),
];

/// Dress sizes sit at fixed offsets from the US size, so every pair of
/// conventions has a formula.
pub fn dress_rules() -> Vec<LinearRule> {
    let mut rules = Vec::new();
    for (from, from_offset) in DRESS_OFFSETS {
        for (to, to_offset) in DRESS_OFFSETS {
            if from != to {
                rules.push(LinearRule::offset(None, from, to, to_offset - from_offset));
            }
        }
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(LinearRule::offset(None, Convention::Us, Convention::Eu, 10.0).label(), "EU = US + 10");
        assert_eq!(LinearRule::offset(None, Convention::Eu, Convention::Us, -16.0).label(), "US = EU - 16");
        assert_eq!(LinearRule::multiply(None, Convention::Us, Convention::Cm, 2.54).label(), "CM = US x 2.54");
        assert_eq!(LinearRule::divide(None, Convention::Cm, Convention::Us, 2.54).label(), "US = CM / 2.54");
    }

    #[test]
    fn sheet_restriction() {
        let rule = LinearRule::offset(Some(Sheet::Women), Convention::Us, Convention::Eu, 30.0);
        assert!(rule.applies(Sheet::Women, Convention::Us, Convention::Eu));
        assert!(!rule.applies(Sheet::Men, Convention::Us, Convention::Eu));
        assert!(!rule.applies(Sheet::Women, Convention::Eu, Convention::Us));
        assert_eq!(rule.apply(18.0), 48.0);
    }

    #[test]
    fn dress_pairs() {
        let rules = dress_rules();
        assert_eq!(rules.len(), 42);
        let uk_to_eu = rules.iter().find(|r| r.applies(Sheet::Women, Convention::Uk, Convention::Eu)).unwrap();
        assert_eq!(uk_to_eu.apply(12.0), 38.0);
    }
}
