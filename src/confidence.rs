//! Confidence scores and advisory notes.
//!
//! A score is a pure function of the category, the two conventions, the
//! audience and the path that produced the size. Notes are joined with
//! `". "` and are advisory only; success is decided by the result's error.

use crate::taxonomy::{Audience, Category, Convention, Sheet};

/// Which branch of the resolver produced a size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Path {
    /// Source and target convention are the same.
    Identity,
    /// A target chart entry matched the reference value.
    Exact,
    /// A linear formula was applied because the target chart had no entry.
    Formula,
    /// Projected beyond the largest listed target size.
    Extrapolated,
    /// Returned as given because the size is convention independent.
    Echo,
}

pub const FORMULA_CONFIDENCE: f64 = 0.85;
pub const EXTRAPOLATED_CONFIDENCE: f64 = 0.70;

const LESS_COMMON_FOOTWEAR: [Convention; 2] = [Convention::Mx, Convention::Br];

/// Confidence of an exact chart match for the category.
pub fn baseline(category: Category) -> f64 {
    match category {
        Category::Ring => 0.98,
        Category::Shoes | Category::Socks | Category::Hat | Category::Watch => 0.95,
        Category::Clothing | Category::Dress | Category::Bra | Category::Glove | Category::Belt => 0.90,
        Category::Children => 0.90,
        Category::Outerwear => 0.88,
        Category::Swimwear => 0.85,
    }
}

/// Everything the generator looks at for one conversion.
#[derive(Debug, Clone)]
pub struct Context<'a> {
    pub category: Category,
    pub from: Convention,
    pub to: Convention,
    pub audience: Audience,
    pub sheet: Sheet,
    pub path: Path,
    /// Source reference value and the span of the source chart, when known.
    pub reference: Option<f64>,
    pub span: Option<(f64, f64)>,
    pub formula: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub confidence: f64,
    pub notes: Option<String>,
}

pub fn assess(context: &Context, floor: f64) -> Assessment {
    let chart = chart_category(context);
    let mut notes: Vec<String> = Vec::new();
    let mut confidence = match context.path {
        Path::Identity => 1.0,
        Path::Exact | Path::Echo => baseline(chart),
        Path::Formula => FORMULA_CONFIDENCE,
        Path::Extrapolated => EXTRAPOLATED_CONFIDENCE,
    };
    match context.path {
        Path::Identity => notes.push("Same sizing system, no conversion needed".to_owned()),
        Path::Formula => {
            if let Some(formula) = context.formula {
                notes.push(format!("Converted using formula {formula}"));
            }
        }
        Path::Extrapolated => {
            notes.push("Extended size beyond the standard chart, extrapolated from the largest listed sizes".to_owned())
        }
        Path::Echo => notes.push("Case diameter is the same in every sizing system".to_owned()),
        Path::Exact => (),
    }
    if context.path != Path::Identity {
        if is_footwear(context.category) {
            confidence -= footwear_penalty(context);
        }
        notes.extend(category_notes(chart, context));
    }
    let confidence = if context.path == Path::Identity { confidence } else { confidence.max(floor) };
    Assessment {
        confidence: round2(confidence),
        notes: if notes.is_empty() { None } else { Some(notes.join(". ")) },
    }
}

/// Garments for a child bracket are read on the children's charts and
/// scored as such.
fn chart_category(context: &Context) -> Category {
    match context.sheet {
        Sheet::Infant | Sheet::Toddler | Sheet::Kids | Sheet::Youth => Category::Children,
        _ => context.category,
    }
}

fn is_footwear(category: Category) -> bool {
    matches!(category, Category::Shoes | Category::Socks)
}

fn footwear_penalty(context: &Context) -> f64 {
    let conventions = [context.from, context.to];
    let mut penalty = 0.0;
    if conventions.iter().any(|c| LESS_COMMON_FOOTWEAR.contains(c)) {
        penalty += 0.1;
    }
    if conventions.iter().any(|c| c.is_measurement()) {
        penalty += 0.05;
    }
    // extrapolation always starts past the top of the chart and is
    // already scored for that
    if context.path != Path::Extrapolated {
        if let (Some(reference), Some(span)) = (context.reference, context.span) {
            if is_extreme(reference, span) {
                penalty += 0.1;
            }
        }
    }
    penalty
}

/// At or beyond the outer 10% of the chart at either end.
pub fn is_extreme(reference: f64, (low, high): (f64, f64)) -> bool {
    let margin = (high - low) * 0.1;
    reference <= low + margin || reference >= high - margin
}

fn category_notes(category: Category, context: &Context) -> Vec<String> {
    let mut notes = Vec::new();
    match category {
        Category::Shoes | Category::Socks => {
            if context.sheet == Sheet::Women && context.audience == Audience::Unisex {
                notes.push("Unisex footwear is read on the women's chart".to_owned());
            }
            if context.from.is_measurement() || context.to.is_measurement() {
                notes.push("Length based sizes describe the foot, not the shoe".to_owned());
            }
            notes.push("Sizes may vary by brand and width".to_owned());
        }
        Category::Clothing | Category::Outerwear => {
            let chart = if context.sheet == Sheet::Women { "women's" } else { "men's" };
            notes.push(format!("Based on {chart} sizing"));
            if context.audience == Audience::Unisex {
                notes.push("Unisex sizing follows the men's chart".to_owned());
            }
        }
        Category::Dress => notes.push("Dress sizes vary between brands".to_owned()),
        Category::Bra => notes.push("Cup volume changes with band size, consider sister sizes".to_owned()),
        Category::Ring => notes.push("Ring sizes may vary slightly between jewelers".to_owned()),
        Category::Hat => notes.push("Measure head circumference for the best fit".to_owned()),
        Category::Glove => notes.push("Measure around the knuckles of the dominant hand".to_owned()),
        Category::Belt => notes.push("Belt size is usually one size above trouser waist".to_owned()),
        Category::Swimwear => notes.push("Swimwear fit varies by cut and brand".to_owned()),
        Category::Children => {
            notes.push("Children's sizes follow typical height and age, check the brand's chart".to_owned())
        }
        Category::Watch => (),
    }
    notes
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(category: Category, from: Convention, to: Convention, path: Path) -> Context<'static> {
        Context {
            category,
            from,
            to,
            audience: Audience::Men,
            sheet: Sheet::Men,
            path,
            reference: Some(10.0),
            span: Some((6.0, 16.0)),
            formula: None,
        }
    }

    #[test]
    fn identity_is_certain() {
        let a = assess(&context(Category::Swimwear, Convention::Us, Convention::Us, Path::Identity), 0.5);
        assert_eq!(a.confidence, 1.0);
    }

    #[test]
    fn footwear_penalties_stack() {
        let plain = assess(&context(Category::Shoes, Convention::Us, Convention::Eu, Path::Exact), 0.5);
        assert_eq!(plain.confidence, 0.95);
        let rare = assess(&context(Category::Shoes, Convention::Us, Convention::Br, Path::Exact), 0.5);
        assert_eq!(rare.confidence, 0.85);
        let measured = assess(&context(Category::Shoes, Convention::Mx, Convention::Cm, Path::Exact), 0.5);
        assert_eq!(measured.confidence, 0.8);
    }

    #[test]
    fn floor_applies() {
        let mut c = context(Category::Shoes, Convention::Br, Convention::Inch, Path::Exact);
        c.reference = Some(16.0);
        // 0.95 - 0.1 - 0.05 - 0.1
        assert_eq!(assess(&c, 0.5).confidence, 0.7);
        assert_eq!(assess(&c, 0.75).confidence, 0.75);
    }

    #[test]
    fn extrapolation_is_not_charged_for_the_chart_edge() {
        let mut c = context(Category::Shoes, Convention::Us, Convention::Eu, Path::Extrapolated);
        c.reference = Some(16.0);
        assert_eq!(assess(&c, 0.5).confidence, 0.7);
        c.to = Convention::Br;
        assert_eq!(assess(&c, 0.5).confidence, 0.6);
    }

    #[test]
    fn formula_note_names_formula() {
        let mut c = context(Category::Clothing, Convention::Us, Convention::Eu, Path::Formula);
        c.formula = Some("EU = US + 10");
        let a = assess(&c, 0.5);
        assert_eq!(a.confidence, 0.85);
        assert!(a.notes.unwrap().contains("EU = US + 10"));
    }

    #[test]
    fn child_charts_score_as_children() {
        let mut c = context(Category::Swimwear, Convention::Us, Convention::Eu, Path::Exact);
        c.sheet = Sheet::Toddler;
        let a = assess(&c, 0.5);
        assert_eq!(a.confidence, 0.9);
        assert!(a.notes.unwrap().starts_with("Children's sizes"));
    }

    #[test]
    fn extremes() {
        assert!(is_extreme(6.5, (6.0, 16.0)));
        assert!(is_extreme(15.0, (6.0, 16.0)));
        assert!(!is_extreme(10.0, (6.0, 16.0)));
    }
}
