//! The chart driven resolver shared by most categories.
//!
//! Resolution runs: normalize, check both conventions, pick the sheet for
//! the audience, short-circuit same-convention requests, look up the source
//! reference value, search the target chart within tolerance, then fall back
//! to a formula or extrapolation before giving up with the source range.

use std::collections::HashMap;

use tracing::debug;

use crate::confidence::Path;
use crate::error::ConversionError;
use crate::normalize::{normalize, numeric, format_size};
use crate::pattern;
use crate::result::{ConversionResult, Request};
use crate::table::{Catalog, ReferenceTable, TableSet, TokenHasher};
use crate::taxonomy::{Audience, Category, Convention, Sheet};

use super::formula::LinearRule;
use super::{check_supported, finish, Resolved, SizeResolver, Tuning};

/// How an audience picks a sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetRule {
    /// One chart regardless of audience.
    Fixed(Sheet),
    /// Separate men's and women's charts; everyone else reads `unisex`, or
    /// must say which when it is `None`.
    Gendered { unisex: Option<Sheet> },
}

/// What to do when the target chart has no matching entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback {
    None,
    Formula(Vec<LinearRule>),
    /// Project past the largest target size (footwear).
    Extrapolate,
}

#[derive(Debug, Clone)]
pub struct TableResolver {
    category: Category,
    conventions: Vec<Convention>,
    sheets: SheetRule,
    tables: HashMap<Sheet, TableSet, TokenHasher>,
    fallback: Fallback,
    tuning: Tuning,
}

impl TableResolver {
    pub fn new(category: Category, catalog: &Catalog, sheets: SheetRule, fallback: Fallback, tuning: Tuning) -> Self {
        let used = match sheets {
            SheetRule::Fixed(sheet) => vec![sheet],
            SheetRule::Gendered { .. } => vec![Sheet::Men, Sheet::Women],
        };
        let mut tables: HashMap<Sheet, TableSet, TokenHasher> = HashMap::default();
        let mut conventions: Vec<Convention> = Vec::new();
        for sheet in used {
            let set = catalog.set(category, sheet);
            conventions.extend(set.conventions());
            tables.insert(sheet, set);
        }
        conventions.sort();
        conventions.dedup();
        Self { category, conventions, sheets, tables, fallback, tuning }
    }

    pub fn sheet_for(&self, audience: Audience) -> Result<Sheet, ConversionError> {
        match (self.sheets, audience) {
            (SheetRule::Fixed(sheet), _) => Ok(sheet),
            (SheetRule::Gendered { .. }, Audience::Men) => Ok(Sheet::Men),
            (SheetRule::Gendered { .. }, Audience::Women) => Ok(Sheet::Women),
            (SheetRule::Gendered { unisex: Some(sheet) }, _) => Ok(sheet),
            (SheetRule::Gendered { unisex: None }, _) => Err(ConversionError::GenderRequired),
        }
    }

    fn table(&self, sheet: Sheet, convention: Convention) -> Option<&ReferenceTable> {
        self.tables.get(&sheet)?.get(convention)
    }

    /// Resolves an already normalized token.
    pub(crate) fn resolve(
        &self,
        token: &str,
        from: Convention,
        to: Convention,
        audience: Audience,
    ) -> Result<Resolved, ConversionError> {
        check_supported(&self.conventions, self.category, from, to)?;
        let sheet = self.sheet_for(audience)?;
        let unsupported = || ConversionError::UnsupportedConversion { from, to };
        let source = self.table(sheet, from).ok_or_else(unsupported)?;
        let target = self.table(sheet, to).ok_or_else(unsupported)?;

        if from == to {
            return if source.contains(token) {
                Ok(Resolved::new(token.to_owned(), Path::Identity, sheet))
            } else {
                Err(ConversionError::InvalidSize)
            };
        }

        let reference = source.get(token).ok_or(ConversionError::InvalidSize)?;
        let span = source.lowest().zip(source.highest()).map(|(l, h)| (l.reference(), h.reference()));
        if let Some(entry) = target.find(reference, self.tuning.tolerance) {
            return Ok(Resolved::new(entry.token().to_owned(), Path::Exact, sheet).with_reference(reference, span));
        }

        match &self.fallback {
            Fallback::Formula(rules) => {
                let rule = rules.iter().find(|r| r.applies(sheet, from, to));
                if let (Some(rule), Some(value)) = (rule, numeric(token)) {
                    let size = format_size(rule.apply(value));
                    debug!(category = %self.category, token, %size, formula = rule.label(), "formula fallback");
                    return Ok(Resolved::new(size, Path::Formula, sheet)
                        .with_reference(reference, span)
                        .with_formula(rule.label().to_owned()));
                }
            }
            Fallback::Extrapolate => {
                if let Some(size) = extrapolate(target, reference) {
                    debug!(category = %self.category, token, %size, "extrapolated");
                    return Ok(Resolved::new(size, Path::Extrapolated, sheet).with_reference(reference, span));
                }
            }
            Fallback::None => (),
        }
        Err(ConversionError::SizeOutOfRange { range: source.range().unwrap_or_default() })
    }
}

/// Steps past the largest target entry using the spacing of the two largest
/// tokens. Only defined above the chart.
fn extrapolate(target: &ReferenceTable, reference: f64) -> Option<String> {
    let (second, largest) = target.top_two_numeric()?;
    if reference <= largest.reference() {
        return None;
    }
    let reference_step = largest.reference() - second.reference();
    let token_step = numeric(largest.token())? - numeric(second.token())?;
    let steps = (reference - largest.reference()) / reference_step;
    let value = numeric(largest.token())? + steps * token_step;
    Some(format!("{value:.1}"))
}

impl SizeResolver for TableResolver {
    fn category(&self) -> Category {
        self.category
    }

    fn convert_with_details(
        &self,
        size: &str,
        from: Convention,
        to: Convention,
        audience: Audience,
        category: Category,
    ) -> ConversionResult {
        let request = Request { size, from, to, category, audience };
        let token = normalize(size);
        finish(&request, self.resolve(&token, from, to, audience), &self.tuning)
    }

    fn is_valid(&self, size: &str, convention: Convention, audience: Audience) -> bool {
        let token = normalize(size);
        let Ok(sheet) = self.sheet_for(audience) else {
            return false;
        };
        pattern::matches(&token, self.category)
            && self.table(sheet, convention).is_some_and(|t| t.contains(&token))
    }

    fn suggestions(&self, size: &str, convention: Convention, audience: Audience) -> Vec<String> {
        let token = normalize(size);
        let Ok(sheet) = self.sheet_for(audience) else {
            return Vec::new();
        };
        let Some(table) = self.table(sheet, convention) else {
            return Vec::new();
        };
        match numeric(&token) {
            Some(value) => table.nearest(value, 3),
            None => table.leading(5),
        }
    }

    fn supported_conventions(&self) -> &[Convention] {
        &self.conventions
    }

    fn requires_audience(&self) -> bool {
        matches!(self.sheets, SheetRule::Gendered { .. })
    }
}
