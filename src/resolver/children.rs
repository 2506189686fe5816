//! Children's sizes: four disjoint schemes (infant months, toddler ages,
//! youth letters, numeric kids' sizes) all expressed on body height.
//!
//! A child audience first claims its own scheme when the token is on that
//! chart, which is how height based EU tokens reach the infant and toddler
//! charts. Otherwise the token's shape decides, tried in the order infant,
//! toddler, youth, kids. There is no formula or extrapolation here.

use std::collections::HashMap;

use crate::confidence::Path;
use crate::error::ConversionError;
use crate::normalize::normalize;
use crate::pattern::{self, CHILD_SCHEMES};
use crate::result::{ConversionResult, Request};
use crate::table::{Catalog, ReferenceTable, TableSet, TokenHasher};
use crate::taxonomy::{Audience, Category, Convention, Sheet};

use super::{check_supported, finish, Resolved, SizeResolver, Tuning};

#[derive(Debug, Clone)]
pub struct ChildrenResolver {
    schemes: HashMap<Sheet, TableSet, TokenHasher>,
    conventions: Vec<Convention>,
    tuning: Tuning,
}

impl ChildrenResolver {
    pub fn new(catalog: &Catalog, tuning: Tuning) -> Self {
        let mut schemes: HashMap<Sheet, TableSet, TokenHasher> = HashMap::default();
        let mut conventions: Vec<Convention> = Vec::new();
        for scheme in CHILD_SCHEMES {
            let set = catalog.set(Category::Children, scheme);
            conventions.extend(set.conventions());
            schemes.insert(scheme, set);
        }
        conventions.sort();
        conventions.dedup();
        Self { schemes, conventions, tuning }
    }

    fn table(&self, scheme: Sheet, convention: Convention) -> Option<&ReferenceTable> {
        self.schemes.get(&scheme)?.get(convention)
    }

    /// The scheme a token belongs to in `convention`.
    pub fn scheme_for(&self, token: &str, convention: Convention, audience: Audience) -> Option<Sheet> {
        if let Some(scheme) = audience.child_sheet() {
            if self.table(scheme, convention).is_some_and(|t| t.contains(token)) {
                return Some(scheme);
            }
        }
        pattern::child_scheme(token)
    }

    fn resolve(
        &self,
        token: &str,
        from: Convention,
        to: Convention,
        audience: Audience,
    ) -> Result<Resolved, ConversionError> {
        check_supported(&self.conventions, Category::Children, from, to)?;
        let scheme = self.scheme_for(token, from, audience).ok_or_else(|| ConversionError::InvalidFormat {
            expected: Some(pattern::expected_format(Category::Children).to_owned()),
        })?;
        let unsupported = || ConversionError::UnsupportedConversion { from, to };
        let source = self.table(scheme, from).ok_or_else(unsupported)?;
        let target = self.table(scheme, to).ok_or_else(unsupported)?;

        if from == to {
            return if source.contains(token) {
                Ok(Resolved::new(token.to_owned(), Path::Identity, scheme))
            } else {
                Err(ConversionError::InvalidSize)
            };
        }
        let reference = source.get(token).ok_or(ConversionError::InvalidSize)?;
        match target.find(reference, self.tuning.tolerance) {
            Some(entry) => Ok(Resolved::new(entry.token().to_owned(), Path::Exact, scheme).with_reference(reference, None)),
            None => Err(ConversionError::SizeOutOfRange { range: source.range().unwrap_or_default() }),
        }
    }
}

impl SizeResolver for ChildrenResolver {
    fn category(&self) -> Category {
        Category::Children
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
        self.scheme_for(&token, convention, audience)
            .and_then(|scheme| self.table(scheme, convention))
            .is_some_and(|t| t.contains(&token))
    }

    /// Leading sizes of the matching scheme, or of the audience's own scheme
    /// when the token matches nothing.
    fn suggestions(&self, size: &str, convention: Convention, audience: Audience) -> Vec<String> {
        let token = normalize(size);
        let scheme = self
            .scheme_for(&token, convention, audience)
            .or(audience.child_sheet())
            .unwrap_or(Sheet::Kids);
        self.table(scheme, convention).map(|t| t.leading(5)).unwrap_or_default()
    }

    fn supported_conventions(&self) -> &[Convention] {
        &self.conventions
    }

    fn requires_audience(&self) -> bool {
        true
    }
}
