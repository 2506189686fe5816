//! Watches: case diameter is the same number everywhere, so numeric sizes
//! come back as given and only letter sizes need a chart.

use crate::confidence::Path;
use crate::error::ConversionError;
use crate::normalize::{normalize, numeric};
use crate::pattern;
use crate::result::{ConversionResult, Request};
use crate::table::{Catalog, TableSet};
use crate::taxonomy::{Audience, Category, Convention, Sheet};

use super::{check_supported, finish, Resolved, SizeResolver, Tuning};

#[derive(Debug, Clone)]
pub struct WatchResolver {
    sizes: TableSet,
    conventions: Vec<Convention>,
    tuning: Tuning,
}

/// Drops a trailing `MM` unit from a normalized token.
fn strip_unit(token: &str) -> &str {
    token.strip_suffix("MM").map(str::trim_end).unwrap_or(token)
}

impl WatchResolver {
    pub fn new(catalog: &Catalog, tuning: Tuning) -> Self {
        let sizes = catalog.set(Category::Watch, Sheet::Unisex);
        let conventions = sizes.conventions();
        Self { sizes, conventions, tuning }
    }

    fn resolve(&self, token: &str, from: Convention, to: Convention) -> Result<Resolved, ConversionError> {
        check_supported(&self.conventions, Category::Watch, from, to)?;
        let token = strip_unit(token);
        let unsupported = || ConversionError::UnsupportedConversion { from, to };
        let source = self.sizes.get(from).ok_or_else(unsupported)?;
        let target = self.sizes.get(to).ok_or_else(unsupported)?;
        // only diameters that fit the watch grammar are echoed
        let is_numeric = numeric(token).is_some() && pattern::matches(token, Category::Watch);

        if from == to {
            return if is_numeric || source.contains(token) {
                Ok(Resolved::new(token.to_owned(), Path::Identity, Sheet::Unisex))
            } else {
                Err(ConversionError::InvalidSize)
            };
        }
        if is_numeric {
            return Ok(Resolved::new(token.to_owned(), Path::Echo, Sheet::Unisex));
        }
        let reference = source.get(token).ok_or(ConversionError::InvalidSize)?;
        match target.find(reference, self.tuning.tolerance) {
            Some(entry) => Ok(Resolved::new(entry.token().to_owned(), Path::Exact, Sheet::Unisex).with_reference(reference, None)),
            None => Err(ConversionError::SizeOutOfRange { range: source.range().unwrap_or_default() }),
        }
    }
}

impl SizeResolver for WatchResolver {
    fn category(&self) -> Category {
        Category::Watch
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
        finish(&request, self.resolve(&token, from, to), &self.tuning)
    }

    fn is_valid(&self, size: &str, convention: Convention, _audience: Audience) -> bool {
        let token = normalize(size);
        let token = strip_unit(&token);
        pattern::matches(token, Category::Watch)
            && (numeric(token).is_some() || self.sizes.get(convention).is_some_and(|t| t.contains(token)))
    }

    fn suggestions(&self, size: &str, convention: Convention, _audience: Audience) -> Vec<String> {
        let token = normalize(size);
        let Some(table) = self.sizes.get(convention) else {
            return Vec::new();
        };
        match numeric(strip_unit(&token)) {
            Some(value) => table.nearest(value, 3),
            None => table.leading(5),
        }
    }

    fn supported_conventions(&self) -> &[Convention] {
        &self.conventions
    }

    fn requires_audience(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_millimetres() {
        assert_eq!(strip_unit("42MM"), "42");
        assert_eq!(strip_unit("42 MM"), "42");
        assert_eq!(strip_unit("L"), "L");
    }

    #[test]
    fn echo_follows_the_grammar() {
        let watches = WatchResolver::new(&Catalog::builtin(), Tuning::default());
        for (from, to) in [(Convention::Us, Convention::Eu), (Convention::Us, Convention::Us)] {
            let r = watches.convert_with_details("5", from, to, Audience::Unisex, Category::Watch);
            assert_eq!(r.error(), Some(&ConversionError::InvalidSize));
            assert!(!watches.is_valid("5", from, Audience::Unisex));
        }
        assert_eq!(watches.convert("41.5", Convention::Us, Convention::Eu, Audience::Unisex).as_deref(), Some("41.5"));
        assert!(watches.is_valid("41.5", Convention::Us, Audience::Unisex));
    }
}
