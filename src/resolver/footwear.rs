//! Shoes, and socks which are sized on the same charts.

use std::sync::Arc;

use crate::error::ConversionError;
use crate::normalize::normalize;
use crate::pattern;
use crate::result::{ConversionResult, Request};
use crate::table::Catalog;
use crate::taxonomy::{Audience, Category, Convention, Sheet};

use super::table::{Fallback, SheetRule, TableResolver};
use super::{finish, SizeResolver, Tuning};

/// Chart lookup with extrapolation past the largest listed size. Unisex
/// requests are read on the women's chart.
#[derive(Debug, Clone)]
pub struct FootwearResolver {
    charts: TableResolver,
    tuning: Tuning,
}

impl FootwearResolver {
    pub fn new(catalog: &Catalog, tuning: Tuning) -> Self {
        let charts = TableResolver::new(
            Category::Shoes,
            catalog,
            SheetRule::Gendered { unisex: Some(Sheet::Women) },
            Fallback::Extrapolate,
            tuning,
        );
        Self { charts, tuning }
    }
}

impl SizeResolver for FootwearResolver {
    fn category(&self) -> Category {
        Category::Shoes
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
        // a range such as 9-10 names two sizes, not one
        let outcome = match pattern::range_parts(&token) {
            Some((low, high)) => Err(ConversionError::AmbiguousSize { suggestions: vec![low.to_owned(), high.to_owned()] }),
            None => self.charts.resolve(&token, from, to, audience),
        };
        finish(&request, outcome, &self.tuning)
    }

    fn is_valid(&self, size: &str, convention: Convention, audience: Audience) -> bool {
        self.charts.is_valid(size, convention, audience)
    }

    fn suggestions(&self, size: &str, convention: Convention, audience: Audience) -> Vec<String> {
        let token = normalize(size);
        match pattern::range_parts(&token) {
            Some((low, high)) => vec![low.to_owned(), high.to_owned()],
            None => self.charts.suggestions(&token, convention, audience),
        }
    }

    fn supported_conventions(&self) -> &[Convention] {
        self.charts.supported_conventions()
    }

    fn requires_audience(&self) -> bool {
        self.charts.requires_audience()
    }
}

/// Socks follow shoe sizes; every call goes to the shared footwear resolver.
#[derive(Debug, Clone)]
pub struct HosieryResolver {
    footwear: Arc<FootwearResolver>,
}

impl HosieryResolver {
    pub fn new(footwear: Arc<FootwearResolver>) -> Self {
        Self { footwear }
    }
}

impl SizeResolver for HosieryResolver {
    fn category(&self) -> Category {
        Category::Socks
    }

    fn convert_with_details(
        &self,
        size: &str,
        from: Convention,
        to: Convention,
        audience: Audience,
        category: Category,
    ) -> ConversionResult {
        self.footwear.convert_with_details(size, from, to, audience, category)
    }

    fn is_valid(&self, size: &str, convention: Convention, audience: Audience) -> bool {
        self.footwear.is_valid(size, convention, audience)
    }

    fn suggestions(&self, size: &str, convention: Convention, audience: Audience) -> Vec<String> {
        self.footwear.suggestions(size, convention, audience)
    }

    fn supported_conventions(&self) -> &[Convention] {
        self.footwear.supported_conventions()
    }

    fn requires_audience(&self) -> bool {
        self.footwear.requires_audience()
    }
}
