//! Bra sizes: a band and a cup, each converted on its own chart and then
//! put back together. Audience is always women.

use crate::confidence::Path;
use crate::error::ConversionError;
use crate::normalize::normalize;
use crate::pattern;
use crate::result::{ConversionResult, Request};
use crate::table::{Catalog, ReferenceTable, TableSet};
use crate::taxonomy::{Audience, Category, Convention, Sheet};

use super::{check_supported, finish, Resolved, SizeResolver, Tuning};

#[derive(Debug, Clone)]
pub struct BraResolver {
    bands: TableSet,
    cups: TableSet,
    conventions: Vec<Convention>,
    tuning: Tuning,
}

/// One band step is two inches on the US chart.
const BAND_STEP: f64 = 2.0;

impl BraResolver {
    pub fn new(catalog: &Catalog, tuning: Tuning) -> Self {
        let bands = catalog.set(Category::Bra, Sheet::Band);
        let cups = catalog.set(Category::Bra, Sheet::Cup);
        let conventions = bands
            .conventions()
            .into_iter()
            .filter(|c| cups.get(*c).is_some())
            .collect();
        Self { bands, cups, conventions, tuning }
    }

    fn charts(&self, convention: Convention) -> Option<(&ReferenceTable, &ReferenceTable)> {
        Some((self.bands.get(convention)?, self.cups.get(convention)?))
    }

    fn resolve(&self, token: &str, from: Convention, to: Convention) -> Result<Resolved, ConversionError> {
        check_supported(&self.conventions, Category::Bra, from, to)?;
        let (band, cup) = pattern::bra_parts(token).ok_or_else(|| ConversionError::InvalidFormat {
            expected: Some(pattern::expected_format(Category::Bra).to_owned()),
        })?;
        let unsupported = || ConversionError::UnsupportedConversion { from, to };
        let (source_bands, source_cups) = self.charts(from).ok_or_else(unsupported)?;
        let (target_bands, target_cups) = self.charts(to).ok_or_else(unsupported)?;

        let band_reference = source_bands.get(band).ok_or(ConversionError::InvalidSize)?;
        let cup_reference = source_cups.get(cup).ok_or(ConversionError::InvalidSize)?;
        if from == to {
            return Ok(Resolved::new(format!("{band}{cup}"), Path::Identity, Sheet::Women));
        }
        let tolerance = self.tuning.tolerance;
        let target_band = target_bands.find(band_reference, tolerance).ok_or(ConversionError::InvalidSize)?;
        let target_cup = target_cups.find(cup_reference, tolerance).ok_or(ConversionError::InvalidSize)?;
        Ok(Resolved::new(format!("{}{}", target_band.token(), target_cup.token()), Path::Exact, Sheet::Women))
    }
}

impl SizeResolver for BraResolver {
    fn category(&self) -> Category {
        Category::Bra
    }

    fn convert_with_details(
        &self,
        size: &str,
        from: Convention,
        to: Convention,
        _audience: Audience,
        category: Category,
    ) -> ConversionResult {
        let request = Request { size, from, to, category, audience: Audience::Women };
        let token = normalize(size);
        finish(&request, self.resolve(&token, from, to), &self.tuning)
    }

    fn is_valid(&self, size: &str, convention: Convention, _audience: Audience) -> bool {
        let token = normalize(size);
        match (pattern::bra_parts(&token), self.charts(convention)) {
            (Some((band, cup)), Some((bands, cups))) => bands.contains(band) && cups.contains(cup),
            _ => false,
        }
    }

    /// Sister sizes: one band down with one cup up, and one band up with one
    /// cup down.
    fn suggestions(&self, size: &str, convention: Convention, _audience: Audience) -> Vec<String> {
        let token = normalize(size);
        let (Some((band, cup)), Some((bands, cups))) = (pattern::bra_parts(&token), self.charts(convention)) else {
            return Vec::new();
        };
        let (Some(band_reference), Some(cup_reference)) = (bands.get(band), cups.get(cup)) else {
            return Vec::new();
        };
        let tolerance = self.tuning.tolerance;
        [(-BAND_STEP, 1.0), (BAND_STEP, -1.0)]
            .into_iter()
            .filter_map(|(band_shift, cup_shift)| {
                let sister_band = bands.find(band_reference + band_shift, tolerance)?;
                let sister_cup = cups.find(cup_reference + cup_shift, tolerance)?;
                Some(format!("{}{}", sister_band.token(), sister_cup.token()))
            })
            .collect()
    }

    fn supported_conventions(&self) -> &[Convention] {
        &self.conventions
    }

    fn requires_audience(&self) -> bool {
        false
    }
}
