//! Category resolvers.
//!
//! Every category owns one resolver behind the [`SizeResolver`] trait. Most
//! categories are served by the chart driven [`TableResolver`]; bras,
//! children's sizes, watches and socks have their own resolvers because
//! their tokens are shaped differently. Resolvers are immutable once built
//! and may be shared freely between threads.

use tracing::{debug, trace};

use crate::confidence::{self, Context, Path};
use crate::error::ConversionError;
use crate::result::{ConversionResult, Request};
use crate::taxonomy::{Audience, Category, Convention, Sheet};

pub mod bra;
pub mod children;
pub mod footwear;
pub mod formula;
pub mod table;
pub mod watch;

pub use bra::BraResolver;
pub use children::ChildrenResolver;
pub use footwear::{FootwearResolver, HosieryResolver};
pub use formula::LinearRule;
pub use table::{Fallback, SheetRule, TableResolver};
pub use watch::WatchResolver;

/// The capability set shared by all category resolvers.
pub trait SizeResolver: Send + Sync {
    /// The category this resolver was built for.
    fn category(&self) -> Category;

    /// Converts and reports how the answer was reached. `category` is
    /// recorded in the result, which lets one resolver answer for another
    /// (socks are resolved on the shoe charts).
    fn convert_with_details(
        &self,
        size: &str,
        from: Convention,
        to: Convention,
        audience: Audience,
        category: Category,
    ) -> ConversionResult;

    /// The converted size, or nothing on any failure.
    fn convert(&self, size: &str, from: Convention, to: Convention, audience: Audience) -> Option<String> {
        self.convert_with_details(size, from, to, audience, self.category())
            .into_converted()
    }

    fn is_valid(&self, size: &str, convention: Convention, audience: Audience) -> bool;

    /// A short list of nearby or typical valid sizes.
    fn suggestions(&self, size: &str, convention: Convention, audience: Audience) -> Vec<String>;

    fn supported_conventions(&self) -> &[Convention];

    /// True when the same token means different things per audience.
    fn requires_audience(&self) -> bool;
}

/// Engine knobs every resolver needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Largest difference between reference values still counted as equal.
    pub tolerance: f64,
    pub confidence_floor: f64,
}
impl Default for Tuning {
    fn default() -> Self {
        Self { tolerance: 0.01, confidence_floor: 0.5 }
    }
}

/// A successful resolution before confidence and notes are attached.
#[derive(Debug, Clone)]
pub(crate) struct Resolved {
    size: String,
    path: Path,
    sheet: Sheet,
    reference: Option<f64>,
    span: Option<(f64, f64)>,
    formula: Option<String>,
}
impl Resolved {
    pub(crate) fn new(size: String, path: Path, sheet: Sheet) -> Self {
        Self { size, path, sheet, reference: None, span: None, formula: None }
    }
    pub(crate) fn with_reference(mut self, reference: f64, span: Option<(f64, f64)>) -> Self {
        self.reference = Some(reference);
        self.span = span;
        self
    }
    pub(crate) fn with_formula(mut self, formula: String) -> Self {
        self.formula = Some(formula);
        self
    }
}

/// Fails with `UnsupportedSystem` naming the first convention the category
/// does not know.
pub(crate) fn check_supported(
    supported: &[Convention],
    category: Category,
    from: Convention,
    to: Convention,
) -> Result<(), ConversionError> {
    for convention in [from, to] {
        if !supported.contains(&convention) {
            return Err(ConversionError::UnsupportedSystem { convention, category });
        }
    }
    Ok(())
}

/// Turns a resolution outcome into the immutable result handed to callers.
pub(crate) fn finish(
    request: &Request,
    outcome: Result<Resolved, ConversionError>,
    tuning: &Tuning,
) -> ConversionResult {
    match outcome {
        Ok(resolved) => {
            let context = Context {
                category: request.category,
                from: request.from,
                to: request.to,
                audience: request.audience,
                sheet: resolved.sheet,
                path: resolved.path,
                reference: resolved.reference,
                span: resolved.span,
                formula: resolved.formula.as_deref(),
            };
            let assessment = confidence::assess(&context, tuning.confidence_floor);
            trace!(
                category = %request.category,
                from = %request.from,
                to = %request.to,
                size = request.size,
                converted = %resolved.size,
                confidence = assessment.confidence,
                "converted"
            );
            ConversionResult::converted(request, resolved.size, assessment.confidence, assessment.notes)
        }
        Err(error) => {
            debug!(
                category = %request.category,
                from = %request.from,
                to = %request.to,
                size = request.size,
                %error,
                "conversion failed"
            );
            ConversionResult::failed(request, error)
        }
    }
}
