//! Sizewise – converts clothing, footwear and accessory sizes between regional
//! sizing conventions.
//!
//! A conversion takes a size token written in one [`taxonomy::Convention`]
//! (US, UK, EU, CM, ...) and answers with the equivalent token in another,
//! for one [`taxonomy::Category`] of product and one [`taxonomy::Audience`]:
//! * The token is first canonicalised by [`normalize::normalize`] (trimmed,
//!   upper-cased, fractions and verbose synonyms collapsed).
//! * Every category has a chart per convention mapping tokens to a shared
//!   *reference value* (see [`table::ReferenceTable`]). Equal physical sizes
//!   carry equal reference values, so a conversion is a lookup on the source
//!   chart followed by a tolerance search on the target chart.
//! * When the target chart has no match, some categories fall back on a
//!   linear formula (apparel, dress, belt) or project past the chart
//!   (footwear). Such answers come back with a lower confidence and a note.
//!
//! Results are returned as immutable [`result::ConversionResult`] values
//! carrying the converted size or a [`error::ConversionError`], a confidence
//! between 0 and 1 and optional human-readable notes.
//!
//! ## Modules
//! * [`taxonomy`] – Conventions, categories, audiences and chart sheets.
//! * [`normalize`] – Token canonicalisation.
//! * [`pattern`] – Per-category size grammars.
//! * [`table`] – Reference tables and the catalog holding them.
//! * [`resolver`] – The [`resolver::SizeResolver`] trait and one resolver per category.
//! * [`confidence`] – Confidence scoring and notes.
//! * [`converter`] – The [`converter::SizeConverter`] facade.
//! * [`settings`] – Engine knobs and chart overrides read through `config`.
//!
//! ## Quick Start
//! ```
//! use sizewise::{Audience, Category, Convention, SizeConverter};
//! let converter = SizeConverter::global();
//! let eu = converter.convert("9", Convention::Us, Convention::Eu, Category::Shoes, Audience::Women);
//! assert_eq!(eu.as_deref(), Some("39"));
//!
//! let details = converter.convert_with_details("50", Convention::Us, Convention::Eu, Category::Clothing, Audience::Men);
//! assert_eq!(details.converted_size(), Some("60"));
//! assert!(details.confidence() < 0.9);
//! ```
//!
//! ## Concurrency
//! A converter is immutable once built. All resolvers are `Send + Sync` and
//! hold no interior mutability, so one instance can be shared across threads
//! without locking.

mod builtin;
pub mod confidence;
pub mod converter;
pub mod error;
pub mod normalize;
pub mod pattern;
pub mod resolver;
pub mod result;
pub mod settings;
pub mod table;
pub mod taxonomy;

pub use converter::{Capabilities, SizeConverter};
pub use error::{ConversionError, Result, SizewiseError};
pub use resolver::SizeResolver;
pub use result::ConversionResult;
pub use settings::Settings;
pub use taxonomy::{Audience, Category, Convention, Sheet};
