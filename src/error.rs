use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::taxonomy::{Category, Convention};

/// Why a conversion did not produce a size. Carried by value inside a
/// [`crate::result::ConversionResult`]; the `Display` text is the
/// user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionError {
    #[error("Invalid size format{}", .expected.as_ref().map(|e| format!(", expected {e}")).unwrap_or_default())]
    InvalidFormat { expected: Option<String> },
    #[error("Size not found in the sizing chart")]
    InvalidSize,
    #[error("Unsupported product type: {name}")]
    UnsupportedType { name: String },
    #[error("{convention} sizing is not supported for {category}")]
    UnsupportedSystem { convention: Convention, category: Category },
    #[error("Conversion from {from} to {to} is not supported")]
    UnsupportedConversion { from: Convention, to: Convention },
    #[error("Ambiguous size, try one of: {}", .suggestions.join(", "))]
    AmbiguousSize { suggestions: Vec<String> },
    #[error("Gender must be specified (men or women) for this product type")]
    GenderRequired,
    #[error("Size is outside the supported range ({range})")]
    SizeOutOfRange { range: String },
}

/// Failures outside of a single conversion: loading settings, parsing tags,
/// assembling the reference catalog.
#[derive(Error, Debug)]
pub enum SizewiseError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Unknown {kind} tag: {tag}")]
    UnknownTag { kind: &'static str, tag: String },
    #[error("Reference table error: {0}")]
    Table(String),
}

pub type Result<T> = std::result::Result<T, SizewiseError>;

// Helper conversions
impl From<config::ConfigError> for SizewiseError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
