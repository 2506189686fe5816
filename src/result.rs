use serde::{Deserialize, Serialize};

use crate::error::ConversionError;
use crate::taxonomy::{Audience, Category, Convention};

/// Outcome of one conversion. Built once and never changed afterwards; a
/// result either carries a converted size and no error, or an error and no
/// converted size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    original_size: String,
    converted_size: Option<String>,
    from: Convention,
    to: Convention,
    category: Category,
    audience: Audience,
    confidence: f64,
    error: Option<ConversionError>,
    notes: Option<String>,
    suggested_range: Option<String>,
}

/// The request a result answers.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    pub size: &'a str,
    pub from: Convention,
    pub to: Convention,
    pub category: Category,
    pub audience: Audience,
}

impl ConversionResult {
    pub fn converted(request: &Request, size: String, confidence: f64, notes: Option<String>) -> Self {
        Self {
            original_size: request.size.to_owned(),
            converted_size: Some(size),
            from: request.from,
            to: request.to,
            category: request.category,
            audience: request.audience,
            confidence,
            error: None,
            notes,
            suggested_range: None,
        }
    }
    pub fn failed(request: &Request, error: ConversionError) -> Self {
        let suggested_range = match &error {
            ConversionError::SizeOutOfRange { range } => Some(range.clone()),
            _ => None,
        };
        Self {
            original_size: request.size.to_owned(),
            converted_size: None,
            from: request.from,
            to: request.to,
            category: request.category,
            audience: request.audience,
            confidence: 0.0,
            error: Some(error),
            notes: None,
            suggested_range,
        }
    }
    pub fn original_size(&self) -> &str {
        &self.original_size
    }
    pub fn converted_size(&self) -> Option<&str> {
        self.converted_size.as_deref()
    }
    pub fn from_convention(&self) -> Convention {
        self.from
    }
    pub fn to_convention(&self) -> Convention {
        self.to
    }
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn audience(&self) -> Audience {
        self.audience
    }
    pub fn confidence(&self) -> f64 {
        self.confidence
    }
    pub fn error(&self) -> Option<&ConversionError> {
        self.error.as_ref()
    }
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
    pub fn suggested_range(&self) -> Option<&str> {
        self.suggested_range.as_deref()
    }
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
    /// Drops everything but the converted size.
    pub fn into_converted(self) -> Option<String> {
        match self.error {
            None => self.converted_size,
            Some(_) => None,
        }
    }
}
