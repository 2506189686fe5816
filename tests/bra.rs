mod common;

use common::converter;
use sizewise::{Audience, Category, ConversionError, Convention};

#[test]
fn band_and_cup_convert_separately() {
    let c = converter();
    assert_eq!(c.convert("34B", Convention::Us, Convention::Eu, Category::Bra, Audience::Women).as_deref(), Some("75B"));
    assert_eq!(c.convert("34b", Convention::Us, Convention::Fr, Category::Bra, Audience::Women).as_deref(), Some("90B"));
    assert_eq!(c.convert("36DD", Convention::Us, Convention::Au, Category::Bra, Audience::Women).as_deref(), Some("14DD"));
}

#[test]
fn cup_letters_diverge_past_dd() {
    let c = converter();
    assert_eq!(c.convert("34DDD", Convention::Us, Convention::Uk, Category::Bra, Audience::Women).as_deref(), Some("34E"));
    assert_eq!(c.convert("34E", Convention::Uk, Convention::Eu, Category::Bra, Audience::Women).as_deref(), Some("75F"));
}

#[test]
fn result_records_women() {
    let r = converter().convert_with_details("34B", Convention::Us, Convention::Eu, Category::Bra, Audience::Unisex);
    assert_eq!(r.audience(), Audience::Women);
    assert_eq!(r.confidence(), 0.9);
    assert!(r.notes().unwrap().contains("sister sizes"));
}

#[test]
fn malformed_sizes() {
    let c = converter();
    let r = c.convert_with_details("B34", Convention::Us, Convention::Eu, Category::Bra, Audience::Women);
    assert!(matches!(r.error(), Some(ConversionError::InvalidFormat { expected: Some(_) })));
    assert!(r.error().unwrap().to_string().contains("34B"));

    let r = c.convert_with_details("34Z", Convention::Us, Convention::Eu, Category::Bra, Audience::Women);
    assert!(matches!(r.error(), Some(ConversionError::InvalidFormat { .. })));

    // well formed, but no 27 band anywhere
    let r = c.convert_with_details("27B", Convention::Us, Convention::Eu, Category::Bra, Audience::Women);
    assert_eq!(r.error(), Some(&ConversionError::InvalidSize));
}

#[test]
fn target_without_matching_band() {
    let r = converter().convert_with_details("48B", Convention::Us, Convention::Uk, Category::Bra, Audience::Women);
    assert_eq!(r.error(), Some(&ConversionError::InvalidSize));
}

#[test]
fn identity_keeps_the_size() {
    let r = converter().convert_with_details(" 34 b ", Convention::Us, Convention::Us, Category::Bra, Audience::Women);
    assert_eq!(r.converted_size(), Some("34B"));
    assert_eq!(r.confidence(), 1.0);
}

#[test]
fn sister_sizes() {
    let c = converter();
    assert_eq!(c.suggestions("34B", Category::Bra, Convention::Us, Audience::Women), vec!["32C", "36A"]);
    // no cup below A
    assert_eq!(c.suggestions("34A", Category::Bra, Convention::Us, Audience::Women), vec!["32B"]);
    assert!(c.is_valid("34DD", Category::Bra, Convention::Us, Audience::Women));
    assert!(!c.is_valid("34DD", Category::Bra, Convention::Eu, Audience::Women));
    assert!(!c.requires_audience(Category::Bra));
}
