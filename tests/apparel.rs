mod common;

use common::converter;
use sizewise::{Audience, Category, ConversionError, Convention};

#[test]
fn men_clothing_chart_match() {
    let c = converter();
    assert_eq!(c.convert("38", Convention::Us, Convention::Eu, Category::Clothing, Audience::Men).as_deref(), Some("48"));
    assert_eq!(c.convert("XL", Convention::Us, Convention::Eu, Category::Clothing, Audience::Men).as_deref(), Some("56"));
    assert_eq!(c.convert("extra large", Convention::Us, Convention::It, Category::Clothing, Audience::Men).as_deref(), Some("56"));
    // numeric tokens win over letters on the same reference value
    assert_eq!(c.convert("M", Convention::Us, Convention::Uk, Category::Clothing, Audience::Men).as_deref(), Some("40"));
}

#[test]
fn men_clothing_formula_fallback() {
    let r = converter().convert_with_details("50", Convention::Us, Convention::Eu, Category::Clothing, Audience::Men);
    assert_eq!(r.converted_size(), Some("60"));
    assert_eq!(r.confidence(), 0.85);
    assert!(r.notes().unwrap().contains("EU = US + 10"));
}

#[test]
fn women_clothing_formula_fallback() {
    let r = converter().convert_with_details("18", Convention::Us, Convention::Eu, Category::Clothing, Audience::Women);
    assert_eq!(r.converted_size(), Some("48"));
    assert!(r.notes().unwrap().contains("women's"));
}

#[test]
fn letters_never_use_formulas() {
    let r = converter().convert_with_details("XXXL", Convention::Us, Convention::Eu, Category::Clothing, Audience::Men);
    assert_eq!(r.error(), Some(&ConversionError::SizeOutOfRange { range: "34 - 52".to_owned() }));
    assert_eq!(r.suggested_range(), Some("34 - 52"));
}

#[test]
fn unisex_clothing_reads_the_men_chart() {
    let r = converter().convert_with_details("M", Convention::Us, Convention::Jp, Category::Clothing, Audience::Unisex);
    assert_eq!(r.converted_size(), Some("L"));
    assert!(r.notes().unwrap().contains("Unisex sizing follows the men's chart"));
}

#[test]
fn dress_sizes() {
    let c = converter();
    assert_eq!(c.convert("8", Convention::Us, Convention::Uk, Category::Dress, Audience::Women).as_deref(), Some("12"));
    // dress is always read on the women's chart
    assert_eq!(c.convert("8", Convention::Us, Convention::Fr, Category::Dress, Audience::Men).as_deref(), Some("40"));
    let jp = c.convert_with_details("22", Convention::Us, Convention::Jp, Category::Dress, Audience::Women);
    assert_eq!(jp.converted_size(), Some("25"));
    assert!(jp.notes().unwrap().contains("JP = US + 3"));
    assert!(!c.requires_audience(Category::Dress));
}

#[test]
fn outerwear_sheet_without_a_table() {
    let c = converter();
    assert_eq!(c.convert("40", Convention::Us, Convention::It, Category::Outerwear, Audience::Men).as_deref(), Some("50"));
    let r = c.convert_with_details("8", Convention::Us, Convention::It, Category::Outerwear, Audience::Women);
    assert_eq!(
        r.error(),
        Some(&ConversionError::UnsupportedConversion { from: Convention::Us, to: Convention::It })
    );
}

#[test]
fn outerwear_confidence() {
    let r = converter().convert_with_details("40", Convention::Us, Convention::Uk, Category::Outerwear, Audience::Men);
    assert_eq!(r.converted_size(), Some("40"));
    assert_eq!(r.confidence(), 0.88);
}

#[test]
fn swimwear_requires_gender() {
    let c = converter();
    let r = c.convert_with_details("32", Convention::Us, Convention::Eu, Category::Swimwear, Audience::Unisex);
    assert_eq!(r.error(), Some(&ConversionError::GenderRequired));
    let men = c.convert_with_details("32", Convention::Us, Convention::Eu, Category::Swimwear, Audience::Men);
    assert_eq!(men.converted_size(), Some("48"));
    assert_eq!(men.confidence(), 0.85);
    assert_eq!(c.convert("10", Convention::Us, Convention::Uk, Category::Swimwear, Audience::Women).as_deref(), Some("14"));
    assert!(!c.is_valid("10", Category::Swimwear, Convention::Us, Audience::Unisex));
}

#[test]
fn no_suggestions_without_a_gender_for_swimwear() {
    let c = converter();
    assert!(c.suggestions("10", Category::Swimwear, Convention::Us, Audience::Unisex).is_empty());
    assert!(c.suggestions("M", Category::Swimwear, Convention::Us, Audience::Unisex).is_empty());
    assert_eq!(c.suggestions("10", Category::Swimwear, Convention::Us, Audience::Women), vec!["10", "8", "12"]);
}

#[test]
fn suggestions_for_letters_and_numbers() {
    let c = converter();
    assert_eq!(c.suggestions("41", Category::Clothing, Convention::Us, Audience::Men), vec!["40", "42", "38"]);
    assert_eq!(c.suggestions("huge", Category::Clothing, Convention::Us, Audience::Men), vec!["34", "XS", "36", "S", "38"]);
}
