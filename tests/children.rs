mod common;

use common::converter;
use sizewise::{Audience, Category, ConversionError, Convention};

#[test]
fn infant_months_to_height() {
    let c = converter();
    assert_eq!(c.convert("6-9M", Convention::Us, Convention::Eu, Category::Children, Audience::Infant).as_deref(), Some("74"));
    assert_eq!(c.convert("newborn", Convention::Us, Convention::Eu, Category::Children, Audience::Infant).as_deref(), Some("62"));
}

#[test]
fn child_audience_claims_height_tokens() {
    let c = converter();
    assert_eq!(c.convert("74", Convention::Eu, Convention::Us, Category::Children, Audience::Infant).as_deref(), Some("6-9M"));
    assert_eq!(c.convert("98", Convention::Eu, Convention::Us, Category::Children, Audience::Toddler).as_deref(), Some("3T"));
    assert_eq!(c.convert("140", Convention::Eu, Convention::Us, Category::Children, Audience::Kids).as_deref(), Some("10"));
}

#[test]
fn toddler_and_youth() {
    let c = converter();
    assert_eq!(c.convert("3T", Convention::Us, Convention::Uk, Category::Children, Audience::Toddler).as_deref(), Some("3-4Y"));
    assert_eq!(c.convert("M", Convention::Us, Convention::Eu, Category::Children, Audience::Youth).as_deref(), Some("146"));
    assert_eq!(c.convert("10", Convention::Us, Convention::Eu, Category::Children, Audience::Kids).as_deref(), Some("140"));
}

#[test]
fn garments_for_children_route_to_children_charts() {
    let c = converter();
    let r = c.convert_with_details("3T", Convention::Us, Convention::Eu, Category::Clothing, Audience::Toddler);
    assert_eq!(r.converted_size(), Some("98"));
    assert_eq!(r.category(), Category::Clothing);
    assert_eq!(r.confidence(), 0.9);
    assert!(r.notes().unwrap().contains("Children's sizes"));
    assert_eq!(c.convert("6-9M", Convention::Us, Convention::Uk, Category::Dress, Audience::Infant).as_deref(), Some("6-9M"));
    // swimwear needs no gender once a child bracket is named
    assert_eq!(c.convert("4T", Convention::Us, Convention::Eu, Category::Swimwear, Audience::Toddler).as_deref(), Some("104"));
}

#[test]
fn other_categories_treat_children_as_unisex() {
    let c = converter();
    assert_eq!(c.convert("7", Convention::Us, Convention::Eu, Category::Ring, Audience::Kids).as_deref(), Some("54"));
}

#[test]
fn unknown_shapes() {
    let c = converter();
    let r = c.convert_with_details("Q", Convention::Us, Convention::Eu, Category::Children, Audience::Kids);
    assert!(matches!(r.error(), Some(ConversionError::InvalidFormat { expected: Some(_) })));
    let r = c.convert_with_details("9", Convention::Us, Convention::Eu, Category::Children, Audience::Kids);
    assert_eq!(r.error(), Some(&ConversionError::InvalidSize));
    let r = c.convert_with_details("3T", Convention::Us, Convention::Jp, Category::Children, Audience::Toddler);
    assert!(matches!(r.error(), Some(ConversionError::UnsupportedSystem { convention: Convention::Jp, .. })));
}

#[test]
fn suggestions_come_from_the_scheme() {
    let c = converter();
    assert_eq!(
        c.suggestions("7T", Category::Children, Convention::Us, Audience::Toddler),
        vec!["2T", "3T", "4T", "5T"]
    );
    assert_eq!(
        c.suggestions("??", Category::Children, Convention::Us, Audience::Infant),
        vec!["0-3M", "3-6M", "6-9M", "9-12M", "12-18M"]
    );
    assert!(c.is_valid("12-18m", Category::Children, Convention::Us, Audience::Infant));
    assert!(!c.is_valid("7T", Category::Children, Convention::Us, Audience::Toddler));
    assert!(c.requires_audience(Category::Children));
}
