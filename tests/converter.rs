mod common;

use std::sync::Arc;
use std::thread;

use common::{converter, init_tracing};
use sizewise::{Audience, Category, ConversionError, Convention, Settings, SizeConverter};

#[test]
fn batch_is_truncated_to_the_limit() {
    let sizes: Vec<String> = (0..150).map(|i| if i % 2 == 0 { "9".to_owned() } else { "bogus".to_owned() }).collect();
    let out = converter().convert_multiple(&sizes, Convention::Us, Convention::Eu, Category::Shoes, Audience::Women);
    assert_eq!(out.len(), 100);
    assert_eq!(out[0].as_deref(), Some("39"));
    assert_eq!(out[1], None);
}

#[test]
fn batch_limit_comes_from_settings() {
    init_tracing();
    let settings = Settings { batch_limit: 3, ..Settings::default() };
    let c = SizeConverter::with_settings(&settings).unwrap();
    let out = c.convert_multiple(&["34", "36", "38", "40"], Convention::Us, Convention::Eu, Category::Clothing, Audience::Men);
    assert_eq!(out, vec![Some("44".to_owned()), Some("46".to_owned()), Some("48".to_owned())]);
}

#[test]
fn capabilities() {
    let caps = converter().describe_capabilities();
    assert_eq!(caps.categories.len(), 13);
    assert_eq!(caps.conventions.len(), 11);
    assert_eq!(caps.audiences.len(), 7);
    assert_eq!(caps.conventions_by_category[&Category::Shoes].len(), 9);
    assert_eq!(caps.conventions_by_category[&Category::Watch], vec![Convention::Us, Convention::Uk, Convention::Eu, Convention::Jp]);
    assert_eq!(caps.conversion_pairs, 432);
    let json = serde_json::to_value(&caps).unwrap();
    assert_eq!(json["conventions_by_category"]["children"], serde_json::json!(["US", "UK", "EU"]));
}

#[test]
fn results_are_deterministic() {
    let c = converter();
    let requests = [
        ("50", Category::Clothing, Audience::Men),
        ("16", Category::Shoes, Audience::Men),
        ("34DDD", Category::Bra, Audience::Women),
        ("nope", Category::Ring, Audience::Unisex),
    ];
    for (size, category, audience) in requests {
        let first = serde_json::to_string(&c.convert_with_details(size, Convention::Us, Convention::Eu, category, audience)).unwrap();
        let fresh = SizeConverter::new();
        let second = serde_json::to_string(&fresh.convert_with_details(size, Convention::Us, Convention::Eu, category, audience)).unwrap();
        assert_eq!(first, second, "{size}");
    }
}

#[test]
fn errors_serialize_with_their_kind() {
    let r = converter().convert_with_details("10", Convention::Us, Convention::Eu, Category::Swimwear, Audience::Unisex);
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["error"]["kind"], "gender_required");
    assert_eq!(json["converted_size"], serde_json::Value::Null);
    assert_eq!(json["from"], "US");
    assert_eq!(json["category"], "swimwear");
}

#[test]
fn shared_across_threads() {
    let shared = Arc::new(SizeConverter::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let c = Arc::clone(&shared);
            thread::spawn(move || c.convert("9", Convention::Us, Convention::Eu, Category::Shoes, Audience::Women))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("39"));
    }
}

#[test]
fn chart_round_trips() {
    let c = converter();
    for size in ["6", "8.5", "11", "14.5"] {
        let eu = c.convert(size, Convention::Us, Convention::Eu, Category::Shoes, Audience::Men).unwrap();
        let back = c.convert(&eu, Convention::Eu, Convention::Us, Category::Shoes, Audience::Men).unwrap();
        assert_eq!(back, size);
    }
}

#[test]
fn category_tags() {
    assert_eq!("Shoes".parse::<Category>(), Ok(Category::Shoes));
    assert_eq!(
        "hovercraft".parse::<Category>(),
        Err(ConversionError::UnsupportedType { name: "hovercraft".to_owned() })
    );
    assert_eq!("inch".parse::<Convention>().unwrap(), Convention::Inch);
    assert!("XX".parse::<Convention>().is_err());
    assert_eq!("toddler".parse::<Audience>().unwrap(), Audience::Toddler);
    assert_eq!(Audience::default(), Audience::Unisex);
}

#[test]
fn error_messages() {
    assert_eq!(
        ConversionError::UnsupportedSystem { convention: Convention::Fr, category: Category::Shoes }.to_string(),
        "FR sizing is not supported for shoes"
    );
    assert_eq!(
        ConversionError::SizeOutOfRange { range: "3 - 14".to_owned() }.to_string(),
        "Size is outside the supported range (3 - 14)"
    );
    assert_eq!(
        ConversionError::AmbiguousSize { suggestions: vec!["9".to_owned(), "10".to_owned()] }.to_string(),
        "Ambiguous size, try one of: 9, 10"
    );
}
