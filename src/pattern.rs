//! Size grammars: does a normalized token even look like a size of a
//! category? Used for early rejection and, for bras and children's sizes,
//! to pick apart or classify the token.

use lazy_static::lazy_static;
use regex::Regex;

use crate::taxonomy::{Category, Sheet};

lazy_static! {
    static ref NUMERAL: Regex = Regex::new(r"^\d{1,3}(\.\d{1,2})?$").unwrap();
    static ref LETTER_SIZE: Regex = Regex::new(r"^(X{0,3}S|M|X{0,3}L|LL|[3-5]L|OS)$").unwrap();
    static ref RANGE: Regex = Regex::new(r"^(\d{1,2}(?:\.\d)?)\s*-\s*(\d{1,2}(?:\.\d)?)$").unwrap();
    static ref BRA: Regex = Regex::new(r"^(\d{1,3})\s*([A-K]{1,3})$").unwrap();
    static ref RING_LETTER: Regex = Regex::new(r"^[A-Z]$").unwrap();
    static ref HAT_EIGHTHS: Regex = Regex::new(r"^\d \d/8$").unwrap();
    static ref WATCH: Regex = Regex::new(r"^\d{2}(\.\d)?$").unwrap();
    static ref INFANT: Regex = Regex::new(r"^\d{1,2}-\d{1,2}M$").unwrap();
    static ref TODDLER: Regex = Regex::new(r"^(\d{1,2}T|\d{1,2}-\d{1,2}Y)$").unwrap();
    static ref YOUTH: Regex = Regex::new(r"^X{0,2}[SML]$").unwrap();
    static ref KIDS: Regex = Regex::new(r"^\d{1,3}$").unwrap();
}

/// Children's schemes in the order they are tried.
pub const CHILD_SCHEMES: [Sheet; 4] = [Sheet::Infant, Sheet::Toddler, Sheet::Youth, Sheet::Kids];

/// True if `token` fits one of the grammars declared for `category`.
pub fn matches(token: &str, category: Category) -> bool {
    match category {
        Category::Shoes | Category::Socks => NUMERAL.is_match(token),
        Category::Clothing | Category::Outerwear | Category::Swimwear | Category::Glove | Category::Belt => {
            NUMERAL.is_match(token) || LETTER_SIZE.is_match(token)
        }
        Category::Dress => NUMERAL.is_match(token),
        Category::Bra => BRA.is_match(token),
        Category::Ring => NUMERAL.is_match(token) || RING_LETTER.is_match(token),
        Category::Hat => NUMERAL.is_match(token) || HAT_EIGHTHS.is_match(token) || LETTER_SIZE.is_match(token),
        Category::Watch => WATCH.is_match(token) || LETTER_SIZE.is_match(token),
        Category::Children => child_scheme(token).is_some(),
    }
}

/// Splits a bra size into band digits and cup letters.
pub fn bra_parts(token: &str) -> Option<(&str, &str)> {
    let captures = BRA.captures(token)?;
    Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
}

/// Endpoints of a range token such as `9-10`.
pub fn range_parts(token: &str) -> Option<(&str, &str)> {
    let captures = RANGE.captures(token)?;
    Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
}

/// The first children's scheme whose grammar accepts the token.
pub fn child_scheme(token: &str) -> Option<Sheet> {
    CHILD_SCHEMES.into_iter().find(|scheme| child_matches(token, *scheme))
}

pub fn child_matches(token: &str, scheme: Sheet) -> bool {
    match scheme {
        Sheet::Infant => INFANT.is_match(token),
        Sheet::Toddler => TODDLER.is_match(token),
        Sheet::Youth => YOUTH.is_match(token),
        Sheet::Kids => KIDS.is_match(token),
        _ => false,
    }
}

/// What a well formed size of the category looks like, for error messages.
pub fn expected_format(category: Category) -> &'static str {
    match category {
        Category::Bra => "band + cup, e.g. 34B",
        Category::Children => "age in months (6-9M), toddler (3T), numeric (10) or letter (M)",
        Category::Hat => "numeric with optional eighths, e.g. 7 1/8",
        Category::Ring => "numeric (7.5) or a single letter (N)",
        Category::Watch => "case diameter in mm, e.g. 42mm",
        _ => "numeric or letter size",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footwear_is_decimal() {
        assert!(matches("9", Category::Shoes));
        assert!(matches("9.5", Category::Shoes));
        assert!(!matches("INVALID", Category::Shoes));
        assert!(!matches("9-10", Category::Shoes));
    }

    #[test]
    fn bra_band_and_cup() {
        assert_eq!(bra_parts("34B"), Some(("34", "B")));
        assert_eq!(bra_parts("100DDD"), Some(("100", "DDD")));
        assert_eq!(bra_parts("34Z"), None);
        assert_eq!(bra_parts("B34"), None);
        assert!(!matches("34DDDD", Category::Bra));
    }

    #[test]
    fn ring_and_hat() {
        assert!(matches("N", Category::Ring));
        assert!(matches("7.5", Category::Ring));
        assert!(!matches("NN", Category::Ring));
        assert!(matches("7 1/8", Category::Hat));
        assert!(matches("7.25", Category::Hat));
        assert!(!matches("7 1/3", Category::Hat));
    }

    #[test]
    fn children_schemes_in_order() {
        assert_eq!(child_scheme("6-9M"), Some(Sheet::Infant));
        assert_eq!(child_scheme("3T"), Some(Sheet::Toddler));
        assert_eq!(child_scheme("2-3Y"), Some(Sheet::Toddler));
        assert_eq!(child_scheme("M"), Some(Sheet::Youth));
        assert_eq!(child_scheme("10"), Some(Sheet::Kids));
        assert_eq!(child_scheme("Q"), None);
    }

    #[test]
    fn ranges() {
        assert_eq!(range_parts("9-10"), Some(("9", "10")));
        assert_eq!(range_parts("9.5 - 11"), Some(("9.5", "11")));
        assert_eq!(range_parts("10"), None);
    }
}
