//! Turns a raw size string into its canonical token.
//!
//! The steps run in a fixed order: trim, upper-case, rewrite the known
//! ASCII fractions into decimal suffixes, and finally swap a whole-string
//! synonym for its abbreviation. Normalizing a canonical token returns it
//! unchanged.

/// Fraction spellings and their decimal suffix, applied in this order.
const FRACTIONS: [(&str, &str); 4] = [(" 1/2", ".5"), ("-1/2", ".5"), (" 3/4", ".75"), (" 1/4", ".25")];

/// Long-form size words. Only a whole-string match is substituted and the
/// first matching row wins, so the rows are scanned in the order written.
const SYNONYMS: [(&str, &str); 16] = [
    ("EXTRA EXTRA SMALL", "XXS"),
    ("EXTRA SMALL", "XS"),
    ("SMALL", "S"),
    ("MEDIUM", "M"),
    ("LARGE", "L"),
    ("EXTRA LARGE", "XL"),
    ("X-LARGE", "XL"),
    ("EXTRA EXTRA LARGE", "XXL"),
    ("XX-LARGE", "XXL"),
    ("2XL", "XXL"),
    ("XXX-LARGE", "XXXL"),
    ("3XL", "XXXL"),
    ("X-SMALL", "XS"),
    ("XX-SMALL", "XXS"),
    ("NEWBORN", "0-3M"),
    ("ONE SIZE", "OS"),
];

/// Canonical form of a size token. Never fails.
pub fn normalize(raw: &str) -> String {
    let mut token = raw.trim().to_uppercase();
    for (fraction, decimal) in FRACTIONS {
        if token.contains(fraction) {
            token = token.replace(fraction, decimal);
        }
    }
    SYNONYMS
        .iter()
        .find(|(long, _)| *long == token)
        .map(|(_, short)| short.to_string())
        .unwrap_or(token)
}

/// Numeric value of a token, if it is a plain decimal numeral.
pub fn numeric(token: &str) -> Option<f64> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    token.parse::<f64>().ok()
}

/// Renders a computed size the way charts print them: at most one decimal,
/// no trailing `.0`.
pub fn format_size(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_upper_cases() {
        assert_eq!(normalize("  34b "), "34B");
        assert_eq!(normalize("xl"), "XL");
    }

    #[test]
    fn rewrites_fractions() {
        assert_eq!(normalize("9 1/2"), "9.5");
        assert_eq!(normalize("9-1/2"), "9.5");
        assert_eq!(normalize("6 3/4"), "6.75");
        assert_eq!(normalize("7 1/4"), "7.25");
        // eighths are left for the hat grammar
        assert_eq!(normalize("7 1/8"), "7 1/8");
    }

    #[test]
    fn synonyms_only_on_whole_string() {
        assert_eq!(normalize("extra large"), "XL");
        assert_eq!(normalize("Medium"), "M");
        assert_eq!(normalize("large-ish"), "LARGE-ISH");
        assert_eq!(normalize("2xl"), "XXL");
    }

    #[test]
    fn idempotent() {
        for raw in ["9 1/2", " extra small", "34ddd", "7 3/8", "12-18m", "42mm"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "{raw}");
        }
    }

    #[test]
    fn numeric_tokens() {
        assert_eq!(numeric("9.5"), Some(9.5));
        assert_eq!(numeric("XL"), None);
        assert_eq!(numeric("-3"), None);
        assert_eq!(numeric(""), None);
    }

    #[test]
    fn formats_sizes() {
        assert_eq!(format_size(50.5), "50.5");
        assert_eq!(format_size(60.0), "60");
        assert_eq!(format_size(116.84), "116.8");
    }
}
