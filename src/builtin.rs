//! Reference charts shipped with the crate.
//!
//! Each table maps a convention's size token to the category's reference
//! value. Within one category and sheet every convention is expressed on
//! the same reference scale, so equal physical sizes carry equal values.
//! Tables can be replaced from configuration, see [`crate::settings`].

use crate::taxonomy::{Category, Convention, Sheet};

type Chart = &'static [(&'static str, f64)];

// footwear, men: reference is the men's US size
const SHOES_MEN_US: Chart = &[
    ("6", 6.0), ("6.5", 6.5), ("7", 7.0), ("7.5", 7.5), ("8", 8.0), ("8.5", 8.5), ("9", 9.0),
    ("9.5", 9.5), ("10", 10.0), ("10.5", 10.5), ("11", 11.0), ("11.5", 11.5), ("12", 12.0),
    ("12.5", 12.5), ("13", 13.0), ("13.5", 13.5), ("14", 14.0), ("14.5", 14.5), ("15", 15.0),
    ("16", 16.0),
];

const SHOES_MEN_UK: Chart = &[
    ("5.5", 6.0), ("6", 6.5), ("6.5", 7.0), ("7", 7.5), ("7.5", 8.0), ("8", 8.5), ("8.5", 9.0),
    ("9", 9.5), ("9.5", 10.0), ("10", 10.5), ("10.5", 11.0), ("11", 11.5), ("11.5", 12.0),
    ("12", 12.5), ("12.5", 13.0), ("13", 13.5), ("13.5", 14.0), ("14", 14.5), ("14.5", 15.0),
];

const SHOES_MEN_AU: Chart = &[
    ("5.5", 6.0), ("6", 6.5), ("6.5", 7.0), ("7", 7.5), ("7.5", 8.0), ("8", 8.5), ("8.5", 9.0),
    ("9", 9.5), ("9.5", 10.0), ("10", 10.5), ("10.5", 11.0), ("11", 11.5), ("11.5", 12.0),
    ("12", 12.5), ("12.5", 13.0), ("13", 13.5), ("13.5", 14.0), ("14", 14.5), ("14.5", 15.0),
];

const SHOES_MEN_EU: Chart = &[
    ("39", 6.0), ("39.5", 6.5), ("40", 7.0), ("40.5", 7.5), ("41", 8.0), ("42", 8.5),
    ("42.5", 9.0), ("43", 9.5), ("44", 10.0), ("44.5", 10.5), ("45", 11.0), ("45.5", 11.5),
    ("46", 12.0), ("47", 12.5), ("47.5", 13.0), ("48", 13.5), ("48.5", 14.0), ("49", 14.5),
    ("49.5", 15.0),
];

const SHOES_MEN_BR: Chart = &[
    ("37", 6.0), ("37.5", 6.5), ("38", 7.0), ("38.5", 7.5), ("39", 8.0), ("40", 8.5),
    ("40.5", 9.0), ("41", 9.5), ("42", 10.0), ("42.5", 10.5), ("43", 11.0), ("43.5", 11.5),
    ("44", 12.0), ("45", 12.5), ("45.5", 13.0), ("46", 13.5), ("46.5", 14.0), ("47", 14.5),
    ("47.5", 15.0),
];

const SHOES_MEN_MX: Chart = &[
    ("4.5", 6.0), ("5", 6.5), ("5.5", 7.0), ("6", 7.5), ("6.5", 8.0), ("7", 8.5), ("7.5", 9.0),
    ("8", 9.5), ("8.5", 10.0), ("9", 10.5), ("9.5", 11.0), ("10", 11.5), ("10.5", 12.0),
    ("11", 12.5), ("11.5", 13.0), ("12", 13.5), ("12.5", 14.0), ("13", 14.5), ("13.5", 15.0),
];

const SHOES_MEN_JP: Chart = &[
    ("24", 6.0), ("24.5", 6.5), ("25", 7.0), ("25.5", 7.5), ("26", 8.0), ("26.5", 8.5),
    ("27", 9.0), ("27.5", 9.5), ("28", 10.0), ("28.5", 10.5), ("29", 11.0), ("29.5", 11.5),
    ("30", 12.0), ("30.5", 12.5), ("31", 13.0), ("31.5", 13.5), ("32", 14.0), ("32.5", 14.5),
    ("33", 15.0),
];

const SHOES_MEN_CM: Chart = &[
    ("24", 6.0), ("24.5", 6.5), ("25", 7.0), ("25.5", 7.5), ("26", 8.0), ("26.5", 8.5),
    ("27", 9.0), ("27.5", 9.5), ("28", 10.0), ("28.5", 10.5), ("29", 11.0), ("29.5", 11.5),
    ("30", 12.0), ("30.5", 12.5), ("31", 13.0), ("31.5", 13.5), ("32", 14.0), ("32.5", 14.5),
    ("33", 15.0),
];

const SHOES_MEN_INCH: Chart = &[
    ("9.45", 6.0), ("9.65", 6.5), ("9.84", 7.0), ("10.04", 7.5), ("10.24", 8.0), ("10.43", 8.5),
    ("10.63", 9.0), ("10.83", 9.5), ("11.02", 10.0), ("11.22", 10.5), ("11.42", 11.0),
    ("11.61", 11.5), ("11.81", 12.0), ("12.01", 12.5), ("12.2", 13.0), ("12.4", 13.5),
    ("12.6", 14.0), ("12.8", 14.5), ("12.99", 15.0),
];

// footwear, women: reference is the women's US size
const SHOES_WOMEN_US: Chart = &[
    ("4", 4.0), ("4.5", 4.5), ("5", 5.0), ("5.5", 5.5), ("6", 6.0), ("6.5", 6.5), ("7", 7.0),
    ("7.5", 7.5), ("8", 8.0), ("8.5", 8.5), ("9", 9.0), ("9.5", 9.5), ("10", 10.0),
    ("10.5", 10.5), ("11", 11.0), ("11.5", 11.5), ("12", 12.0), ("13", 13.0),
];

const SHOES_WOMEN_UK: Chart = &[
    ("2", 4.0), ("2.5", 4.5), ("3", 5.0), ("3.5", 5.5), ("4", 6.0), ("4.5", 6.5), ("5", 7.0),
    ("5.5", 7.5), ("6", 8.0), ("6.5", 8.5), ("7", 9.0), ("7.5", 9.5), ("8", 10.0),
    ("8.5", 10.5), ("9", 11.0), ("9.5", 11.5), ("10", 12.0),
];

const SHOES_WOMEN_AU: Chart = &[
    ("2.5", 4.0), ("3", 4.5), ("3.5", 5.0), ("4", 5.5), ("4.5", 6.0), ("5", 6.5), ("5.5", 7.0),
    ("6", 7.5), ("6.5", 8.0), ("7", 8.5), ("7.5", 9.0), ("8", 9.5), ("8.5", 10.0), ("9", 10.5),
    ("9.5", 11.0), ("10", 11.5), ("10.5", 12.0),
];

const SHOES_WOMEN_EU: Chart = &[
    ("34", 4.0), ("34.5", 4.5), ("35", 5.0), ("35.5", 5.5), ("36", 6.0), ("36.5", 6.5),
    ("37", 7.0), ("37.5", 7.5), ("38", 8.0), ("38.5", 8.5), ("39", 9.0), ("39.5", 9.5),
    ("40", 10.0), ("40.5", 10.5), ("41", 11.0), ("41.5", 11.5), ("42", 12.0),
];

const SHOES_WOMEN_BR: Chart = &[
    ("32", 4.0), ("32.5", 4.5), ("33", 5.0), ("33.5", 5.5), ("34", 6.0), ("34.5", 6.5),
    ("35", 7.0), ("35.5", 7.5), ("36", 8.0), ("36.5", 8.5), ("37", 9.0), ("37.5", 9.5),
    ("38", 10.0), ("38.5", 10.5), ("39", 11.0), ("39.5", 11.5), ("40", 12.0),
];

const SHOES_WOMEN_MX: Chart = &[
    ("1.5", 4.0), ("2", 4.5), ("2.5", 5.0), ("3", 5.5), ("3.5", 6.0), ("4", 6.5), ("4.5", 7.0),
    ("5", 7.5), ("5.5", 8.0), ("6", 8.5), ("6.5", 9.0), ("7", 9.5), ("7.5", 10.0), ("8", 10.5),
    ("8.5", 11.0), ("9", 11.5), ("9.5", 12.0),
];

const SHOES_WOMEN_JP: Chart = &[
    ("21", 4.0), ("21.5", 4.5), ("22", 5.0), ("22.5", 5.5), ("23", 6.0), ("23.5", 6.5),
    ("24", 7.0), ("24.5", 7.5), ("25", 8.0), ("25.5", 8.5), ("26", 9.0), ("26.5", 9.5),
    ("27", 10.0), ("27.5", 10.5), ("28", 11.0), ("28.5", 11.5), ("29", 12.0),
];

const SHOES_WOMEN_CM: Chart = &[
    ("21", 4.0), ("21.5", 4.5), ("22", 5.0), ("22.5", 5.5), ("23", 6.0), ("23.5", 6.5),
    ("24", 7.0), ("24.5", 7.5), ("25", 8.0), ("25.5", 8.5), ("26", 9.0), ("26.5", 9.5),
    ("27", 10.0), ("27.5", 10.5), ("28", 11.0), ("28.5", 11.5), ("29", 12.0),
];

const SHOES_WOMEN_INCH: Chart = &[
    ("8.27", 4.0), ("8.46", 4.5), ("8.66", 5.0), ("8.86", 5.5), ("9.06", 6.0), ("9.25", 6.5),
    ("9.45", 7.0), ("9.65", 7.5), ("9.84", 8.0), ("10.04", 8.5), ("10.24", 9.0), ("10.43", 9.5),
    ("10.63", 10.0), ("10.83", 10.5), ("11.02", 11.0), ("11.22", 11.5), ("11.42", 12.0),
];

// general apparel, men: reference is the men's US chest size
const CLOTHING_MEN_US: Chart = &[
    ("34", 34.0), ("36", 36.0), ("38", 38.0), ("40", 40.0), ("42", 42.0), ("44", 44.0),
    ("46", 46.0), ("48", 48.0), ("50", 50.0), ("52", 52.0), ("XS", 34.0), ("S", 36.0),
    ("M", 40.0), ("L", 42.0), ("XL", 46.0), ("XXL", 48.0), ("XXXL", 50.0),
];

const CLOTHING_MEN_UK: Chart = &[
    ("34", 34.0), ("36", 36.0), ("38", 38.0), ("40", 40.0), ("42", 42.0), ("44", 44.0),
    ("46", 46.0), ("48", 48.0), ("XS", 34.0), ("S", 36.0), ("M", 40.0), ("L", 42.0),
    ("XL", 46.0), ("XXL", 48.0), ("XXXL", 50.0),
];

const CLOTHING_MEN_AU: Chart = &[
    ("34", 34.0), ("36", 36.0), ("38", 38.0), ("40", 40.0), ("42", 42.0), ("44", 44.0),
    ("46", 46.0), ("48", 48.0),
];

const CLOTHING_MEN_EU: Chart = &[
    ("44", 34.0), ("46", 36.0), ("48", 38.0), ("50", 40.0), ("52", 42.0), ("54", 44.0),
    ("56", 46.0), ("58", 48.0),
];

const CLOTHING_MEN_FR: Chart = &[
    ("44", 34.0), ("46", 36.0), ("48", 38.0), ("50", 40.0), ("52", 42.0), ("54", 44.0),
    ("56", 46.0), ("58", 48.0),
];

const CLOTHING_MEN_IT: Chart = &[
    ("44", 34.0), ("46", 36.0), ("48", 38.0), ("50", 40.0), ("52", 42.0), ("54", 44.0),
    ("56", 46.0), ("58", 48.0),
];

const CLOTHING_MEN_JP: Chart = &[
    ("S", 36.0), ("M", 38.0), ("L", 40.0), ("LL", 42.0), ("3L", 44.0), ("4L", 46.0),
];

// general apparel, women: reference is the women's US size
const CLOTHING_WOMEN_US: Chart = &[
    ("0", 0.0), ("2", 2.0), ("4", 4.0), ("6", 6.0), ("8", 8.0), ("10", 10.0), ("12", 12.0),
    ("14", 14.0), ("16", 16.0), ("18", 18.0), ("20", 20.0), ("XXS", 0.0), ("XS", 2.0),
    ("S", 6.0), ("M", 10.0), ("L", 14.0), ("XL", 18.0),
];

const CLOTHING_WOMEN_UK: Chart = &[
    ("4", 0.0), ("6", 2.0), ("8", 4.0), ("10", 6.0), ("12", 8.0), ("14", 10.0), ("16", 12.0),
    ("18", 14.0), ("20", 16.0), ("XXS", 0.0), ("XS", 2.0), ("S", 6.0), ("M", 10.0), ("L", 14.0),
];

const CLOTHING_WOMEN_AU: Chart = &[
    ("4", 0.0), ("6", 2.0), ("8", 4.0), ("10", 6.0), ("12", 8.0), ("14", 10.0), ("16", 12.0),
    ("18", 14.0), ("20", 16.0),
];

const CLOTHING_WOMEN_EU: Chart = &[
    ("30", 0.0), ("32", 2.0), ("34", 4.0), ("36", 6.0), ("38", 8.0), ("40", 10.0), ("42", 12.0),
    ("44", 14.0), ("46", 16.0),
];

const CLOTHING_WOMEN_FR: Chart = &[
    ("32", 0.0), ("34", 2.0), ("36", 4.0), ("38", 6.0), ("40", 8.0), ("42", 10.0), ("44", 12.0),
    ("46", 14.0), ("48", 16.0),
];

const CLOTHING_WOMEN_IT: Chart = &[
    ("36", 0.0), ("38", 2.0), ("40", 4.0), ("42", 6.0), ("44", 8.0), ("46", 10.0), ("48", 12.0),
    ("50", 14.0), ("52", 16.0),
];

const CLOTHING_WOMEN_JP: Chart = &[
    ("3", 0.0), ("5", 2.0), ("7", 4.0), ("9", 6.0), ("11", 8.0), ("13", 10.0), ("15", 12.0),
    ("17", 14.0), ("19", 16.0),
];

// dresses: reference is the women's US dress size
const DRESS_US: Chart = &[
    ("0", 0.0), ("2", 2.0), ("4", 4.0), ("6", 6.0), ("8", 8.0), ("10", 10.0), ("12", 12.0),
    ("14", 14.0), ("16", 16.0), ("18", 18.0), ("20", 20.0), ("22", 22.0), ("24", 24.0),
];

const DRESS_UK: Chart = &[
    ("4", 0.0), ("6", 2.0), ("8", 4.0), ("10", 6.0), ("12", 8.0), ("14", 10.0), ("16", 12.0),
    ("18", 14.0), ("20", 16.0), ("22", 18.0), ("24", 20.0),
];

const DRESS_AU: Chart = &[
    ("4", 0.0), ("6", 2.0), ("8", 4.0), ("10", 6.0), ("12", 8.0), ("14", 10.0), ("16", 12.0),
    ("18", 14.0), ("20", 16.0), ("22", 18.0), ("24", 20.0),
];

const DRESS_EU: Chart = &[
    ("30", 0.0), ("32", 2.0), ("34", 4.0), ("36", 6.0), ("38", 8.0), ("40", 10.0), ("42", 12.0),
    ("44", 14.0), ("46", 16.0), ("48", 18.0), ("50", 20.0),
];

const DRESS_FR: Chart = &[
    ("32", 0.0), ("34", 2.0), ("36", 4.0), ("38", 6.0), ("40", 8.0), ("42", 10.0), ("44", 12.0),
    ("46", 14.0), ("48", 16.0), ("50", 18.0), ("52", 20.0),
];

const DRESS_IT: Chart = &[
    ("36", 0.0), ("38", 2.0), ("40", 4.0), ("42", 6.0), ("44", 8.0), ("46", 10.0), ("48", 12.0),
    ("50", 14.0), ("52", 16.0), ("54", 18.0), ("56", 20.0),
];

const DRESS_JP: Chart = &[
    ("3", 0.0), ("5", 2.0), ("7", 4.0), ("9", 6.0), ("11", 8.0), ("13", 10.0), ("15", 12.0),
    ("17", 14.0), ("19", 16.0),
];

// outerwear, men: reference is the men's US chest size
const OUTERWEAR_MEN_US: Chart = &[
    ("34", 34.0), ("36", 36.0), ("38", 38.0), ("40", 40.0), ("42", 42.0), ("44", 44.0),
    ("46", 46.0), ("48", 48.0), ("50", 50.0), ("52", 52.0), ("54", 54.0), ("S", 36.0),
    ("M", 40.0), ("L", 44.0), ("XL", 48.0), ("XXL", 52.0),
];

const OUTERWEAR_MEN_UK: Chart = &[
    ("34", 34.0), ("36", 36.0), ("38", 38.0), ("40", 40.0), ("42", 42.0), ("44", 44.0),
    ("46", 46.0), ("48", 48.0), ("50", 50.0),
];

const OUTERWEAR_MEN_EU: Chart = &[
    ("44", 34.0), ("46", 36.0), ("48", 38.0), ("50", 40.0), ("52", 42.0), ("54", 44.0),
    ("56", 46.0), ("58", 48.0), ("60", 50.0),
];

const OUTERWEAR_MEN_IT: Chart = &[
    ("44", 34.0), ("46", 36.0), ("48", 38.0), ("50", 40.0), ("52", 42.0), ("54", 44.0),
    ("56", 46.0), ("58", 48.0), ("60", 50.0),
];

const OUTERWEAR_MEN_JP: Chart = &[
    ("S", 36.0), ("M", 38.0), ("L", 40.0), ("LL", 42.0), ("3L", 44.0),
];

// outerwear, women: reference is the women's US size
const OUTERWEAR_WOMEN_US: Chart = &[
    ("0", 0.0), ("2", 2.0), ("4", 4.0), ("6", 6.0), ("8", 8.0), ("10", 10.0), ("12", 12.0),
    ("14", 14.0), ("16", 16.0), ("18", 18.0), ("XS", 2.0), ("S", 6.0), ("M", 10.0), ("L", 14.0),
    ("XL", 18.0),
];

const OUTERWEAR_WOMEN_UK: Chart = &[
    ("4", 0.0), ("6", 2.0), ("8", 4.0), ("10", 6.0), ("12", 8.0), ("14", 10.0), ("16", 12.0),
    ("18", 14.0), ("20", 16.0),
];

const OUTERWEAR_WOMEN_EU: Chart = &[
    ("30", 0.0), ("32", 2.0), ("34", 4.0), ("36", 6.0), ("38", 8.0), ("40", 10.0), ("42", 12.0),
    ("44", 14.0), ("46", 16.0),
];

const OUTERWEAR_WOMEN_FR: Chart = &[
    ("32", 0.0), ("34", 2.0), ("36", 4.0), ("38", 6.0), ("40", 8.0), ("42", 10.0), ("44", 12.0),
    ("46", 14.0), ("48", 16.0),
];

// swimwear, men: reference is the waist in inches
const SWIM_MEN_US: Chart = &[
    ("28", 28.0), ("30", 30.0), ("32", 32.0), ("34", 34.0), ("36", 36.0), ("38", 38.0),
    ("40", 40.0), ("42", 42.0), ("S", 30.0), ("M", 32.0), ("L", 34.0), ("XL", 38.0),
    ("XXL", 40.0),
];

const SWIM_MEN_UK: Chart = &[
    ("28", 28.0), ("30", 30.0), ("32", 32.0), ("34", 34.0), ("36", 36.0), ("38", 38.0),
    ("40", 40.0),
];

const SWIM_MEN_AU: Chart = &[
    ("28", 28.0), ("30", 30.0), ("32", 32.0), ("34", 34.0), ("36", 36.0), ("38", 38.0),
    ("40", 40.0),
];

const SWIM_MEN_EU: Chart = &[
    ("44", 28.0), ("46", 30.0), ("48", 32.0), ("50", 34.0), ("52", 36.0), ("54", 38.0),
    ("56", 40.0),
];

// swimwear, women: reference is the women's US size
const SWIM_WOMEN_US: Chart = &[
    ("2", 2.0), ("4", 4.0), ("6", 6.0), ("8", 8.0), ("10", 10.0), ("12", 12.0), ("14", 14.0),
    ("16", 16.0), ("18", 18.0), ("XS", 2.0), ("S", 6.0), ("M", 10.0), ("L", 14.0), ("XL", 18.0),
];

const SWIM_WOMEN_UK: Chart = &[
    ("6", 2.0), ("8", 4.0), ("10", 6.0), ("12", 8.0), ("14", 10.0), ("16", 12.0), ("18", 14.0),
    ("20", 16.0),
];

const SWIM_WOMEN_AU: Chart = &[
    ("6", 2.0), ("8", 4.0), ("10", 6.0), ("12", 8.0), ("14", 10.0), ("16", 12.0), ("18", 14.0),
    ("20", 16.0),
];

const SWIM_WOMEN_EU: Chart = &[
    ("34", 2.0), ("36", 4.0), ("38", 6.0), ("40", 8.0), ("42", 10.0), ("44", 12.0),
    ("46", 14.0), ("48", 16.0),
];

// bra bands: reference is the US band
const BRA_BAND_US: Chart = &[
    ("28", 28.0), ("30", 30.0), ("32", 32.0), ("34", 34.0), ("36", 36.0), ("38", 38.0),
    ("40", 40.0), ("42", 42.0), ("44", 44.0), ("46", 46.0), ("48", 48.0),
];

const BRA_BAND_UK: Chart = &[
    ("28", 28.0), ("30", 30.0), ("32", 32.0), ("34", 34.0), ("36", 36.0), ("38", 38.0),
    ("40", 40.0), ("42", 42.0), ("44", 44.0), ("46", 46.0),
];

const BRA_BAND_AU: Chart = &[
    ("6", 28.0), ("8", 30.0), ("10", 32.0), ("12", 34.0), ("14", 36.0), ("16", 38.0),
    ("18", 40.0), ("20", 42.0), ("22", 44.0), ("24", 46.0),
];

const BRA_BAND_EU: Chart = &[
    ("60", 28.0), ("65", 30.0), ("70", 32.0), ("75", 34.0), ("80", 36.0), ("85", 38.0),
    ("90", 40.0), ("95", 42.0), ("100", 44.0), ("105", 46.0),
];

const BRA_BAND_FR: Chart = &[
    ("75", 28.0), ("80", 30.0), ("85", 32.0), ("90", 34.0), ("95", 36.0), ("100", 38.0),
    ("105", 40.0), ("110", 42.0), ("115", 44.0), ("120", 46.0),
];

const BRA_BAND_IT: Chart = &[
    ("0", 28.0), ("1", 30.0), ("2", 32.0), ("3", 34.0), ("4", 36.0), ("5", 38.0), ("6", 40.0),
    ("7", 42.0), ("8", 44.0), ("9", 46.0),
];

const BRA_BAND_JP: Chart = &[
    ("60", 28.0), ("65", 30.0), ("70", 32.0), ("75", 34.0), ("80", 36.0), ("85", 38.0),
    ("90", 40.0), ("95", 42.0), ("100", 44.0), ("105", 46.0),
];

// bra cups: reference is the cup step above A
const BRA_CUP_US: Chart = &[
    ("A", 1.0), ("B", 2.0), ("C", 3.0), ("D", 4.0), ("DD", 5.0), ("DDD", 6.0), ("G", 7.0),
    ("H", 8.0), ("I", 9.0), ("J", 10.0), ("K", 11.0),
];

const BRA_CUP_UK: Chart = &[
    ("A", 1.0), ("B", 2.0), ("C", 3.0), ("D", 4.0), ("DD", 5.0), ("E", 6.0), ("F", 7.0),
    ("FF", 8.0), ("G", 9.0), ("GG", 10.0), ("H", 11.0),
];

const BRA_CUP_EU: Chart = &[
    ("A", 1.0), ("B", 2.0), ("C", 3.0), ("D", 4.0), ("E", 5.0), ("F", 6.0), ("G", 7.0),
    ("H", 8.0), ("I", 9.0), ("J", 10.0), ("K", 11.0),
];

// rings: reference is the US ring size
const RING_US: Chart = &[
    ("3", 3.0), ("3.5", 3.5), ("4", 4.0), ("4.5", 4.5), ("5", 5.0), ("5.5", 5.5), ("6", 6.0),
    ("6.5", 6.5), ("7", 7.0), ("7.5", 7.5), ("8", 8.0), ("8.5", 8.5), ("9", 9.0), ("9.5", 9.5),
    ("10", 10.0), ("10.5", 10.5), ("11", 11.0), ("11.5", 11.5), ("12", 12.0), ("12.5", 12.5),
    ("13", 13.0), ("13.5", 13.5), ("14", 14.0),
];

const RING_UK: Chart = &[
    ("F", 3.0), ("G", 3.5), ("H", 4.0), ("I", 4.5), ("J", 5.0), ("K", 5.5), ("L", 6.0),
    ("M", 6.5), ("N", 7.0), ("O", 7.5), ("P", 8.0), ("Q", 8.5), ("R", 9.0), ("S", 9.5),
    ("T", 10.0), ("U", 10.5), ("V", 11.0), ("W", 11.5), ("X", 12.0), ("Y", 12.5), ("Z", 13.0),
];

const RING_AU: Chart = &[
    ("F", 3.0), ("G", 3.5), ("H", 4.0), ("I", 4.5), ("J", 5.0), ("K", 5.5), ("L", 6.0),
    ("M", 6.5), ("N", 7.0), ("O", 7.5), ("P", 8.0), ("Q", 8.5), ("R", 9.0), ("S", 9.5),
    ("T", 10.0), ("U", 10.5), ("V", 11.0), ("W", 11.5), ("X", 12.0), ("Y", 12.5), ("Z", 13.0),
];

const RING_EU: Chart = &[
    ("44", 3.0), ("45", 3.5), ("47", 4.0), ("48", 4.5), ("49", 5.0), ("51", 5.5), ("52", 6.0),
    ("53", 6.5), ("54", 7.0), ("56", 7.5), ("57", 8.0), ("58", 8.5), ("60", 9.0), ("61", 9.5),
    ("62", 10.0), ("63", 10.5), ("65", 11.0), ("66", 11.5), ("67", 12.0), ("68", 12.5),
    ("70", 13.0), ("71", 13.5), ("72", 14.0),
];

const RING_FR: Chart = &[
    ("44", 3.0), ("45", 3.5), ("47", 4.0), ("48", 4.5), ("49", 5.0), ("51", 5.5), ("52", 6.0),
    ("53", 6.5), ("54", 7.0), ("56", 7.5), ("57", 8.0), ("58", 8.5), ("60", 9.0), ("61", 9.5),
    ("62", 10.0), ("63", 10.5), ("65", 11.0), ("66", 11.5), ("67", 12.0), ("68", 12.5),
    ("70", 13.0), ("71", 13.5), ("72", 14.0),
];

const RING_IT: Chart = &[
    ("4", 3.0), ("5", 3.5), ("7", 4.0), ("8", 4.5), ("9", 5.0), ("11", 5.5), ("12", 6.0),
    ("13", 6.5), ("14", 7.0), ("16", 7.5), ("17", 8.0), ("18", 8.5), ("20", 9.0), ("21", 9.5),
    ("22", 10.0), ("23", 10.5), ("25", 11.0), ("26", 11.5), ("27", 12.0), ("28", 12.5),
    ("30", 13.0), ("31", 13.5), ("32", 14.0),
];

const RING_JP: Chart = &[
    ("4", 3.0), ("5", 3.5), ("7", 4.0), ("8", 4.5), ("9", 5.0), ("10", 5.5), ("12", 6.0),
    ("13", 6.5), ("14", 7.0), ("15", 7.5), ("16", 8.0), ("17", 8.5), ("18", 9.0), ("19", 9.5),
    ("20", 10.0), ("22", 10.5), ("23", 11.0), ("24", 11.5), ("25", 12.0), ("26", 12.5),
    ("27", 13.0),
];

// hats: reference is the head circumference in centimetres
const HAT_US: Chart = &[
    ("6.5", 52.0), ("6 5/8", 53.0), ("6.75", 54.0), ("6 7/8", 55.0), ("7", 56.0),
    ("7 1/8", 57.0), ("7.25", 58.0), ("7 3/8", 59.0), ("7.5", 60.0), ("7 5/8", 61.0),
    ("7.75", 62.0), ("7 7/8", 63.0), ("8", 64.0), ("XS", 53.0), ("S", 55.0), ("M", 57.0),
    ("L", 59.0), ("XL", 61.0), ("XXL", 63.0),
];

const HAT_UK: Chart = &[
    ("6 3/8", 52.0), ("6.5", 53.0), ("6 5/8", 54.0), ("6.75", 55.0), ("6 7/8", 56.0),
    ("7", 57.0), ("7 1/8", 58.0), ("7.25", 59.0), ("7 3/8", 60.0), ("7.5", 61.0),
    ("7 5/8", 62.0), ("7.75", 63.0), ("7 7/8", 64.0), ("XS", 53.0), ("S", 55.0), ("M", 57.0),
    ("L", 59.0), ("XL", 61.0), ("XXL", 63.0),
];

const HAT_EU: Chart = &[
    ("52", 52.0), ("53", 53.0), ("54", 54.0), ("55", 55.0), ("56", 56.0), ("57", 57.0),
    ("58", 58.0), ("59", 59.0), ("60", 60.0), ("61", 61.0), ("62", 62.0), ("63", 63.0),
    ("64", 64.0),
];

const HAT_CM: Chart = &[
    ("52", 52.0), ("53", 53.0), ("54", 54.0), ("55", 55.0), ("56", 56.0), ("57", 57.0),
    ("58", 58.0), ("59", 59.0), ("60", 60.0), ("61", 61.0), ("62", 62.0), ("63", 63.0),
    ("64", 64.0),
];

const HAT_INCH: Chart = &[
    ("20.5", 52.0), ("20.9", 53.0), ("21.3", 54.0), ("21.7", 55.0), ("22", 56.0),
    ("22.4", 57.0), ("22.8", 58.0), ("23.2", 59.0), ("23.6", 60.0), ("24", 61.0),
    ("24.4", 62.0), ("24.8", 63.0), ("25.2", 64.0),
];

// gloves: reference is the hand circumference in inches
const GLOVE_US: Chart = &[
    ("6", 6.0), ("6.5", 6.5), ("7", 7.0), ("7.5", 7.5), ("8", 8.0), ("8.5", 8.5), ("9", 9.0),
    ("9.5", 9.5), ("10", 10.0), ("10.5", 10.5), ("11", 11.0), ("XS", 6.0), ("S", 7.0),
    ("M", 8.0), ("L", 9.0), ("XL", 10.0), ("XXL", 11.0),
];

const GLOVE_UK: Chart = &[
    ("6", 6.0), ("6.5", 6.5), ("7", 7.0), ("7.5", 7.5), ("8", 8.0), ("8.5", 8.5), ("9", 9.0),
    ("9.5", 9.5), ("10", 10.0), ("10.5", 10.5), ("11", 11.0), ("XS", 6.0), ("S", 7.0),
    ("M", 8.0), ("L", 9.0), ("XL", 10.0), ("XXL", 11.0),
];

const GLOVE_EU: Chart = &[
    ("6", 6.0), ("6.5", 6.5), ("7", 7.0), ("7.5", 7.5), ("8", 8.0), ("8.5", 8.5), ("9", 9.0),
    ("9.5", 9.5), ("10", 10.0), ("10.5", 10.5), ("11", 11.0),
];

const GLOVE_CM: Chart = &[
    ("15.2", 6.0), ("16.5", 6.5), ("17.8", 7.0), ("19.1", 7.5), ("20.3", 8.0), ("21.6", 8.5),
    ("22.9", 9.0), ("24.1", 9.5), ("25.4", 10.0), ("26.7", 10.5), ("27.9", 11.0),
];

const GLOVE_INCH: Chart = &[
    ("6", 6.0), ("6.5", 6.5), ("7", 7.0), ("7.5", 7.5), ("8", 8.0), ("8.5", 8.5), ("9", 9.0),
    ("9.5", 9.5), ("10", 10.0), ("10.5", 10.5), ("11", 11.0),
];

// belts: reference is the waist in inches
const BELT_US: Chart = &[
    ("28", 28.0), ("30", 30.0), ("32", 32.0), ("34", 34.0), ("36", 36.0), ("38", 38.0),
    ("40", 40.0), ("42", 42.0), ("44", 44.0), ("46", 46.0), ("48", 48.0), ("50", 50.0),
    ("S", 30.0), ("M", 34.0), ("L", 38.0), ("XL", 42.0), ("XXL", 46.0),
];

const BELT_UK: Chart = &[
    ("28", 28.0), ("30", 30.0), ("32", 32.0), ("34", 34.0), ("36", 36.0), ("38", 38.0),
    ("40", 40.0), ("42", 42.0), ("44", 44.0),
];

const BELT_EU: Chart = &[
    ("44", 28.0), ("46", 30.0), ("48", 32.0), ("50", 34.0), ("52", 36.0), ("54", 38.0),
    ("56", 40.0), ("58", 42.0), ("60", 44.0),
];

const BELT_CM: Chart = &[
    ("71", 28.0), ("76", 30.0), ("81", 32.0), ("86", 34.0), ("91", 36.0), ("97", 38.0),
    ("102", 40.0), ("107", 42.0), ("112", 44.0),
];

const BELT_INCH: Chart = &[
    ("28", 28.0), ("30", 30.0), ("32", 32.0), ("34", 34.0), ("36", 36.0), ("38", 38.0),
    ("40", 40.0), ("42", 42.0), ("44", 44.0),
];

// watches: reference is the case diameter in millimetres
const WATCH_SIZES: Chart = &[
    ("28", 28.0), ("30", 30.0), ("32", 32.0), ("34", 34.0), ("36", 36.0), ("38", 38.0),
    ("40", 40.0), ("42", 42.0), ("44", 44.0), ("46", 46.0), ("48", 48.0), ("50", 50.0),
    ("52", 52.0), ("XS", 32.0), ("S", 36.0), ("M", 40.0), ("L", 44.0), ("XL", 48.0),
];

// children: reference is the body height in centimetres
const CHILD_INFANT_US: Chart = &[
    ("0-3M", 62.0), ("3-6M", 68.0), ("6-9M", 74.0), ("9-12M", 80.0), ("12-18M", 86.0),
    ("18-24M", 92.0),
];

const CHILD_INFANT_UK: Chart = &[
    ("0-3M", 62.0), ("3-6M", 68.0), ("6-9M", 74.0), ("9-12M", 80.0), ("12-18M", 86.0),
    ("18-24M", 92.0),
];

const CHILD_INFANT_EU: Chart = &[
    ("62", 62.0), ("68", 68.0), ("74", 74.0), ("80", 80.0), ("86", 86.0), ("92", 92.0),
];

const CHILD_TODDLER_US: Chart = &[
    ("2T", 92.0), ("3T", 98.0), ("4T", 104.0), ("5T", 110.0),
];

const CHILD_TODDLER_UK: Chart = &[
    ("2-3Y", 92.0), ("3-4Y", 98.0), ("4-5Y", 104.0), ("5-6Y", 110.0),
];

const CHILD_TODDLER_EU: Chart = &[
    ("92", 92.0), ("98", 98.0), ("104", 104.0), ("110", 110.0),
];

const CHILD_KIDS_US: Chart = &[
    ("4", 104.0), ("5", 110.0), ("6", 116.0), ("7", 122.0), ("8", 128.0), ("10", 140.0),
    ("12", 152.0), ("14", 164.0), ("16", 176.0),
];

const CHILD_KIDS_UK: Chart = &[
    ("4", 104.0), ("5", 110.0), ("6", 116.0), ("7", 122.0), ("8", 128.0), ("10", 140.0),
    ("12", 152.0), ("14", 164.0), ("16", 176.0),
];

const CHILD_KIDS_EU: Chart = &[
    ("104", 104.0), ("110", 110.0), ("116", 116.0), ("122", 122.0), ("128", 128.0),
    ("140", 140.0), ("152", 152.0), ("164", 164.0), ("176", 176.0),
];

const CHILD_YOUTH_US: Chart = &[
    ("XS", 122.0), ("S", 134.0), ("M", 146.0), ("L", 158.0), ("XL", 170.0),
];

const CHILD_YOUTH_UK: Chart = &[
    ("XS", 122.0), ("S", 134.0), ("M", 146.0), ("L", 158.0), ("XL", 170.0),
];

const CHILD_YOUTH_EU: Chart = &[
    ("122", 122.0), ("134", 134.0), ("146", 146.0), ("158", 158.0), ("170", 170.0),
];

/// Which chart backs which (category, sheet, convention).
pub(crate) const LAYOUT: &[(Category, Sheet, Convention, Chart)] = &[
    (Category::Shoes, Sheet::Men, Convention::Us, SHOES_MEN_US),
    (Category::Shoes, Sheet::Men, Convention::Uk, SHOES_MEN_UK),
    (Category::Shoes, Sheet::Men, Convention::Au, SHOES_MEN_AU),
    (Category::Shoes, Sheet::Men, Convention::Eu, SHOES_MEN_EU),
    (Category::Shoes, Sheet::Men, Convention::Br, SHOES_MEN_BR),
    (Category::Shoes, Sheet::Men, Convention::Mx, SHOES_MEN_MX),
    (Category::Shoes, Sheet::Men, Convention::Jp, SHOES_MEN_JP),
    (Category::Shoes, Sheet::Men, Convention::Cm, SHOES_MEN_CM),
    (Category::Shoes, Sheet::Men, Convention::Inch, SHOES_MEN_INCH),
    (Category::Shoes, Sheet::Women, Convention::Us, SHOES_WOMEN_US),
    (Category::Shoes, Sheet::Women, Convention::Uk, SHOES_WOMEN_UK),
    (Category::Shoes, Sheet::Women, Convention::Au, SHOES_WOMEN_AU),
    (Category::Shoes, Sheet::Women, Convention::Eu, SHOES_WOMEN_EU),
    (Category::Shoes, Sheet::Women, Convention::Br, SHOES_WOMEN_BR),
    (Category::Shoes, Sheet::Women, Convention::Mx, SHOES_WOMEN_MX),
    (Category::Shoes, Sheet::Women, Convention::Jp, SHOES_WOMEN_JP),
    (Category::Shoes, Sheet::Women, Convention::Cm, SHOES_WOMEN_CM),
    (Category::Shoes, Sheet::Women, Convention::Inch, SHOES_WOMEN_INCH),
    (Category::Clothing, Sheet::Men, Convention::Us, CLOTHING_MEN_US),
    (Category::Clothing, Sheet::Men, Convention::Uk, CLOTHING_MEN_UK),
    (Category::Clothing, Sheet::Men, Convention::Au, CLOTHING_MEN_AU),
    (Category::Clothing, Sheet::Men, Convention::Eu, CLOTHING_MEN_EU),
    (Category::Clothing, Sheet::Men, Convention::Fr, CLOTHING_MEN_FR),
    (Category::Clothing, Sheet::Men, Convention::It, CLOTHING_MEN_IT),
    (Category::Clothing, Sheet::Men, Convention::Jp, CLOTHING_MEN_JP),
    (Category::Clothing, Sheet::Women, Convention::Us, CLOTHING_WOMEN_US),
    (Category::Clothing, Sheet::Women, Convention::Uk, CLOTHING_WOMEN_UK),
    (Category::Clothing, Sheet::Women, Convention::Au, CLOTHING_WOMEN_AU),
    (Category::Clothing, Sheet::Women, Convention::Eu, CLOTHING_WOMEN_EU),
    (Category::Clothing, Sheet::Women, Convention::Fr, CLOTHING_WOMEN_FR),
    (Category::Clothing, Sheet::Women, Convention::It, CLOTHING_WOMEN_IT),
    (Category::Clothing, Sheet::Women, Convention::Jp, CLOTHING_WOMEN_JP),
    (Category::Dress, Sheet::Women, Convention::Us, DRESS_US),
    (Category::Dress, Sheet::Women, Convention::Uk, DRESS_UK),
    (Category::Dress, Sheet::Women, Convention::Au, DRESS_AU),
    (Category::Dress, Sheet::Women, Convention::Eu, DRESS_EU),
    (Category::Dress, Sheet::Women, Convention::Fr, DRESS_FR),
    (Category::Dress, Sheet::Women, Convention::It, DRESS_IT),
    (Category::Dress, Sheet::Women, Convention::Jp, DRESS_JP),
    (Category::Outerwear, Sheet::Men, Convention::Us, OUTERWEAR_MEN_US),
    (Category::Outerwear, Sheet::Men, Convention::Uk, OUTERWEAR_MEN_UK),
    (Category::Outerwear, Sheet::Men, Convention::Eu, OUTERWEAR_MEN_EU),
    (Category::Outerwear, Sheet::Men, Convention::It, OUTERWEAR_MEN_IT),
    (Category::Outerwear, Sheet::Men, Convention::Jp, OUTERWEAR_MEN_JP),
    (Category::Outerwear, Sheet::Women, Convention::Us, OUTERWEAR_WOMEN_US),
    (Category::Outerwear, Sheet::Women, Convention::Uk, OUTERWEAR_WOMEN_UK),
    (Category::Outerwear, Sheet::Women, Convention::Eu, OUTERWEAR_WOMEN_EU),
    (Category::Outerwear, Sheet::Women, Convention::Fr, OUTERWEAR_WOMEN_FR),
    (Category::Swimwear, Sheet::Men, Convention::Us, SWIM_MEN_US),
    (Category::Swimwear, Sheet::Men, Convention::Uk, SWIM_MEN_UK),
    (Category::Swimwear, Sheet::Men, Convention::Au, SWIM_MEN_AU),
    (Category::Swimwear, Sheet::Men, Convention::Eu, SWIM_MEN_EU),
    (Category::Swimwear, Sheet::Women, Convention::Us, SWIM_WOMEN_US),
    (Category::Swimwear, Sheet::Women, Convention::Uk, SWIM_WOMEN_UK),
    (Category::Swimwear, Sheet::Women, Convention::Au, SWIM_WOMEN_AU),
    (Category::Swimwear, Sheet::Women, Convention::Eu, SWIM_WOMEN_EU),
    (Category::Bra, Sheet::Band, Convention::Us, BRA_BAND_US),
    (Category::Bra, Sheet::Band, Convention::Uk, BRA_BAND_UK),
    (Category::Bra, Sheet::Band, Convention::Au, BRA_BAND_AU),
    (Category::Bra, Sheet::Band, Convention::Eu, BRA_BAND_EU),
    (Category::Bra, Sheet::Band, Convention::Fr, BRA_BAND_FR),
    (Category::Bra, Sheet::Band, Convention::It, BRA_BAND_IT),
    (Category::Bra, Sheet::Band, Convention::Jp, BRA_BAND_JP),
    (Category::Bra, Sheet::Cup, Convention::Us, BRA_CUP_US),
    (Category::Bra, Sheet::Cup, Convention::Uk, BRA_CUP_UK),
    (Category::Bra, Sheet::Cup, Convention::Au, BRA_CUP_UK),
    (Category::Bra, Sheet::Cup, Convention::Eu, BRA_CUP_EU),
    (Category::Bra, Sheet::Cup, Convention::Fr, BRA_CUP_EU),
    (Category::Bra, Sheet::Cup, Convention::It, BRA_CUP_EU),
    (Category::Bra, Sheet::Cup, Convention::Jp, BRA_CUP_EU),
    (Category::Ring, Sheet::Unisex, Convention::Us, RING_US),
    (Category::Ring, Sheet::Unisex, Convention::Uk, RING_UK),
    (Category::Ring, Sheet::Unisex, Convention::Au, RING_AU),
    (Category::Ring, Sheet::Unisex, Convention::Eu, RING_EU),
    (Category::Ring, Sheet::Unisex, Convention::Fr, RING_FR),
    (Category::Ring, Sheet::Unisex, Convention::It, RING_IT),
    (Category::Ring, Sheet::Unisex, Convention::Jp, RING_JP),
    (Category::Hat, Sheet::Unisex, Convention::Us, HAT_US),
    (Category::Hat, Sheet::Unisex, Convention::Uk, HAT_UK),
    (Category::Hat, Sheet::Unisex, Convention::Eu, HAT_EU),
    (Category::Hat, Sheet::Unisex, Convention::Cm, HAT_CM),
    (Category::Hat, Sheet::Unisex, Convention::Inch, HAT_INCH),
    (Category::Glove, Sheet::Unisex, Convention::Us, GLOVE_US),
    (Category::Glove, Sheet::Unisex, Convention::Uk, GLOVE_UK),
    (Category::Glove, Sheet::Unisex, Convention::Eu, GLOVE_EU),
    (Category::Glove, Sheet::Unisex, Convention::Cm, GLOVE_CM),
    (Category::Glove, Sheet::Unisex, Convention::Inch, GLOVE_INCH),
    (Category::Belt, Sheet::Unisex, Convention::Us, BELT_US),
    (Category::Belt, Sheet::Unisex, Convention::Uk, BELT_UK),
    (Category::Belt, Sheet::Unisex, Convention::Eu, BELT_EU),
    (Category::Belt, Sheet::Unisex, Convention::Cm, BELT_CM),
    (Category::Belt, Sheet::Unisex, Convention::Inch, BELT_INCH),
    (Category::Watch, Sheet::Unisex, Convention::Us, WATCH_SIZES),
    (Category::Watch, Sheet::Unisex, Convention::Uk, WATCH_SIZES),
    (Category::Watch, Sheet::Unisex, Convention::Eu, WATCH_SIZES),
    (Category::Watch, Sheet::Unisex, Convention::Jp, WATCH_SIZES),
    (Category::Children, Sheet::Infant, Convention::Us, CHILD_INFANT_US),
    (Category::Children, Sheet::Infant, Convention::Uk, CHILD_INFANT_UK),
    (Category::Children, Sheet::Infant, Convention::Eu, CHILD_INFANT_EU),
    (Category::Children, Sheet::Toddler, Convention::Us, CHILD_TODDLER_US),
    (Category::Children, Sheet::Toddler, Convention::Uk, CHILD_TODDLER_UK),
    (Category::Children, Sheet::Toddler, Convention::Eu, CHILD_TODDLER_EU),
    (Category::Children, Sheet::Kids, Convention::Us, CHILD_KIDS_US),
    (Category::Children, Sheet::Kids, Convention::Uk, CHILD_KIDS_UK),
    (Category::Children, Sheet::Kids, Convention::Eu, CHILD_KIDS_EU),
    (Category::Children, Sheet::Youth, Convention::Us, CHILD_YOUTH_US),
    (Category::Children, Sheet::Youth, Convention::Uk, CHILD_YOUTH_UK),
    (Category::Children, Sheet::Youth, Convention::Eu, CHILD_YOUTH_EU),
];
