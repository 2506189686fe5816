//! The fixed vocabularies every conversion is expressed in.
//!
//! A [`Convention`] is a regional (or measured) sizing system, a [`Category`]
//! is a kind of product with its own grammar and charts, an [`Audience`]
//! picks which chart variant applies and a [`Sheet`] names that variant
//! inside the reference catalog.

use serde::{Deserialize, Serialize};

// used to print out readable forms of a tag
use std::fmt;
// used when parsing a tag from a string
use std::str::FromStr;

use crate::error::{ConversionError, SizewiseError};

// ------------- Convention -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Convention {
    Us,
    Uk,
    Eu,
    Fr,
    It,
    Jp,
    Au,
    Mx,
    Br,
    Cm,
    Inch,
}

impl Convention {
    pub const ALL: [Convention; 11] = [
        Convention::Us,
        Convention::Uk,
        Convention::Eu,
        Convention::Fr,
        Convention::It,
        Convention::Jp,
        Convention::Au,
        Convention::Mx,
        Convention::Br,
        Convention::Cm,
        Convention::Inch,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Convention::Us => "US",
            Convention::Uk => "UK",
            Convention::Eu => "EU",
            Convention::Fr => "FR",
            Convention::It => "IT",
            Convention::Jp => "JP",
            Convention::Au => "AU",
            Convention::Mx => "MX",
            Convention::Br => "BR",
            Convention::Cm => "CM",
            Convention::Inch => "INCH",
        }
    }
    pub fn display_name(&self) -> &'static str {
        match self {
            Convention::Us => "United States",
            Convention::Uk => "United Kingdom",
            Convention::Eu => "European",
            Convention::Fr => "French",
            Convention::It => "Italian",
            Convention::Jp => "Japanese",
            Convention::Au => "Australian",
            Convention::Mx => "Mexican",
            Convention::Br => "Brazilian",
            Convention::Cm => "Centimeters",
            Convention::Inch => "Inches",
        }
    }
    /// Centimeters and inches are physical lengths rather than size labels.
    pub fn is_measurement(&self) -> bool {
        matches!(self, Convention::Cm | Convention::Inch)
    }
}
impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
impl FromStr for Convention {
    type Err = SizewiseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_uppercase();
        Convention::ALL
            .into_iter()
            .find(|c| c.code() == tag)
            .ok_or(SizewiseError::UnknownTag { kind: "convention", tag: s.to_owned() })
    }
}

// ------------- Category -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Shoes,
    Clothing,
    Dress,
    Bra,
    Ring,
    Hat,
    Glove,
    Belt,
    Socks,
    Watch,
    Outerwear,
    Swimwear,
    Children,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Shoes,
        Category::Clothing,
        Category::Dress,
        Category::Bra,
        Category::Ring,
        Category::Hat,
        Category::Glove,
        Category::Belt,
        Category::Socks,
        Category::Watch,
        Category::Outerwear,
        Category::Swimwear,
        Category::Children,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Category::Shoes => "shoes",
            Category::Clothing => "clothing",
            Category::Dress => "dress",
            Category::Bra => "bra",
            Category::Ring => "ring",
            Category::Hat => "hat",
            Category::Glove => "glove",
            Category::Belt => "belt",
            Category::Socks => "socks",
            Category::Watch => "watch",
            Category::Outerwear => "outerwear",
            Category::Swimwear => "swimwear",
            Category::Children => "children",
        }
    }
    /// Categories whose child audiences are answered by the children's charts.
    pub fn routes_children(&self) -> bool {
        matches!(
            self,
            Category::Clothing | Category::Dress | Category::Outerwear | Category::Swimwear | Category::Children
        )
    }
}
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
impl FromStr for Category {
    type Err = ConversionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.tag() == tag)
            .ok_or(ConversionError::UnsupportedType { name: s.to_owned() })
    }
}

// ------------- Audience -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Men,
    Women,
    #[default]
    Unisex,
    Infant,
    Toddler,
    Kids,
    Youth,
}

impl Audience {
    pub const ALL: [Audience; 7] = [
        Audience::Men,
        Audience::Women,
        Audience::Unisex,
        Audience::Infant,
        Audience::Toddler,
        Audience::Kids,
        Audience::Youth,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Audience::Men => "men",
            Audience::Women => "women",
            Audience::Unisex => "unisex",
            Audience::Infant => "infant",
            Audience::Toddler => "toddler",
            Audience::Kids => "kids",
            Audience::Youth => "youth",
        }
    }
    pub fn is_child(&self) -> bool {
        matches!(self, Audience::Infant | Audience::Toddler | Audience::Kids | Audience::Youth)
    }
    /// The children's sheet this audience reads, if it is a child bracket.
    pub fn child_sheet(&self) -> Option<Sheet> {
        match self {
            Audience::Infant => Some(Sheet::Infant),
            Audience::Toddler => Some(Sheet::Toddler),
            Audience::Kids => Some(Sheet::Kids),
            Audience::Youth => Some(Sheet::Youth),
            _ => None,
        }
    }
}
impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
impl FromStr for Audience {
    type Err = SizewiseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Audience::ALL
            .into_iter()
            .find(|a| a.tag() == tag)
            .ok_or(SizewiseError::UnknownTag { kind: "audience", tag: s.to_owned() })
    }
}

// ------------- Sheet -------------
/// A table variant inside one category: gendered charts, the two halves of
/// a bra size, or one of the four children's schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sheet {
    Men,
    Women,
    Unisex,
    Band,
    Cup,
    Infant,
    Toddler,
    Kids,
    Youth,
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Sheet::Men => "men",
            Sheet::Women => "women",
            Sheet::Unisex => "unisex",
            Sheet::Band => "band",
            Sheet::Cup => "cup",
            Sheet::Infant => "infant",
            Sheet::Toddler => "toddler",
            Sheet::Kids => "kids",
            Sheet::Youth => "youth",
        };
        write!(f, "{name}")
    }
}
