//! Engine settings and reference table overrides.
//!
//! Settings are read with the `config` crate: a file (format chosen by its
//! extension) layered under `SIZEWISE_*` environment variables. Every knob
//! has a default, so an empty file is a valid configuration.
//!
//! ```toml
//! tolerance = 0.01
//! batch_limit = 100
//!
//! [[tables]]
//! category = "ring"
//! sheet = "unisex"
//! convention = "JP"
//! entries = [{ size = "28", reference = 13.5 }]
//! ```

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{Result, SizewiseError};
use crate::resolver::Tuning;
use crate::table::{Catalog, ReferenceTable};
use crate::taxonomy::{Category, Convention, Sheet};

fn default_tolerance() -> f64 {
    0.01
}
fn default_batch_limit() -> usize {
    100
}
fn default_confidence_floor() -> f64 {
    0.5
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableEntry {
    pub size: String,
    pub reference: f64,
}

/// Replaces one reference table in the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableOverride {
    pub category: Category,
    pub sheet: Sheet,
    pub convention: Convention,
    pub entries: Vec<TableEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Sizes beyond this many in a batch call are dropped.
    #[serde(default = "default_batch_limit")]
    pub batch_limit: usize,
    #[serde(default = "default_confidence_floor")]
    pub confidence_floor: f64,
    #[serde(default)]
    pub tables: Vec<TableOverride>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            batch_limit: default_batch_limit(),
            confidence_floor: default_confidence_floor(),
            tables: Vec::new(),
        }
    }
}

impl Settings {
    /// Loads settings from a file, with `SIZEWISE_*` environment variables
    /// taking precedence.
    pub fn from_file(path: &Path) -> Result<Self> {
        let settings: Settings = Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("SIZEWISE").try_parsing(true))
            .build()?
            .try_deserialize()?;
        info!(path = %path.display(), overrides = settings.tables.len(), "settings loaded");
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from TOML text, without consulting the environment.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance > 0.0) {
            return Err(SizewiseError::Config(format!("tolerance must be positive, got {}", self.tolerance)));
        }
        if self.batch_limit == 0 {
            return Err(SizewiseError::Config("batch_limit must be at least 1".to_owned()));
        }
        if !(0.0..=1.0).contains(&self.confidence_floor) {
            return Err(SizewiseError::Config(format!(
                "confidence_floor must lie in 0..=1, got {}",
                self.confidence_floor
            )));
        }
        for table in &self.tables {
            if table.entries.is_empty() {
                return Err(SizewiseError::Table(format!(
                    "override for {} {} {} has no entries",
                    table.category, table.sheet, table.convention
                )));
            }
        }
        Ok(())
    }

    pub fn tuning(&self) -> Tuning {
        Tuning { tolerance: self.tolerance, confidence_floor: self.confidence_floor }
    }

    /// The built-in catalog with this configuration's overrides applied.
    pub fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::builtin();
        for table in &self.tables {
            if !reads_sheet(table.category, table.sheet) {
                warn!(category = %table.category, sheet = %table.sheet, "override names a sheet the category never reads");
            }
            let pairs = table.entries.iter().map(|e| (e.size.as_str(), e.reference));
            catalog.insert(table.category, table.sheet, table.convention, ReferenceTable::new(pairs));
            info!(category = %table.category, sheet = %table.sheet, convention = %table.convention, "reference table overridden");
        }
        catalog
    }
}

fn reads_sheet(category: Category, sheet: Sheet) -> bool {
    match category {
        // socks are answered from the shoe charts
        Category::Socks => false,
        Category::Shoes | Category::Clothing | Category::Outerwear | Category::Swimwear => {
            matches!(sheet, Sheet::Men | Sheet::Women)
        }
        Category::Dress => sheet == Sheet::Women,
        Category::Bra => matches!(sheet, Sheet::Band | Sheet::Cup),
        Category::Children => matches!(sheet, Sheet::Infant | Sheet::Toddler | Sheet::Kids | Sheet::Youth),
        Category::Ring | Category::Hat | Category::Glove | Category::Belt | Category::Watch => sheet == Sheet::Unisex,
    }
}
