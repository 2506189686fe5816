//! The public entry point: routes a (category, audience) pair to its
//! resolver and offers the batch and capability helpers.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use lazy_static::lazy_static;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::resolver::formula::{apparel_rules, belt_rules, dress_rules};
use crate::resolver::{
    BraResolver, ChildrenResolver, Fallback, FootwearResolver, HosieryResolver, SheetRule, SizeResolver,
    TableResolver, WatchResolver,
};
use crate::result::ConversionResult;
use crate::settings::Settings;
use crate::table::{Catalog, TokenHasher};
use crate::taxonomy::{Audience, Category, Convention, Sheet};

lazy_static! {
    static ref GLOBAL: SizeConverter = SizeConverter::new();
}

/// What the converter can do, for discovery by callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Capabilities {
    pub categories: Vec<Category>,
    pub conventions: Vec<Convention>,
    pub audiences: Vec<Audience>,
    pub conventions_by_category: BTreeMap<Category, Vec<Convention>>,
    /// Ordered pairs of distinct conventions, summed over categories.
    pub conversion_pairs: usize,
}

/// Holds one resolver per category. Built once and read-only afterwards,
/// so a single instance can serve any number of threads.
pub struct SizeConverter {
    resolvers: HashMap<Category, Arc<dyn SizeResolver>, TokenHasher>,
    children: Arc<ChildrenResolver>,
    batch_limit: usize,
}

impl Default for SizeConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeConverter {
    /// A converter over the built-in charts with default settings.
    pub fn new() -> Self {
        let settings = Settings::default();
        Self::from_catalog(&Catalog::builtin(), &settings)
    }

    /// A converter using the given settings and their table overrides.
    pub fn with_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::from_catalog(&settings.catalog(), settings))
    }

    /// The shared process-wide converter over the built-in charts.
    pub fn global() -> &'static SizeConverter {
        &GLOBAL
    }

    fn from_catalog(catalog: &Catalog, settings: &Settings) -> Self {
        let tuning = settings.tuning();
        let chart = |category: Category, sheets: SheetRule, fallback: Fallback| -> Arc<dyn SizeResolver> {
            Arc::new(TableResolver::new(category, catalog, sheets, fallback, tuning))
        };
        let footwear = Arc::new(FootwearResolver::new(catalog, tuning));
        let children = Arc::new(ChildrenResolver::new(catalog, tuning));
        let unisex = SheetRule::Fixed(Sheet::Unisex);

        let mut resolvers: HashMap<Category, Arc<dyn SizeResolver>, TokenHasher> = HashMap::default();
        resolvers.insert(Category::Shoes, footwear.clone());
        resolvers.insert(Category::Socks, Arc::new(HosieryResolver::new(footwear)));
        resolvers.insert(
            Category::Clothing,
            chart(Category::Clothing, SheetRule::Gendered { unisex: Some(Sheet::Men) }, Fallback::Formula(apparel_rules())),
        );
        resolvers.insert(
            Category::Outerwear,
            chart(Category::Outerwear, SheetRule::Gendered { unisex: Some(Sheet::Men) }, Fallback::Formula(apparel_rules())),
        );
        resolvers.insert(
            Category::Swimwear,
            chart(Category::Swimwear, SheetRule::Gendered { unisex: None }, Fallback::None),
        );
        resolvers.insert(
            Category::Dress,
            chart(Category::Dress, SheetRule::Fixed(Sheet::Women), Fallback::Formula(dress_rules())),
        );
        resolvers.insert(Category::Ring, chart(Category::Ring, unisex, Fallback::None));
        resolvers.insert(Category::Hat, chart(Category::Hat, unisex, Fallback::None));
        resolvers.insert(Category::Glove, chart(Category::Glove, unisex, Fallback::None));
        resolvers.insert(Category::Belt, chart(Category::Belt, unisex, Fallback::Formula(belt_rules())));
        resolvers.insert(Category::Bra, Arc::new(BraResolver::new(catalog, tuning)));
        resolvers.insert(Category::Watch, Arc::new(WatchResolver::new(catalog, tuning)));
        resolvers.insert(Category::Children, children.clone());

        Self { resolvers, children, batch_limit: settings.batch_limit }
    }

    /// The resolver answering for a category and audience. Child audiences
    /// on garment categories go to the children's charts.
    pub fn resolver(&self, category: Category, audience: Audience) -> &dyn SizeResolver {
        if audience.is_child() && category.routes_children() {
            return self.children.as_ref();
        }
        match self.resolvers.get(&category) {
            Some(resolver) => resolver.as_ref(),
            // every category is registered at construction
            None => self.children.as_ref(),
        }
    }

    pub fn convert(
        &self,
        size: &str,
        from: Convention,
        to: Convention,
        category: Category,
        audience: Audience,
    ) -> Option<String> {
        self.convert_with_details(size, from, to, category, audience).into_converted()
    }

    pub fn convert_with_details(
        &self,
        size: &str,
        from: Convention,
        to: Convention,
        category: Category,
        audience: Audience,
    ) -> ConversionResult {
        self.resolver(category, audience)
            .convert_with_details(size, from, to, audience, category)
    }

    /// Converts each size independently. Only the first `batch_limit`
    /// (100 by default) sizes are looked at.
    pub fn convert_multiple<S: AsRef<str>>(
        &self,
        sizes: &[S],
        from: Convention,
        to: Convention,
        category: Category,
        audience: Audience,
    ) -> Vec<Option<String>> {
        if sizes.len() > self.batch_limit {
            debug!(requested = sizes.len(), limit = self.batch_limit, "batch truncated");
        }
        sizes
            .iter()
            .take(self.batch_limit)
            .map(|size| self.convert(size.as_ref(), from, to, category, audience))
            .collect()
    }

    pub fn is_valid(&self, size: &str, category: Category, convention: Convention, audience: Audience) -> bool {
        self.resolver(category, audience).is_valid(size, convention, audience)
    }

    pub fn suggestions(&self, size: &str, category: Category, convention: Convention, audience: Audience) -> Vec<String> {
        self.resolver(category, audience).suggestions(size, convention, audience)
    }

    pub fn supported_conventions(&self, category: Category) -> &[Convention] {
        self.resolver(category, Audience::Unisex).supported_conventions()
    }

    pub fn requires_audience(&self, category: Category) -> bool {
        self.resolver(category, Audience::Unisex).requires_audience()
    }

    pub fn describe_capabilities(&self) -> Capabilities {
        let conventions_by_category: BTreeMap<Category, Vec<Convention>> = Category::ALL
            .into_iter()
            .map(|category| (category, self.supported_conventions(category).to_vec()))
            .collect();
        let conversion_pairs = conventions_by_category
            .values()
            .map(|conventions| conventions.len() * conventions.len().saturating_sub(1))
            .sum();
        Capabilities {
            categories: Category::ALL.to_vec(),
            conventions: Convention::ALL.to_vec(),
            audiences: Audience::ALL.to_vec(),
            conventions_by_category,
            conversion_pairs,
        }
    }
}
