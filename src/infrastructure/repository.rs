use crate::domain::{Category, DateRange, Product, ProductCategory};
use anyhow::Result;

/// Filter handed to a [`ProductSource`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Only products ranked within this period
    pub range: Option<DateRange>,
    pub category: Option<ProductCategory>,
    pub text: Option<String>,
}

impl ProductQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn in_range(range: DateRange) -> Self {
        Self {
            range: Some(range),
            ..Self::default()
        }
    }

    pub fn in_category(category: ProductCategory) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn matching(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Where products and categories come from. Results are ordered by votes,
/// highest first.
pub trait ProductSource {
    fn products(&self, query: &ProductQuery) -> Result<Vec<Product>>;
    fn categories(&self) -> Result<Vec<Category>>;
}
