use crate::domain::{Category, Product, ProductCategory};
use crate::infrastructure::{ProductQuery, ProductSource};
use anyhow::Result;
use chrono::Datelike;
use log::debug;

pub const DEFAULT_CATALOG_SIZE: usize = 110;

const NAMES: [&str; 10] = [
    "Inkwell",
    "Tallyho",
    "Driftwood",
    "Lanternfish",
    "Quillmate",
    "Harborview",
    "Pixelforge",
    "Northstar",
    "Cobblestone",
    "Mapleleaf",
];

/// Deterministic stand-in for a real product database.
///
/// The same query always yields the same products, and each leaderboard
/// period gets its own ordering so boards for different days differ.
pub struct MockCatalog {
    size: usize,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::with_size(DEFAULT_CATALOG_SIZE)
    }

    pub fn with_size(size: usize) -> Self {
        Self { size }
    }

    fn product(&self, index: usize, seed: usize) -> Product {
        let slot = (index + seed) % self.size.max(1);
        let category = ProductCategory::ALL[slot % ProductCategory::ALL.len()];
        let name = format!("{} {}", NAMES[slot % NAMES.len()], slot / NAMES.len() + 1);

        Product {
            id: format!("product-{}", slot),
            description: format!("{} for people who ship", category.label().to_lowercase()),
            name,
            category,
            comments_count: 12 + (slot % 7) as u32,
            views_count: 12 + (slot % 13) as u32 * 10,
            // rank order: index 0 has the most votes
            votes_count: ((self.size - index) * 12) as u32,
        }
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductSource for MockCatalog {
    fn products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        let seed = query
            .range
            .map(|range| range.start.num_days_from_ce().unsigned_abs() as usize)
            .unwrap_or(0);

        let products: Vec<Product> = (0..self.size)
            .map(|index| self.product(index, seed))
            .filter(|p| query.category.is_none_or(|c| p.category == c))
            .filter(|p| query.text.as_deref().is_none_or(|text| p.matches(text)))
            .collect();

        debug!("Mock catalog returned {} products for {:?}", products.len(), query);
        Ok(products)
    }

    fn categories(&self) -> Result<Vec<Category>> {
        Ok(ProductCategory::ALL
            .into_iter()
            .map(|id| Category::new(id, format!("Tools and resources: {}", id.label())))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CalendarUnit, DateRange};
    use chrono::NaiveDate;

    #[test]
    fn test_products_are_ranked_by_votes() {
        let catalog = MockCatalog::new();
        let products = catalog.products(&ProductQuery::all()).unwrap();

        assert_eq!(products.len(), DEFAULT_CATALOG_SIZE);
        assert!(products.windows(2).all(|w| w[0].votes_count > w[1].votes_count));
    }

    #[test]
    fn test_periods_get_different_boards() {
        let catalog = MockCatalog::new();
        let day = |d| {
            let date = NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
            DateRange::containing(CalendarUnit::Day, date).unwrap()
        };

        let first = catalog.products(&ProductQuery::in_range(day(14))).unwrap();
        let second = catalog.products(&ProductQuery::in_range(day(15))).unwrap();
        let again = catalog.products(&ProductQuery::in_range(day(15))).unwrap();

        assert_ne!(first[0].id, second[0].id);
        assert_eq!(second, again);
    }

    #[test]
    fn test_filters() {
        let catalog = MockCatalog::new();

        let design = catalog
            .products(&ProductQuery::in_category(ProductCategory::DesignTools))
            .unwrap();
        assert_eq!(design.len(), DEFAULT_CATALOG_SIZE / 5);
        assert!(design.iter().all(|p| p.category == ProductCategory::DesignTools));

        let inkwell = catalog.products(&ProductQuery::matching("inkwell")).unwrap();
        assert_eq!(inkwell.len(), DEFAULT_CATALOG_SIZE / NAMES.len());

        let nothing = catalog.products(&ProductQuery::matching("zzz")).unwrap();
        assert!(nothing.is_empty());
    }

    #[test]
    fn test_categories() {
        let categories = MockCatalog::new().categories().unwrap();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[0].name, "Developer Tools");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = MockCatalog::with_size(0);
        assert!(catalog.products(&ProductQuery::all()).unwrap().is_empty());
    }
}
