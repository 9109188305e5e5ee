use crate::domain::{
    CalendarUnit, Category, Navigation, Neighbor, PageLinkSet, PaginationState, Product, ProductCategory,
    compute_window,
};
use serde::Serialize;

/// One page of rows plus the pagination links shown under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub page_size: usize,
    pub state: PaginationState,
    pub links: PageLinkSet,
}

impl<T> Listing<T> {
    /// 1-based overall position of the first row on this page
    pub fn first_rank(&self) -> usize {
        (self.state.current_page as usize - 1) * self.page_size + 1
    }
}

impl<T: Clone> Listing<T> {
    pub fn paginate(all: &[T], page: u32, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = PaginationState::total_for(all.len(), page_size);
        let state = PaginationState::new(page, total_pages);
        Self {
            items: state.slice(all, page_size).to_vec(),
            page_size,
            state,
            links: compute_window(state),
        }
    }
}

/// A previous/next button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub path: String,
    pub label: String,
}

impl From<&Neighbor> for NavLink {
    fn from(neighbor: &Neighbor) -> Self {
        Self {
            path: neighbor.path.clone(),
            label: neighbor.label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardPage {
    pub unit: CalendarUnit,
    pub title: String,
    pub meta_title: String,
    /// Absent for the earliest period the validator accepts
    pub previous: Option<NavLink>,
    /// Absent when the board is for the current period
    pub next: Option<NavLink>,
    pub navigation: Navigation,
    pub products: Listing<Product>,
}

impl LeaderboardPage {
    pub fn title_for(unit: CalendarUnit, label: &str) -> String {
        match unit {
            CalendarUnit::Day => format!("The best products of {}", label),
            CalendarUnit::Week => format!("Best of week {}", label),
            CalendarUnit::Month | CalendarUnit::Year => format!("The best of {}", label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewSection {
    pub unit: CalendarUnit,
    pub title: String,
    pub description: String,
    pub products: Vec<Product>,
    /// Bare period path that redirects to the current board
    pub explore_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewPage {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<OverviewSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPage {
    pub query: String,
    pub results: Listing<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoriesPage {
    pub categories: Listing<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPage {
    pub category: ProductCategory,
    pub title: String,
    pub products: Listing<Product>,
}
