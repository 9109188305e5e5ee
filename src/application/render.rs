use crate::application::{
    CategoriesPage, CategoryPage, LeaderboardPage, Listing, OverviewPage, SearchPage,
};
use crate::domain::{PageLink, PageLinkSet, Product, Submission, SubmissionError};

/// Plain-text rendering of pages for the terminal
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_leaderboard(&self, page: &LeaderboardPage) -> String {
        let previous = match &page.previous {
            Some(previous) => format!("← {}  ({})", previous.label, previous.path),
            None => String::new(),
        };
        let next = match &page.next {
            Some(next) => format!("{} →  ({})", next.label, next.path),
            None => String::new(),
        };

        let mut out = format!("=== {} ===\n", page.title);
        out.push_str(format!("{}    {}", previous, next).trim());
        out.push_str("\n\n");
        out.push_str(&self.render_products(&page.products));
        out
    }

    pub fn render_overview(&self, page: &OverviewPage) -> String {
        let mut out = format!("=== {} ===\n{}\n", page.title, page.subtitle);

        for section in &page.sections {
            out.push_str(&format!("\n{}\n{}\n", section.title, section.description));
            for (rank, product) in section.products.iter().enumerate() {
                out.push_str(&self.render_product(rank + 1, product));
                out.push('\n');
            }
            out.push_str(&format!("Explore all products → {}\n", section.explore_path));
        }
        out
    }

    pub fn render_search(&self, page: &SearchPage) -> String {
        let mut out = String::from("=== Search ===\n");
        if !page.query.is_empty() {
            out.push_str(&format!("Results for \"{}\"\n", page.query));
        }
        out.push('\n');
        out.push_str(&self.render_products(&page.results));
        out
    }

    pub fn render_categories(&self, page: &CategoriesPage) -> String {
        let mut out = String::from("=== Categories ===\n\n");
        for category in &page.categories.items {
            out.push_str(&format!(
                "  {} ({})\n    {}\n",
                category.name,
                category.id.value(),
                category.description
            ));
        }
        out.push_str(&format!("\n{}\n", self.render_pagination(&page.categories.links)));
        out
    }

    pub fn render_category(&self, page: &CategoryPage) -> String {
        let mut out = format!("=== {} ===\n\n", page.title);
        out.push_str(&self.render_products(&page.products));
        out
    }

    pub fn render_submission(&self, result: &Result<Submission, Vec<SubmissionError>>) -> String {
        match result {
            Ok(submission) => format!(
                "Submitted \"{}\" under {} ({})\n",
                submission.name, submission.category, submission.url
            ),
            Err(errors) => errors.iter().fold(
                String::from("Submission rejected:\n"),
                |mut out, error| {
                    out.push_str(&format!("  - {}\n", error));
                    out
                },
            ),
        }
    }

    fn render_products(&self, listing: &Listing<Product>) -> String {
        let mut out = String::new();
        if listing.items.is_empty() {
            out.push_str("  No products\n");
        }
        let first = listing.first_rank();
        for (i, product) in listing.items.iter().enumerate() {
            out.push_str(&self.render_product(first + i, product));
            out.push('\n');
        }
        out.push_str(&format!("\n{}\n", self.render_pagination(&listing.links)));
        out
    }

    pub fn render_product(&self, rank: usize, product: &Product) -> String {
        format!(
            "{:>4}. {:<20} {:<40} ▲ {:<5} {} comments, {} views",
            rank,
            product.name,
            product.description,
            product.votes_count,
            product.comments_count,
            product.views_count
        )
    }

    /// `‹ Previous  4  [5]  6  …  Next ›`
    pub fn render_pagination(&self, links: &PageLinkSet) -> String {
        links
            .iter()
            .map(|link| match link {
                PageLink::Previous { .. } => "‹ Previous".to_string(),
                PageLink::Page {
                    page,
                    is_current: true,
                } => format!("[{}]", page),
                PageLink::Page { page, .. } => page.to_string(),
                PageLink::Ellipsis => "…".to_string(),
                PageLink::Next { .. } => "Next ›".to_string(),
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}
