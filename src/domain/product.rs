use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ProductCategory,
    pub comments_count: u32,
    pub views_count: u32,
    pub votes_count: u32,
}

impl Product {
    /// Case-insensitive match against name and description
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

/// Categories a product can be submitted under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    DeveloperTools,
    DesignTools,
    ProductivityTools,
    MarketingTools,
    Other,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::DeveloperTools,
        ProductCategory::DesignTools,
        ProductCategory::ProductivityTools,
        ProductCategory::MarketingTools,
        ProductCategory::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Self::DeveloperTools => "developer-tools",
            Self::DesignTools => "design-tools",
            Self::ProductivityTools => "productivity-tools",
            Self::MarketingTools => "marketing-tools",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DeveloperTools => "Developer Tools",
            Self::DesignTools => "Design Tools",
            Self::ProductivityTools => "Productivity Tools",
            Self::MarketingTools => "Marketing Tools",
            Self::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: ProductCategory,
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn new(id: ProductCategory, description: impl Into<String>) -> Self {
        Self {
            id,
            name: id.label().to_string(),
            description: description.into(),
        }
    }
}
