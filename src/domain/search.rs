use crate::domain::{PeriodError, parse_page};
use serde::Serialize;

/// Parsed `?query=...&page=...` of the search page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub query: String,
    pub page: u32,
}

impl SearchParams {
    pub fn parse(query: Option<&str>, page: Option<&str>) -> Result<Self, PeriodError> {
        Ok(Self {
            query: query.unwrap_or_default().trim().to_string(),
            page: parse_page(page)?,
        })
    }
}
