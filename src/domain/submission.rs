use crate::domain::ProductCategory;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_NAME_LEN: usize = 100;

/// Submit form exactly as it arrives, every field optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub category: Option<String>,
}

/// A product submission that passed form validation. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub description: String,
    pub url: String,
    pub category: ProductCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum SubmissionError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("name must be at most {max} characters")]
    NameTooLong { max: usize },

    #[error("url must start with http:// or https://")]
    InvalidUrl,

    #[error("unknown category: {value}")]
    UnknownCategory { value: String },
}

impl SubmissionForm {
    /// Check every field and report all problems at once
    pub fn validate(&self) -> Result<Submission, Vec<SubmissionError>> {
        let mut errors = Vec::new();

        let name = required(&self.name, "name", &mut errors);
        let description = required(&self.description, "description", &mut errors);
        let url = required(&self.url, "url", &mut errors);
        let category = required(&self.category, "category", &mut errors);

        if let Some(name) = name {
            if name.chars().count() > MAX_NAME_LEN {
                errors.push(SubmissionError::NameTooLong { max: MAX_NAME_LEN });
            }
        }

        if let Some(url) = url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                errors.push(SubmissionError::InvalidUrl);
            }
        }

        let category = category.and_then(|value| {
            let parsed = ProductCategory::from_value(value);
            if parsed.is_none() {
                errors.push(SubmissionError::UnknownCategory {
                    value: value.to_string(),
                });
            }
            parsed
        });

        match (name, description, url, category) {
            (Some(name), Some(description), Some(url), Some(category)) if errors.is_empty() => {
                Ok(Submission {
                    name: name.to_string(),
                    description: description.to_string(),
                    url: url.to_string(),
                    category,
                })
            }
            _ => Err(errors),
        }
    }
}

fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
    errors: &mut Vec<SubmissionError>,
) -> Option<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            errors.push(SubmissionError::Missing { field });
            None
        }
    }
}
