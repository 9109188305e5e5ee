use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BAD_REQUEST: u16 = 400;

/// Reasons a leaderboard period request is rejected.
///
/// All of these are terminal for the request and surface as a 400.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// A component is missing or is not an integer
    #[error("Invalid params")]
    InvalidParams,

    /// The components do not name a real calendar day, week, month or year
    #[error("Invalid date")]
    InvalidDate,

    /// The period has not started yet in the reference time zone
    #[error("Future date")]
    FutureDate,

    #[error("Invalid period name: {0}")]
    InvalidPeriodName(String),
}

impl PeriodError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidParams => "invalid_params",
            Self::InvalidDate => "invalid_date",
            Self::FutureDate => "future_date",
            Self::InvalidPeriodName(_) => "invalid_period_name",
        }
    }

    pub fn status(&self) -> u16 {
        BAD_REQUEST
    }

    /// Body sent alongside the status. Unmapped period names get an empty body.
    pub fn payload(&self) -> Option<ErrorPayload> {
        match self {
            Self::InvalidPeriodName(_) => None,
            _ => Some(ErrorPayload::new(self.error_code(), self.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error_code: String,
    pub message: String,
}

impl ErrorPayload {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payloads() {
        let payload = PeriodError::FutureDate.payload().unwrap();
        assert_eq!(payload, ErrorPayload::new("future_date", "Future date"));

        let json = serde_json::to_string(&PeriodError::InvalidParams.payload().unwrap()).unwrap();
        assert_eq!(json, r#"{"error_code":"invalid_params","message":"Invalid params"}"#);
    }

    #[test]
    fn test_unmapped_period_has_no_body() {
        let err = PeriodError::InvalidPeriodName("biweekly".to_string());
        assert_eq!(err.status(), 400);
        assert!(err.payload().is_none());
    }
}
