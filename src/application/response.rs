use crate::domain::{ErrorPayload, PeriodError};
use log::{debug, error};
use serde::Serialize;
use thiserror::Error;

pub const FOUND: u16 = 302;
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Failure while building a page
#[derive(Debug, Error)]
pub enum PageError {
    /// A request the route itself rejects, shown with its code and message
    #[error(transparent)]
    Route(#[from] PeriodError),

    /// Anything unexpected, shown as a generic fallback
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Outcome of handling one request, as a web front-end would see it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response<T> {
    Page { body: T },
    Redirect { status: u16, location: String },
    Error {
        status: u16,
        payload: Option<ErrorPayload>,
    },
}

impl<T> Response<T> {
    pub fn page(body: T) -> Self {
        Self::Page { body }
    }

    pub fn redirect(location: impl Into<String>) -> Self {
        Self::Redirect {
            status: FOUND,
            location: location.into(),
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            Self::Page { .. } => 200,
            Self::Redirect { status, .. } | Self::Error { status, .. } => *status,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn body(&self) -> Option<&T> {
        match self {
            Self::Page { body } => Some(body),
            _ => None,
        }
    }

    pub fn into_body(self) -> Option<T> {
        match self {
            Self::Page { body } => Some(body),
            _ => None,
        }
    }

    pub fn from_result(result: Result<T, PageError>) -> Self {
        match result {
            Ok(body) => Self::page(body),
            Err(e) => e.into(),
        }
    }
}

impl<T> From<PageError> for Response<T> {
    fn from(err: PageError) -> Self {
        match err {
            PageError::Route(e) => {
                debug!("Rejected request: {} ({})", e, e.error_code());
                Self::Error {
                    status: e.status(),
                    payload: e.payload(),
                }
            }
            PageError::Unexpected(e) => {
                error!("Unexpected failure while building page: {:#}", e);
                Self::Error {
                    status: INTERNAL_SERVER_ERROR,
                    payload: None,
                }
            }
        }
    }
}

impl<T> From<PeriodError> for Response<T> {
    fn from(err: PeriodError) -> Self {
        PageError::Route(err).into()
    }
}

/// Text shown in place of a page that failed: `"{message} / {error_code}"`
/// for rejected requests, a generic line for anything else
pub fn render_error_boundary(status: u16, payload: Option<&ErrorPayload>) -> String {
    match payload {
        Some(payload) => format!("{} / {}", payload.message, payload.error_code),
        None if status == INTERNAL_SERVER_ERROR => "Unknown error".to_string(),
        None => format!("Request failed with status {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_error_becomes_bad_request() {
        let response: Response<()> = PeriodError::InvalidDate.into();
        assert_eq!(response.status(), 400);
        match &response {
            Response::Error { payload, .. } => {
                let payload = payload.as_ref().unwrap();
                assert_eq!(payload.error_code, "invalid_date");
                assert_eq!(render_error_boundary(400, Some(payload)), "Invalid date / invalid_date");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_unexpected_error_is_generic() {
        let response: Response<()> = PageError::Unexpected(anyhow::anyhow!("disk on fire")).into();
        assert_eq!(
            response,
            Response::Error {
                status: 500,
                payload: None
            }
        );
        assert_eq!(render_error_boundary(500, None), "Unknown error");
    }

    #[test]
    fn test_redirect_serializes() {
        let response: Response<()> = Response::redirect("/products/leaderboards/yearly/2024");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "redirect");
        assert_eq!(json["status"], 302);
        assert_eq!(json["location"], "/products/leaderboards/yearly/2024");
    }

    #[test]
    fn test_invalid_period_name_has_empty_body() {
        let response: Response<()> = PeriodError::InvalidPeriodName("hourly".to_string()).into();
        assert_eq!(response, Response::Error { status: 400, payload: None });
        assert_eq!(render_error_boundary(400, None), "Request failed with status 400");
    }
}
