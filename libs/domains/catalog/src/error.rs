use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Remote product service error: {0}")]
    Remote(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// The invalid-argument condition raised when a required id is missing,
    /// empty or whitespace-only.
    pub fn missing_product_id() -> Self {
        CatalogError::InvalidArgument("Product ID is required".to_string())
    }
}

/// Convert CatalogError to AppError for standardized error responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidArgument(msg) => AppError::BadRequest(msg),
            CatalogError::Configuration(msg) => {
                AppError::InternalServerError(format!("Configuration error: {}", msg))
            }
            CatalogError::Remote(msg) => AppError::BadGateway(msg),
            CatalogError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Remote(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_invalid_argument_message_is_verbatim() {
        let err = CatalogError::missing_product_id();
        assert_eq!(err.to_string(), "Product ID is required");
    }

    #[test]
    fn test_invalid_argument_maps_to_400() {
        let response = CatalogError::missing_product_id().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_configuration_maps_to_500() {
        let response =
            CatalogError::Configuration("missing use case".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_remote_maps_to_502() {
        let response = CatalogError::Remote("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
