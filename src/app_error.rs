use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use std::fmt;

use crate::error::GifError;

// Application-level errors returned by the HTTP handlers
#[derive(Debug)]
pub enum AppError {
    Anyhow(anyhow::Error),

    // Failures talking to Tenor, the preview host or the blob store
    Gif(GifError),
    NotFound(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Gif(GifError::UpstreamHttp { .. }) => StatusCode::BAD_GATEWAY,
            AppError::Gif(GifError::Network { timed_out: true, .. }) => {
                StatusCode::GATEWAY_TIMEOUT
            }
            AppError::Gif(GifError::Network { .. }) => StatusCode::BAD_GATEWAY,
            AppError::Gif(GifError::PreviewTooLarge { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Gif(GifError::Transcode(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Gif(GifError::MalformedResponse(_)) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn sentry_level(&self) -> sentry::Level {
        match self {
            AppError::Anyhow(_) => sentry::Level::Error,
            AppError::Gif(GifError::UpstreamHttp { .. }) => sentry::Level::Warning,
            AppError::Gif(GifError::Network { .. }) => sentry::Level::Warning,
            AppError::Gif(GifError::PreviewTooLarge { .. }) => sentry::Level::Info,
            AppError::Gif(GifError::Transcode(_)) => sentry::Level::Info,
            AppError::Gif(GifError::MalformedResponse(_)) => sentry::Level::Error,
            AppError::NotFound(_) => sentry::Level::Info,
        }
    }
}

// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        // Log all errors to Sentry
        match &self {
            AppError::Anyhow(err) => {
                sentry::integrations::anyhow::capture_anyhow(err);
            }
            _ => {
                sentry::capture_message(&message, self.sentry_level());
            }
        }
        tracing::warn!("request failed with {}: {}", status, message);

        let body = match &self {
            AppError::Gif(err) if err.upstream_status().is_some() => serde_json::json!({
                "error": message,
                "upstream_status": err.upstream_status(),
            }),
            _ => serde_json::json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Anyhow(err) => write!(f, "Something went wrong: {}", err),
            AppError::Gif(err) => write!(f, "{}", err),
            AppError::NotFound(resource) => write!(f, "{} not found", resource),
        }
    }
}

impl From<GifError> for AppError {
    fn from(err: GifError) -> Self {
        AppError::Gif(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Anyhow(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UpstreamService;

    #[test]
    fn upstream_errors_become_bad_gateway() {
        let err: AppError = GifError::UpstreamHttp {
            service: UpstreamService::BlobStore,
            status: 401,
            status_text: "Unauthorized".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "blob_store error: 401 Unauthorized");
    }

    #[test]
    fn timeouts_become_gateway_timeout() {
        let err: AppError = GifError::Network {
            service: UpstreamService::Preview,
            message: "operation timed out".to_string(),
            timed_out: true,
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn transcode_errors_are_unprocessable() {
        let err: AppError = GifError::Transcode("unsupported format".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
