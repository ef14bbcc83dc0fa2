use crate::app_error::AppError;
use axum::http::Uri;

pub mod gifs;

pub async fn handler_404(uri: Uri) -> AppError {
    AppError::NotFound(format!("route {}", uri.path()))
}
