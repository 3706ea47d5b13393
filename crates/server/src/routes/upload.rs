//! Image upload handler.
//!
//! Accepts a single multipart file field, stores it under the configured
//! upload directory as `{field_name}_{unix_millis}{extension}`, and returns
//! the URL it will be served from (`/images/...`, mounted in main).

use std::path::Path;

use axum::{
    Json,
    extract::{Multipart, State},
};
use chrono::Utc;
use serde::Serialize;
use url::Url;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Field name clients use for the uploaded file.
const UPLOAD_FIELD: &str = "product";

/// Response carrying the served URL of an uploaded image.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub image_url: String,
}

/// `POST /upload` - store one uploaded file and return its URL.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let field = multipart
        .next_field()
        .await
        .map_err(|err| AppError::Upload(err.to_string()))?
        .ok_or_else(|| AppError::Validation("expected a single file field".to_owned()))?;

    let field_name = field.name().unwrap_or(UPLOAD_FIELD).to_owned();
    let original_name = field.file_name().map(ToOwned::to_owned);
    let data = field
        .bytes()
        .await
        .map_err(|err| AppError::Upload(err.to_string()))?;

    let filename = stored_filename(
        &field_name,
        original_name.as_deref(),
        Utc::now().timestamp_millis(),
    );

    let path = state.config().upload_dir.join(&filename);
    tokio::fs::write(&path, &data)
        .await
        .map_err(|err| AppError::Upload(err.to_string()))?;

    tracing::info!(file = %filename, bytes = data.len(), "image uploaded");

    Ok(Json(UploadResponse {
        success: true,
        image_url: image_url(&state.config().public_base_url, &filename),
    }))
}

/// Filename an upload is stored under: field name, upload timestamp, and
/// the original extension (if any).
fn stored_filename(field_name: &str, original_name: Option<&str>, unix_millis: i64) -> String {
    let extension = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    format!("{field_name}_{unix_millis}{extension}")
}

/// Public URL an uploaded file is served from.
fn image_url(base: &Url, filename: &str) -> String {
    format!("{}/images/{filename}", base.as_str().trim_end_matches('/'))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_filename_keeps_extension() {
        assert_eq!(
            stored_filename("product", Some("shirt.png"), 1700000000000),
            "product_1700000000000.png"
        );
    }

    #[test]
    fn test_stored_filename_without_extension() {
        assert_eq!(
            stored_filename("product", Some("shirt"), 1700000000000),
            "product_1700000000000"
        );
        assert_eq!(
            stored_filename("product", None, 1700000000000),
            "product_1700000000000"
        );
    }

    #[test]
    fn test_image_url_joins_cleanly() {
        let base = Url::parse("http://localhost:4000").unwrap();
        assert_eq!(
            image_url(&base, "product_1.png"),
            "http://localhost:4000/images/product_1.png"
        );

        let with_slash = Url::parse("https://shop.thaam.example/").unwrap();
        assert_eq!(
            image_url(&with_slash, "product_1.png"),
            "https://shop.thaam.example/images/product_1.png"
        );
    }
}
