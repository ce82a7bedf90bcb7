use crate::error::{Result, ServiceError};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use cnol_badge::{is_filename_safe, BadgeRequest, UserRecord};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// RFC 5987 `attr-char` punctuation left unescaped in `filename*`.
const FILENAME_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Builds the attachment header for a badge.
///
/// Identifiers that are not plain tokens get a slugged `filename` for old
/// clients plus an RFC 6266 `filename*` carrying the exact identifier.
pub fn content_disposition(record: &UserRecord) -> Result<HeaderValue> {
    let mut value = format!("attachment; filename={}", record.filename());
    if !is_filename_safe(record.identifier()) {
        let exact = format!("badge-{}.pdf", record.identifier());
        value.push_str("; filename*=UTF-8''");
        value.extend(utf8_percent_encode(&exact, FILENAME_ESCAPE));
    }
    HeaderValue::from_str(&value).map_err(|e| ServiceError::Internal(e.to_string()))
}

/// Renders a badge and returns it as a PDF attachment.
///
/// Requests are validated before waiting for a render slot, so malformed or
/// incomplete bodies are rejected immediately.
pub async fn generate_badge(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BadgeRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(request) = payload.map_err(ServiceError::from)?;
    let record = UserRecord::try_from(request)?;
    tracing::info!("Badge request for '{}'", record.identifier());

    // 1. Acquire a render slot (waits if too many renders are in flight)
    let permit = state
        .render_semaphore
        .clone()
        .acquire_owned()
        .await
        .map_err(|_| ServiceError::ServiceOverloaded)?;

    // 2. Render on the blocking pool; the permit is held until it finishes
    let generator = state.generator.clone();
    let filename = record.filename();
    let disposition = content_disposition(&record)?;
    let pdf_bytes = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        generator.render(&record)
    })
    .await
    .map_err(|e| ServiceError::Internal(format!("render task failed: {}", e)))??;

    tracing::info!("Badge '{}' ready ({} bytes)", filename, pdf_bytes.len());

    // 3. Return PDF as an attachment
    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/pdf"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf_bytes,
    ))
}
