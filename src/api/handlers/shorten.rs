//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use tracing::{error, info};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::ShortenError;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a link.
///
/// # Endpoint
///
/// `POST /gen`
///
/// # Request Body
///
/// ```json
/// { "link": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "100680",
///   "short_url": "http://localhost:3000/lnk/100680",
///   "link": "https://example.com"
/// }
/// ```
///
/// Submitting the same link again yields a new code.
///
/// # Errors
///
/// - 400 Bad Request if the link is empty
/// - 503 Service Unavailable if storage cannot be reached
/// - 500 Internal Server Error if no free code was found
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let code = state
        .link_service
        .shorten(&payload.link)
        .await
        .inspect_err(|e| {
            if !matches!(e, ShortenError::EmptyLink | ShortenError::NulInLink) {
                error!("Failed to shorten link: {}", e);
            }
        })?;

    info!(code = %code, "Created short link");

    let short_url = state.link_service.short_url(&state.base_url, &code);

    Ok(Json(ShortenResponse {
        code,
        short_url,
        link: payload.link,
    }))
}
