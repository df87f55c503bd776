//! Handler for short code lookup.

use axum::extract::{Path, State};
use serde_json::json;
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short code to its original link.
///
/// # Endpoint
///
/// `GET /lnk/{code}`
///
/// # Response
///
/// 200 with the original link as a `text/plain` body, byte for byte as it
/// was submitted.
///
/// # Errors
///
/// - 404 Not Found if the code was never issued
/// - 503 Service Unavailable if storage cannot be reached
pub async fn lookup_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<String, AppError> {
    let link = state
        .link_service
        .lookup(&code)
        .await
        .inspect_err(|e| error!("Failed to look up {}: {}", code, e))?;

    match link {
        Some(link) => {
            debug!("Lookup HIT for {}", code);
            Ok(link)
        }
        None => {
            debug!("Lookup MISS for {}", code);
            Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ))
        }
    }
}
