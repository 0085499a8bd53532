//! Health check and data set statistics handlers.

use accounts_db::{Store, models::Stats};
use axum::{Extension, http::StatusCode, response::Json};

use crate::errors::AppError;

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "stats",
    responses(
        (status = 200, description = "Health check passed")
    )
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get the number of accounts in the store.
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Data set statistics", body = Stats)
    )
)]
pub async fn get_stats(Extension(store): Extension<Store>) -> Result<Json<Stats>, AppError> {
    let account_count = store.count_accounts().await?;
    Ok(Json(Stats { account_count }))
}
