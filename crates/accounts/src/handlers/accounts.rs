//! Account lookup handlers.

use accounts_db::{Store, models::Account};
use axum::{
    Extension,
    extract::{Path, Query},
    response::Json,
};
use tracing::info;

use crate::errors::AppError;

use super::pagination::{PaginatedResponse, PaginationQuery};

/// List accounts ordered by account number.
#[utoipa::path(
    get,
    path = "/accounts",
    tag = "accounts",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of accounts", body = PaginatedResponse<Account>),
        (status = 400, description = "Invalid pagination parameters")
    )
)]
pub async fn list_accounts(
    Extension(store): Extension<Store>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<PaginatedResponse<Account>>, AppError> {
    query.validate()?;

    let items = store.list_accounts(query.limit, query.offset).await?;
    let total_count = store.count_accounts().await?;

    Ok(Json(PaginatedResponse::new(
        items,
        total_count,
        query.limit,
        query.offset,
    )))
}

/// Fetch a single account by its number.
#[utoipa::path(
    get,
    path = "/accounts/{number}",
    tag = "accounts",
    params(
        ("number" = String, Path, description = "Account number")
    ),
    responses(
        (status = 200, description = "The account", body = Account),
        (status = 404, description = "No such account")
    )
)]
pub async fn get_account(
    Extension(store): Extension<Store>,
    Path(number): Path<String>,
) -> Result<Json<Account>, AppError> {
    info!("accounts-service byNumber() invoked: {number}");

    let account = store.find_by_number(&number).await?;
    let account = account.ok_or(AppError::AccountNotFound(number))?;

    Ok(Json(account))
}

/// Fetch accounts whose owner name contains the given text, ignoring case.
#[utoipa::path(
    get,
    path = "/accounts/owner/{name}",
    tag = "accounts",
    params(
        ("name" = String, Path, description = "Full or partial owner name")
    ),
    responses(
        (status = 200, description = "Matching accounts", body = Vec<Account>),
        (status = 404, description = "No account matches")
    )
)]
pub async fn get_accounts_by_owner(
    Extension(store): Extension<Store>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Account>>, AppError> {
    info!("accounts-service byOwner() invoked: {name}");

    let accounts = store.find_by_owner(&name).await?;
    info!("accounts-service byOwner() found: {}", accounts.len());

    if accounts.is_empty() {
        return Err(AppError::AccountNotFound(name));
    }

    Ok(Json(accounts))
}
