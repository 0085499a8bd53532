pub mod config;
pub mod errors;
pub mod handlers;
pub mod request_id;

use accounts_db::{
    Store,
    models::{Account, Stats},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{get_account, get_accounts_by_owner, get_stats, health_check, list_accounts},
    request_id::request_id_middleware,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health_check,
        handlers::get_stats,
        handlers::list_accounts,
        handlers::get_account,
        handlers::get_accounts_by_owner,
    ),
    components(schemas(Account, Stats)),
    tags(
        (name = "accounts", description = "Account lookups"),
        (name = "stats", description = "Health and data set statistics")
    )
)]
pub struct ApiDoc;

pub fn create_router(store: Store) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/stats", get(get_stats))
        // Account routes
        .route("/accounts", get(list_accounts))
        .route("/accounts/{number}", get(get_account))
        .route("/accounts/owner/{name}", get(get_accounts_by_owner))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(Extension(store))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(CompressionLayer::new())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}

pub async fn run_server(store: Store, port: u16) -> anyhow::Result<()> {
    let app = create_router(store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    tracing::info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
