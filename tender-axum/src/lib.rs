#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the tender-core crate.
//! [tender_core]: https://docs.rs/tender_core/latest/tender_core/index.html
#![doc = include_str!("../README.md")]

mod bid_routes;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json};
use headers::{Authorization, authorization::Bearer};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tender_core::ports::{Application, Repository};

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

pub mod error;

mod extract;

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Construct the API router together with its OpenAPI description.
pub fn router_with_docs<T: ApiApplication>(
    state: T,
    config: AxumConfig,
) -> (axum::Router, Arc<OpenApi>) {
    let mut api = OpenApi::default();
    let router = ApiRouter::new()
        .api_route("/health", get(health_check))
        .nest("/tenders", bid_routes::router())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs);

    // The served document and the returned one share an allocation.
    let api = Arc::new(api);
    let router = router
        .layer(Extension(api.clone()))
        .layer(Extension(Arc::new(config)))
        .with_state(state);
    (router, api)
}

/// Construct a full API router with the given state and config
pub fn router<T: ApiApplication>(state: T, config: AxumConfig) -> axum::Router {
    router_with_docs(state, config).0
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiApplication>(
    config: AxumConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    let service = router(app, config);
    axum::serve(listener, service).await
}

/// Shorthand for the instant type of an application's storage backend.
pub(crate) type DateTimeOf<T> = <<T as Application>::Repository as Repository>::DateTime;

/// Axum imposes all sorts of constraints on what can pass for state. This
/// trait, coupled with a blanket implementation, specifies it all upfront and
/// in one place. If a function takes a generic `T: ApiApplication`, then
/// everything one might reasonably want to do should work.
pub trait ApiApplication:
    Clone
    + Send
    + Sync
    + 'static
    + Application<
        Context = Authorization<Bearer>,
        Repository: Clone
                        + Send
                        + Sync
                        + 'static
                        + Repository<DateTime: Serialize + DeserializeOwned + JsonSchema>,
    >
{
}

// this is the blanket implementation
impl<T: Clone + Send + Sync + 'static> ApiApplication for T where
    T: Application<
            Context = Authorization<Bearer>,
            Repository: Clone
                            + Send
                            + Sync
                            + 'static
                            + Repository<DateTime: Serialize + DeserializeOwned + JsonSchema>,
        >
{
}
