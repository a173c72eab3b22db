
mod config;
mod error;
mod model;
mod web;

pub mod _dev_utils;

pub use self::error::{Error, Result};
pub use config::config;

use crate::model::ModelManager;
use crate::web::mw_res_map::mw_response_map;
use crate::web::{rest, routes_static};
use axum::http::{header, HeaderValue, Method};
use axum::{middleware, Router};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mm = ModelManager::new().await?;

    let routes_all = Router::new()
        .merge(rest::routes(mm.clone()))
        .layer(middleware::map_response(mw_response_map))
        .layer(cors_layer()?)
        .fallback_service(routes_static::serve_dir());

    let addr = SocketAddr::from(([0, 0, 0, 0], config().WEB_PORT));
    info!("{:<12} - {addr}\n", "LISTENING");
    info!("{:<12} - {}", "DATA_FILE", config().DATA_FILE);
    info!(
        "{:<12} - {}",
        "CORS",
        config().CORS_ORIGIN.as_deref().unwrap_or("any origin")
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, routes_all).await?;

    Ok(())
}

fn cors_layer() -> Result<CorsLayer> {
    let cors = match &config().CORS_ORIGIN {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .map_err(|_| Error::ConfigWrongFormat("SERVICE_CORS_ORIGIN"))?;
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE])
        }
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Ok(cors)
}
