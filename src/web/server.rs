use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_cors: bool,
    pub max_solutions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            enable_cors: true,
            max_solutions: 1000,
        }
    }
}

/// Build the application router for a configuration
pub fn build_app(config: &ServerConfig) -> Router {
    let app_state = AppState::with_capacity(config.max_solutions);
    let app = Router::new().merge(create_router());

    let app = if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    };

    app.with_state(app_state)
}

/// Start the web server
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    start_server_with_config(ServerConfig {
        port,
        ..Default::default()
    })
    .await
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Shortest-path server starting on http://{}", addr);
    info!("Solve graphs with POST http://{}/api/solve", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
