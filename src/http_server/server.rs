//! # HTTP Server
//!
//! Combines the admin and health routers behind the access log. CORS is
//! only layered on when origins are configured.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::AdminConfig;
use crate::observability::{log_requests, Logger};

use super::admin_routes::admin_routes;
use super::observability_routes::health_routes;
use super::state::AdminState;

/// HTTP server for the admin pages
pub struct HttpServer {
    config: AdminConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given state
    pub fn new(config: AdminConfig, state: Arc<AdminState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router
    pub fn build_router(config: &AdminConfig, state: Arc<AdminState>) -> Router {
        let router = Router::new()
            .merge(health_routes())
            .merge(admin_routes(state))
            .layer(middleware::from_fn(log_requests));

        if config.cors_origins.is_empty() {
            return router;
        }

        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        router.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any),
        )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let addr_str = addr.to_string();
        Logger::info(
            "SERVER_START",
            &[("addr", addr_str.as_str()), ("listing", "/admin/nodes/")],
        );

        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(AdminConfig::default(), Arc::new(AdminState::default()));
        assert_eq!(server.socket_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::new(AdminConfig::with_port(8080), Arc::new(AdminState::default()));
        assert_eq!(server.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_router_builds_with_origins() {
        let config = AdminConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::new(config, Arc::new(AdminState::default())).router();
    }
}
