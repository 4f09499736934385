//! # HTTP Server Module
//!
//! Serves the admin listing pages.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/admin/nodes/` - Node listing
//! - `/admin/spam/` - Node listing with the spam selection form
//! - `/admin/spam/confirm/` - Spam form target (POST)
//! - `/admin/nodes/:id/`, `/admin/users/:id/` - Link targets (JSON)

pub mod admin_routes;
pub mod observability_routes;
pub mod server;
pub mod state;

pub use admin_routes::{SPAM_CONFIRM_PATH, SPAM_LIST_PATH};
pub use server::HttpServer;
pub use state::AdminState;
