//! nodeadmin - administrative node listing with bulk spam flagging
//!
//! The core is [`view::NodeListView`], which renders one page of node
//! snapshots as an HTML fragment. The rest of the crate hosts it: an
//! in-memory catalogue, CSRF tokens for the selection form, an axum
//! server and a CLI.

pub mod cli;
pub mod config;
pub mod csrf;
pub mod errors;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod spam;
pub mod store;
pub mod view;

pub use errors::{AdminError, AdminResult};
pub use model::{FieldValue, Node, Page, PageStatus, User};
