//! Observability for the admin service
//!
//! Structured JSON logging and per-request access logs.
//!
//! ```ignore
//! use nodeadmin::observability::Logger;
//!
//! Logger::info("SPAM_CONFIRMED", &[("count", "3")]);
//! ```

mod logger;
mod request_log;

pub use logger::{Logger, Severity};
pub use request_log::log_requests;
