//! Shared state for the admin routes

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::csrf::CsrfGuard;
use crate::store::{MemoryNodeStore, NodeSource};
use crate::view::{AdminLayout, Layout, NodeListView, NumberedPagination, PathResolver};

/// Everything a request handler needs
pub struct AdminState {
    pub store: Arc<dyn NodeSource>,
    pub view: NodeListView,
    pub layout: Arc<dyn Layout>,
    pub csrf: CsrfGuard,
    pub per_page: usize,
    pub show_title: bool,
}

impl AdminState {
    /// Wire the view, layout and CSRF guard from configuration
    pub fn from_config(config: &AdminConfig, store: Arc<dyn NodeSource>) -> Self {
        let resolver = PathResolver::new(
            config.node_url_prefix.clone(),
            config.user_url_prefix.clone(),
        );
        let view = NodeListView::new(
            Arc::new(resolver),
            Arc::new(NumberedPagination::new()),
            config.date_style.clone(),
        );
        let csrf = match &config.csrf_secret {
            Some(secret) => CsrfGuard::new(secret.as_bytes()),
            None => CsrfGuard::random(),
        }
        .with_max_age(config.csrf_max_age_secs);

        Self {
            store,
            view,
            layout: Arc::new(AdminLayout::default()),
            csrf,
            per_page: config.per_page,
            show_title: config.show_title,
        }
    }
}

impl Default for AdminState {
    fn default() -> Self {
        Self::from_config(&AdminConfig::default(), Arc::new(MemoryNodeStore::new()))
    }
}
