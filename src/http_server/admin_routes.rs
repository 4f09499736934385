//! Admin HTTP Routes
//!
//! Node listing, spam selection and confirmation, and the node/user
//! resources the listing links to.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::csrf::token_from_cookie_header;
use crate::errors::{AdminError, AdminResult};
use crate::model::Node;
use crate::observability::Logger;
use crate::spam::SpamSubmission;
use crate::view::{NodeListOptions, NumberedPagination};

use super::state::AdminState;

/// Listing with the selection form
pub const SPAM_LIST_PATH: &str = "/admin/spam/";

/// Target of the selection form
pub const SPAM_CONFIRM_PATH: &str = "/admin/spam/confirm/";

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize, Default)]
pub struct ListQuery {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub show_title: Option<bool>,
}

impl ListQuery {
    /// `?page=N&show_title=B` with defaults filled in
    fn to_query_string(&self, default_show_title: bool) -> String {
        format!(
            "?page={}&show_title={}",
            self.page.unwrap_or(1),
            self.show_title.unwrap_or(default_show_title)
        )
    }
}

#[derive(Debug, Serialize)]
pub struct UserNodesResponse {
    pub id: String,
    pub nodes: Vec<Node>,
    pub total: usize,
}

// ==================
// Admin Routes
// ==================

/// Create admin routes; paths are absolute (`/admin/...`)
pub fn admin_routes(state: Arc<AdminState>) -> Router {
    Router::new()
        .route("/admin/nodes/", get(list_nodes_handler))
        .route("/admin/nodes/:id/", get(node_detail_handler))
        .route("/admin/users/:id/", get(user_detail_handler))
        .route(SPAM_LIST_PATH, get(spam_list_handler))
        .route(SPAM_CONFIRM_PATH, post(spam_confirm_handler))
        .with_state(state)
}

// ==================
// Listing Handlers
// ==================

async fn list_nodes_handler(
    State(state): State<Arc<AdminState>>,
    Query(query): Query<ListQuery>,
) -> AdminResult<Html<String>> {
    let show_title = query.show_title.unwrap_or(state.show_title);
    let options = NodeListOptions::new(show_title);
    render_listing(
        &state,
        "/admin/nodes/",
        query.page,
        options,
        "List of Nodes",
        None,
    )
}

/// Same listing with the selection form. The CSRF token goes out both in
/// the form and in a cookie scoped to the spam pages.
async fn spam_list_handler(
    State(state): State<Arc<AdminState>>,
    Query(query): Query<ListQuery>,
) -> AdminResult<impl IntoResponse> {
    let show_title = query.show_title.unwrap_or(state.show_title);
    let action = format!(
        "{}{}",
        SPAM_CONFIRM_PATH,
        query.to_query_string(state.show_title)
    );
    let options = NodeListOptions::new(show_title).with_form_action(action);
    let token = state.csrf.issue();
    let html = render_listing(
        &state,
        SPAM_LIST_PATH,
        query.page,
        options,
        "Flag Spam",
        Some(&token),
    )?;

    let cookie = state.csrf.cookie_header(&token, SPAM_LIST_PATH);
    Ok(([(header::SET_COOKIE, cookie)], html))
}

fn render_listing(
    state: &AdminState,
    base: &str,
    page: Option<usize>,
    options: NodeListOptions,
    title: &str,
    csrf_token: Option<&str>,
) -> AdminResult<Html<String>> {
    let page = state.store.page(page.unwrap_or(1), state.per_page)?;

    let pagination = NumberedPagination::new()
        .with_base(base)
        .with_query("show_title", options.show_title.to_string());
    let view = state.view.clone().with_pagination(Arc::new(pagination));

    let fragment = view.render(&page, &options, csrf_token);
    Ok(Html(state.layout.wrap(title, &fragment)))
}

// ==================
// Spam Confirmation
// ==================

/// Flag the selected nodes, then return to the page the form came from
async fn spam_confirm_handler(
    State(state): State<Arc<AdminState>>,
    Query(query): Query<ListQuery>,
    headers: HeaderMap,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AdminResult<Redirect> {
    let submission = SpamSubmission::from_pairs(pairs).inspect_err(|e| {
        if *e == AdminError::CsrfRejected {
            Logger::warn("CSRF_REJECTED", &[("reason", "missing token")]);
        }
    })?;

    let cookie = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(token_from_cookie_header);
    state
        .csrf
        .verify_pair(&submission.csrf_token, cookie)
        .inspect_err(|_| {
            let reason = if cookie.is_none() {
                "missing cookie"
            } else {
                "token mismatch or expired"
            };
            Logger::warn("CSRF_REJECTED", &[("reason", reason)]);
        })?;

    let flagged = state.store.mark_spam(&submission.node_ids)?;

    let selected = submission.node_ids.len().to_string();
    let flagged = flagged.to_string();
    let ids = submission.node_ids.join(",");
    Logger::info(
        "SPAM_CONFIRMED",
        &[
            ("flagged", flagged.as_str()),
            ("node_ids", ids.as_str()),
            ("selected", selected.as_str()),
        ],
    );

    let location = format!("{}{}", SPAM_LIST_PATH, query.to_query_string(state.show_title));
    Ok(Redirect::to(&location))
}

// ==================
// Resource Handlers
// ==================

async fn node_detail_handler(
    State(state): State<Arc<AdminState>>,
    Path(id): Path<String>,
) -> AdminResult<Json<Node>> {
    state
        .store
        .get(&id)
        .map(Json)
        .ok_or(AdminError::NodeNotFound(id))
}

async fn user_detail_handler(
    State(state): State<Arc<AdminState>>,
    Path(id): Path<String>,
) -> AdminResult<Json<UserNodesResponse>> {
    let nodes = state.store.nodes_for_user(&id);
    if nodes.is_empty() {
        return Err(AdminError::UserNotFound(id));
    }
    Ok(Json(UserNodesResponse {
        total: nodes.len(),
        id,
        nodes,
    }))
}
