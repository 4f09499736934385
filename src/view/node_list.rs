//! Node listing table
//!
//! Renders one page of nodes as an HTML fragment: the pagination control,
//! the metadata table and, when a form action is configured, the
//! checkbox selection form with its spam confirmation dialog.
//!
//! Column layout:
//!
//! | column       | present when           | content                          |
//! |--------------|------------------------|----------------------------------|
//! | select       | `form_action` is set   | checkbox named after the node id |
//! | GUID         | always                 | link to the node                 |
//! | Title        | `show_title`           | title text, empty when absent    |
//! | Parent, Root | always                 | `None` or a link to the node     |
//! | Date created | always                 | [`DateStyle`] formatted          |
//! | Public, Withdrawn, Embargo | always   | raw [`FieldValue`]               |
//! | Contributors | always                 | user links joined by `", "`      |
//!
//! [`FieldValue`]: crate::model::FieldValue

use std::sync::Arc;

use crate::csrf::CSRF_FIELD;
use crate::model::{Node, Page};

use super::dates::DateStyle;
use super::escape::escape_into;
use super::pagination::{NumberedPagination, PaginationControl};
use super::resolver::{PathResolver, UrlResolver};
use super::script::{
    selection_script, CANCEL_BUTTON_ID, CONFIRM_BUTTON_ID, DIALOG_ID, ROW_CHECKBOX_CLASS,
    SELECT_ALL_ID,
};

/// Text shown in place of a missing parent or root
pub const ABSENT: &str = "None";

/// Per-request switches for the listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeListOptions {
    /// Include the Title column
    pub show_title: bool,
    /// Include the selection form, posting to this URL
    pub form_action: Option<String>,
}

impl NodeListOptions {
    pub fn new(show_title: bool) -> Self {
        Self {
            show_title,
            form_action: None,
        }
    }

    pub fn with_form_action(mut self, action: impl Into<String>) -> Self {
        self.form_action = Some(action.into());
        self
    }
}

/// Stateless renderer for a page of nodes
#[derive(Clone)]
pub struct NodeListView {
    resolver: Arc<dyn UrlResolver>,
    pagination: Arc<dyn PaginationControl>,
    date_style: DateStyle,
}

impl NodeListView {
    pub fn new(
        resolver: Arc<dyn UrlResolver>,
        pagination: Arc<dyn PaginationControl>,
        date_style: DateStyle,
    ) -> Self {
        Self {
            resolver,
            pagination,
            date_style,
        }
    }

    /// Same view with a different pagination control
    pub fn with_pagination(mut self, pagination: Arc<dyn PaginationControl>) -> Self {
        self.pagination = pagination;
        self
    }

    /// Render the fragment.
    ///
    /// `csrf_token` fills the hidden field inside the confirmation dialog;
    /// it is ignored when `options.form_action` is `None`.
    pub fn render(&self, page: &Page, options: &NodeListOptions, csrf_token: Option<&str>) -> String {
        let mut out = String::with_capacity(1024 + page.nodes.len() * 512);
        let selectable = options.form_action.is_some();

        out.push_str("<div class=\"node-list\">\n");
        out.push_str(&self.pagination.render(&page.status));
        out.push('\n');

        if let Some(action) = &options.form_action {
            out.push_str("<form id=\"spam-form\" method=\"post\" action=\"");
            escape_into(&mut out, action);
            out.push_str("\">\n");
        }

        out.push_str("<table class=\"table table-striped\">\n<thead><tr>");
        if selectable {
            out.push_str(&format!(
                "<th><input type=\"checkbox\" id=\"{}\"></th>",
                SELECT_ALL_ID
            ));
        }
        out.push_str("<th>GUID</th>");
        if options.show_title {
            out.push_str("<th>Title</th>");
        }
        out.push_str(
            "<th>Parent</th><th>Root</th><th>Date created</th><th>Public</th>\
             <th>Withdrawn</th><th>Embargo</th><th>Contributors</th></tr></thead>\n<tbody>\n",
        );

        for node in &page.nodes {
            self.render_row(&mut out, node, options.show_title, selectable);
        }
        out.push_str("</tbody>\n</table>\n");

        if selectable {
            self.render_confirmation(&mut out, csrf_token.unwrap_or(""));
            out.push_str("</form>\n");
            out.push_str(&selection_script());
            out.push('\n');
        }

        out.push_str("</div>");
        out
    }

    fn render_row(&self, out: &mut String, node: &Node, show_title: bool, selectable: bool) {
        out.push_str("<tr>");

        if selectable {
            out.push_str(&format!(
                "<td><input type=\"checkbox\" class=\"{}\" name=\"",
                ROW_CHECKBOX_CLASS
            ));
            escape_into(out, &node.id);
            out.push_str("\"></td>");
        }

        out.push_str("<td>");
        self.node_link(out, &node.id);
        out.push_str("</td>");

        if show_title {
            out.push_str("<td>");
            if let Some(title) = &node.title {
                escape_into(out, title);
            }
            out.push_str("</td>");
        }

        self.reference_cell(out, node.parent.as_deref());
        self.reference_cell(out, node.root.as_deref());

        out.push_str("<td>");
        escape_into(out, &self.date_style.format(&node.date_created));
        out.push_str("</td>");

        for value in [&node.public, &node.retraction, &node.embargo] {
            out.push_str("<td>");
            escape_into(out, &value.to_string());
            out.push_str("</td>");
        }

        out.push_str("<td>");
        for (i, user) in node.contributors.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str("<a href=\"");
            escape_into(out, &self.resolver.user_url(&user.id));
            out.push_str("\">");
            escape_into(out, &user.id);
            out.push_str("</a>");
        }
        out.push_str("</td></tr>\n");
    }

    fn reference_cell(&self, out: &mut String, id: Option<&str>) {
        out.push_str("<td>");
        match id {
            Some(id) => self.node_link(out, id),
            None => out.push_str(ABSENT),
        }
        out.push_str("</td>");
    }

    fn node_link(&self, out: &mut String, id: &str) {
        out.push_str("<a href=\"");
        escape_into(out, &self.resolver.node_url(id));
        out.push_str("\">");
        escape_into(out, id);
        out.push_str("</a>");
    }

    fn render_confirmation(&self, out: &mut String, csrf_token: &str) {
        out.push_str(&format!(
            "<button type=\"button\" id=\"{}\" class=\"btn btn-danger\">Confirm Spam</button>\n",
            CONFIRM_BUTTON_ID
        ));
        out.push_str(&format!("<dialog id=\"{}\">\n", DIALOG_ID));
        out.push_str("<p>Are you sure you want to mark the selected nodes as spam?</p>\n");
        out.push_str(&format!(
            "<input type=\"hidden\" name=\"{}\" value=\"",
            CSRF_FIELD
        ));
        escape_into(out, csrf_token);
        out.push_str("\">\n");
        out.push_str("<button type=\"submit\" class=\"btn btn-danger\">Confirm</button>\n");
        out.push_str(&format!(
            "<button type=\"button\" id=\"{}\" class=\"btn btn-default\">Cancel</button>\n",
            CANCEL_BUTTON_ID
        ));
        out.push_str("</dialog>\n");
    }
}

impl Default for NodeListView {
    fn default() -> Self {
        Self::new(
            Arc::new(PathResolver::default()),
            Arc::new(NumberedPagination::new()),
            DateStyle::default(),
        )
    }
}
