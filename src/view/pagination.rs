//! Pagination control rendered above the node table

use crate::model::PageStatus;

use super::escape::escape_into;

/// Renders navigation for a page of results
pub trait PaginationControl: Send + Sync {
    fn render(&self, status: &PageStatus) -> String;
}

/// "Page N of M" with first/previous/next/last links using `?page=N`
#[derive(Debug, Clone, Default)]
pub struct NumberedPagination {
    /// Path the links point at; empty keeps them relative to the current page
    base: String,
    /// Query pairs carried into every link (e.g. `show_title=false`)
    extra_query: Vec<(String, String)>,
}

impl NumberedPagination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point every link at `path` instead of the current page
    pub fn with_base(mut self, path: impl Into<String>) -> Self {
        self.base = path.into();
        self
    }

    /// Keep a query parameter on every generated link
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_query.push((key.into(), value.into()));
        self
    }

    fn href(&self, page: usize) -> String {
        let mut href = format!("{}?page={}", self.base, page);
        for (k, v) in &self.extra_query {
            href.push('&');
            href.push_str(k);
            href.push('=');
            href.push_str(v);
        }
        href
    }

    fn link(&self, out: &mut String, page: usize, label: &str, class: &str) {
        out.push_str("<a class=\"");
        out.push_str(class);
        out.push_str("\" href=\"");
        escape_into(out, &self.href(page));
        out.push_str("\">");
        out.push_str(label);
        out.push_str("</a>");
    }
}

impl PaginationControl for NumberedPagination {
    fn render(&self, status: &PageStatus) -> String {
        let mut out = String::with_capacity(256);
        out.push_str("<div class=\"pagination\"><span class=\"step-links\">");

        if let Some(prev) = status.previous_number() {
            self.link(&mut out, 1, "&laquo; first", "first");
            self.link(&mut out, prev, "previous", "previous");
        }

        out.push_str(&format!(
            "<span class=\"current\">Page {} of {}</span>",
            status.number, status.num_pages
        ));

        if let Some(next) = status.next_number() {
            self.link(&mut out, next, "next", "next");
            self.link(&mut out, status.num_pages, "last &raquo;", "last");
        }

        out.push_str(&format!(
            "</span><span class=\"count\">{} total</span></div>",
            status.total_count
        ));
        out
    }
}
