//! Page shell wrapped around rendered fragments

use super::escape::escape_into;

/// Embeds a fragment into a complete document
pub trait Layout: Send + Sync {
    fn wrap(&self, title: &str, body: &str) -> String;
}

/// Minimal admin page shell
#[derive(Debug, Clone)]
pub struct AdminLayout {
    site_name: String,
}

impl AdminLayout {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
        }
    }
}

impl Default for AdminLayout {
    fn default() -> Self {
        Self::new("Node Admin")
    }
}

impl Layout for AdminLayout {
    fn wrap(&self, title: &str, body: &str) -> String {
        let mut out = String::with_capacity(body.len() + 512);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>");
        escape_into(&mut out, title);
        out.push_str(" | ");
        escape_into(&mut out, &self.site_name);
        out.push_str("</title>\n</head>\n<body>\n<header><h1>");
        escape_into(&mut out, &self.site_name);
        out.push_str("</h1></header>\n<main>\n<h2>");
        escape_into(&mut out, title);
        out.push_str("</h2>\n");
        out.push_str(body);
        out.push_str("\n</main>\n</body>\n</html>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_embeds_body_verbatim() {
        let html = AdminLayout::default().wrap("List of Nodes", "<table></table>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>List of Nodes | Node Admin</title>"));
        assert!(html.contains("<table></table>"));
    }

    #[test]
    fn test_title_escaped() {
        let html = AdminLayout::new("A&B").wrap("<x>", "");
        assert!(html.contains("&lt;x&gt; | A&amp;B"));
    }
}
