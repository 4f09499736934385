//! Id-to-URL resolution for node and user links

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except RFC 3986 unreserved characters is encoded, so an id
/// always lands in exactly one path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Maps node and user ids to the URLs their links point at
pub trait UrlResolver: Send + Sync {
    /// Detail page for a node
    fn node_url(&self, node_id: &str) -> String;

    /// Profile page for a user
    fn user_url(&self, user_id: &str) -> String;
}

/// Resolver that appends the id to a fixed path prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    node_prefix: String,
    user_prefix: String,
}

impl PathResolver {
    pub fn new(node_prefix: impl Into<String>, user_prefix: impl Into<String>) -> Self {
        Self {
            node_prefix: node_prefix.into(),
            user_prefix: user_prefix.into(),
        }
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new("/admin/nodes/", "/admin/users/")
    }
}

impl UrlResolver for PathResolver {
    fn node_url(&self, node_id: &str) -> String {
        format!("{}{}/", self.node_prefix, utf8_percent_encode(node_id, PATH_SEGMENT))
    }

    fn user_url(&self, user_id: &str) -> String {
        format!("{}{}/", self.user_prefix, utf8_percent_encode(user_id, PATH_SEGMENT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefixes() {
        let resolver = PathResolver::default();
        assert_eq!(resolver.node_url("abc12"), "/admin/nodes/abc12/");
        assert_eq!(resolver.user_url("u1"), "/admin/users/u1/");
    }

    #[test]
    fn test_ids_stay_in_one_segment() {
        let resolver = PathResolver::default();
        assert_eq!(resolver.user_url("a/b"), "/admin/users/a%2Fb/");
        assert_eq!(resolver.node_url("x?y#z w"), "/admin/nodes/x%3Fy%23z%20w/");
        assert_eq!(resolver.node_url("abc.12_~-"), "/admin/nodes/abc.12_~-/");
        assert_eq!(resolver.user_url("é"), "/admin/users/%C3%A9/");
    }

    #[test]
    fn test_custom_prefixes() {
        let resolver = PathResolver::new("https://osf.io/", "https://osf.io/profile/");
        assert_eq!(resolver.node_url("xyz99"), "https://osf.io/xyz99/");
        assert_eq!(resolver.user_url("u2"), "https://osf.io/profile/u2/");
    }
}
