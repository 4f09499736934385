//! Node and user snapshots
//!
//! Read-only records handed to the listing view. Nothing in the view
//! mutates them; the catalogue is the only owner that may flag spam.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contributor. Only the id is used for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A status column value rendered exactly as stored.
///
/// The public, withdrawn and embargo columns may carry a boolean, a
/// named state or a timestamp depending on where the record came from.
/// Text (timestamps included) is kept verbatim and never reparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Status(String),
    #[default]
    Absent,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Flag(b) => write!(f, "{}", b),
            FieldValue::Status(s) => write!(f, "{}", s),
            FieldValue::Absent => write!(f, "None"),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Status(s.to_string())
    }
}

/// A content node (project, component or registration)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub root: Option<String>,
    pub date_created: DateTime<Utc>,
    #[serde(default)]
    pub public: FieldValue,
    #[serde(default)]
    pub retraction: FieldValue,
    #[serde(default)]
    pub embargo: FieldValue,
    #[serde(default)]
    pub contributors: Vec<User>,
    /// Set once an administrator confirms the node as spam
    #[serde(default)]
    pub spam: bool,
}

impl Node {
    /// Create a bare node with every optional column absent
    pub fn new(id: impl Into<String>, date_created: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: None,
            parent: None,
            root: None,
            date_created,
            public: FieldValue::Absent,
            retraction: FieldValue::Absent,
            embargo: FieldValue::Absent,
            contributors: Vec::new(),
            spam: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_flags(
        mut self,
        public: impl Into<FieldValue>,
        retraction: impl Into<FieldValue>,
        embargo: impl Into<FieldValue>,
    ) -> Self {
        self.public = public.into();
        self.retraction = retraction.into();
        self.embargo = embargo.into();
        self
    }

    pub fn with_contributors<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contributors = ids.into_iter().map(User::new).collect();
        self
    }

    /// True if the user appears in the contributor list
    pub fn has_contributor(&self, user_id: &str) -> bool {
        self.contributors.iter().any(|u| u.id == user_id)
    }
}

/// Pagination descriptor for one page of the catalogue. Page numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageStatus {
    pub number: usize,
    pub per_page: usize,
    pub total_count: usize,
    pub num_pages: usize,
}

impl PageStatus {
    /// Build a status; an empty catalogue still has one (empty) page
    pub fn new(number: usize, per_page: usize, total_count: usize) -> Self {
        let num_pages = if total_count == 0 || per_page == 0 {
            1
        } else {
            total_count.div_ceil(per_page)
        };
        Self {
            number,
            per_page,
            total_count,
            num_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn previous_number(&self) -> Option<usize> {
        self.has_previous().then(|| self.number - 1)
    }

    pub fn next_number(&self) -> Option<usize> {
        self.has_next().then(|| self.number + 1)
    }

    /// Index of the first record on this page within the catalogue
    pub fn offset(&self) -> usize {
        (self.number.saturating_sub(1)) * self.per_page
    }
}

/// One page of nodes plus its pagination descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub nodes: Vec<Node>,
    pub status: PageStatus,
}

impl Page {
    /// A single page holding every given node
    pub fn single(nodes: Vec<Node>) -> Self {
        let count = nodes.len();
        Self {
            status: PageStatus::new(1, count.max(1), count),
            nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_field_value_renders_as_stored() {
        assert_eq!(FieldValue::Flag(true).to_string(), "true");
        assert_eq!(FieldValue::Status("pending".into()).to_string(), "pending");
        assert_eq!(FieldValue::Absent.to_string(), "None");
    }

    #[test]
    fn test_field_value_deserialization() {
        let v: FieldValue = serde_json::from_str("false").unwrap();
        assert_eq!(v, FieldValue::Flag(false));

        let v: FieldValue = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(v, FieldValue::Status("approved".into()));

        let raw = "2017-01-02T03:04:05.123+02:00";
        let v: FieldValue = serde_json::from_str(&format!("\"{}\"", raw)).unwrap();
        assert_eq!(v, FieldValue::Status(raw.to_string()));
        assert_eq!(v.to_string(), raw);
        assert_eq!(serde_json::to_string(&v).unwrap(), format!("\"{}\"", raw));

        let v: FieldValue = serde_json::from_str("null").unwrap();
        assert_eq!(v, FieldValue::Absent);
    }

    #[test]
    fn test_node_deserializes_with_defaults() {
        let node: Node = serde_json::from_str(
            r#"{"id": "abc12", "date_created": "2016-12-12T13:52:00Z"}"#,
        )
        .unwrap();
        assert_eq!(node.id, "abc12");
        assert!(node.parent.is_none());
        assert!(node.contributors.is_empty());
        assert_eq!(node.public, FieldValue::Absent);
        assert!(!node.spam);
    }

    #[test]
    fn test_page_status_arithmetic() {
        let status = PageStatus::new(2, 10, 25);
        assert_eq!(status.num_pages, 3);
        assert_eq!(status.offset(), 10);
        assert_eq!(status.previous_number(), Some(1));
        assert_eq!(status.next_number(), Some(3));

        let last = PageStatus::new(3, 10, 25);
        assert!(!last.has_next());

        let empty = PageStatus::new(1, 10, 0);
        assert_eq!(empty.num_pages, 1);
        assert!(!empty.has_previous());
        assert!(!empty.has_next());
    }

    #[test]
    fn test_has_contributor() {
        let ts = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let node = Node::new("abc12", ts).with_contributors(["u1", "u2"]);
        assert!(node.has_contributor("u2"));
        assert!(!node.has_contributor("u3"));
    }
}
