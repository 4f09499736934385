//! Spam confirmation form body
//!
//! The selection form posts one pair per checked node, keyed by node id,
//! plus the CSRF token. Nothing else is expected in the body.
//!
//! Keys follow the catalogue's id rule (any non-empty string); whether a
//! key names a real node is decided by the catalogue when flagging.

use crate::csrf::CSRF_FIELD;
use crate::errors::{AdminError, AdminResult};

/// A parsed spam confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpamSubmission {
    pub csrf_token: String,
    /// Selected node ids in submission order, without duplicates
    pub node_ids: Vec<String>,
}

impl SpamSubmission {
    /// Interpret urlencoded form pairs
    pub fn from_pairs(pairs: Vec<(String, String)>) -> AdminResult<Self> {
        let mut csrf_token = None;
        let mut node_ids: Vec<String> = Vec::new();

        for (key, value) in pairs {
            if key == CSRF_FIELD {
                csrf_token = Some(value);
                continue;
            }
            if key.is_empty() {
                return Err(AdminError::InvalidSubmission(
                    "Empty node id".to_string(),
                ));
            }
            if !node_ids.contains(&key) {
                node_ids.push(key);
            }
        }

        let csrf_token = csrf_token
            .filter(|t| !t.is_empty())
            .ok_or(AdminError::CsrfRejected)?;

        if node_ids.is_empty() {
            return Err(AdminError::InvalidSubmission(
                "No nodes selected".to_string(),
            ));
        }

        Ok(Self {
            csrf_token,
            node_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parses_selection_and_token() {
        let submission = SpamSubmission::from_pairs(pairs(&[
            ("abc12", "on"),
            ("csrfmiddlewaretoken", "tok.sig"),
            ("xyz99", "on"),
        ]))
        .unwrap();
        assert_eq!(submission.csrf_token, "tok.sig");
        assert_eq!(submission.node_ids, vec!["abc12", "xyz99"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let submission = SpamSubmission::from_pairs(pairs(&[
            ("abc12", "on"),
            ("abc12", "on"),
            ("csrfmiddlewaretoken", "t.s"),
        ]))
        .unwrap();
        assert_eq!(submission.node_ids, vec!["abc12"]);
    }

    #[test]
    fn test_missing_token() {
        assert_eq!(
            SpamSubmission::from_pairs(pairs(&[("abc12", "on")])),
            Err(AdminError::CsrfRejected)
        );
        assert_eq!(
            SpamSubmission::from_pairs(pairs(&[("abc12", "on"), ("csrfmiddlewaretoken", "")])),
            Err(AdminError::CsrfRejected)
        );
    }

    #[test]
    fn test_empty_selection() {
        assert!(matches!(
            SpamSubmission::from_pairs(pairs(&[("csrfmiddlewaretoken", "t.s")])),
            Err(AdminError::InvalidSubmission(_))
        ));
    }

    #[test]
    fn test_empty_id() {
        assert!(matches!(
            SpamSubmission::from_pairs(pairs(&[("", "on"), ("csrfmiddlewaretoken", "t.s")])),
            Err(AdminError::InvalidSubmission(_))
        ));
    }

    #[test]
    fn test_ids_with_punctuation_accepted() {
        let submission = SpamSubmission::from_pairs(pairs(&[
            ("abc.12", "on"),
            ("a/b c", "on"),
            ("csrfmiddlewaretoken", "t.s"),
        ]))
        .unwrap();
        assert_eq!(submission.node_ids, vec!["abc.12", "a/b c"]);
    }
}
