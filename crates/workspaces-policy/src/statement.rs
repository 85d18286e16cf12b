//! Policy statement wire model
//!
//! One allow/deny rule within a policy document, scoped by an action set, a
//! resource set, and optional conditions. Field names and condition
//! operators follow the provider grammar exactly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::action::S3Action;

/// Effect of a policy statement.
///
/// The compiler only emits `Allow`; `Deny` is part of the provider grammar
/// and kept for completeness when parsing documents back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Allow the actions
    Allow,
    /// Deny the actions (takes precedence over Allow)
    Deny,
}

/// Statement condition block.
///
/// Compiled statements only use the `StringLike` operator, matching the
/// bucket-listing prefix and delimiter keys:
///
/// ```json
/// {"StringLike": {"s3:prefix": "public", "s3:delimiter": "/"}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// `StringLike` operator entries, keyed by condition key
    #[serde(rename = "StringLike")]
    pub string_like: BTreeMap<String, String>,
}

impl Condition {
    /// Condition matching exactly one directory level of `prefix`.
    ///
    /// Combines an exact `s3:prefix` match with the `/` delimiter, which
    /// lets a session list the prefix itself without exposing keys beneath
    /// unrelated prefixes.
    pub fn prefix_exact(prefix: &str) -> Self {
        let mut string_like = BTreeMap::new();
        string_like.insert("s3:prefix".to_string(), prefix.to_string());
        string_like.insert("s3:delimiter".to_string(), "/".to_string());
        Self { string_like }
    }

    /// Condition matching every key under `prefix` recursively.
    pub fn prefix_wildcard(prefix: &str) -> Self {
        let mut string_like = BTreeMap::new();
        string_like.insert("s3:prefix".to_string(), format!("{}/*", prefix));
        Self { string_like }
    }
}

/// A single policy statement.
///
/// # Examples
///
/// ```
/// use workspaces_policy::{S3Action, Statement};
///
/// let statement = Statement::allow(
///     vec![S3Action::GetObject],
///     vec!["arn:aws:s3:::bucket1/public/*".to_string()],
/// );
/// assert!(!statement.grants_write());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    /// Effect of this statement
    pub effect: Effect,

    /// Actions this statement applies to
    pub action: Vec<S3Action>,

    /// Resources this statement applies to
    pub resource: Vec<String>,

    /// Optional conditions for when this statement applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl Statement {
    /// Create an allow statement with no condition.
    pub fn allow(action: Vec<S3Action>, resource: Vec<String>) -> Self {
        Self {
            effect: Effect::Allow,
            action,
            resource,
            condition: None,
        }
    }

    /// Attach a condition block to this statement.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Check if any action in this statement modifies objects.
    pub fn grants_write(&self) -> bool {
        self.action.iter().any(|a| a.is_write())
    }
}
