//! # S3 Actions
//!
//! The provider action vocabulary used in compiled statements. Identifiers
//! must reproduce the provider's expected strings exactly, since the policy
//! document is consumed unmodified by the credential-issuance API.

use serde::{Deserialize, Serialize};

/// S3 actions that compiled statements can grant.
///
/// Each variant serializes to its exact provider identifier
/// (e.g. `"s3:GetObject"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum S3Action {
    /// Enumerate the buckets visible to the session
    #[serde(rename = "s3:ListAllMyBuckets")]
    ListAllMyBuckets,

    /// Query a bucket's region
    #[serde(rename = "s3:GetBucketLocation")]
    GetBucketLocation,

    /// List keys in a bucket (scoped by prefix conditions)
    #[serde(rename = "s3:ListBucket")]
    ListBucket,

    /// Fetch an object
    #[serde(rename = "s3:GetObject")]
    GetObject,

    /// Create or overwrite an object
    #[serde(rename = "s3:PutObject")]
    PutObject,

    /// Delete an object
    #[serde(rename = "s3:DeleteObject")]
    DeleteObject,
}

impl S3Action {
    /// Get the provider identifier for the action.
    ///
    /// # Examples
    ///
    /// ```
    /// use workspaces_policy::S3Action;
    ///
    /// assert_eq!(S3Action::GetObject.as_str(), "s3:GetObject");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            S3Action::ListAllMyBuckets => "s3:ListAllMyBuckets",
            S3Action::GetBucketLocation => "s3:GetBucketLocation",
            S3Action::ListBucket => "s3:ListBucket",
            S3Action::GetObject => "s3:GetObject",
            S3Action::PutObject => "s3:PutObject",
            S3Action::DeleteObject => "s3:DeleteObject",
        }
    }

    /// Parse an action from its provider identifier.
    ///
    /// Matching is exact: provider action names are case-sensitive.
    ///
    /// # Arguments
    ///
    /// * `s` - Identifier to parse
    ///
    /// # Returns
    ///
    /// `Some(S3Action)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use workspaces_policy::S3Action;
    ///
    /// assert_eq!(S3Action::parse("s3:ListBucket"), Some(S3Action::ListBucket));
    /// assert_eq!(S3Action::parse("s3:listbucket"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "s3:ListAllMyBuckets" => Some(S3Action::ListAllMyBuckets),
            "s3:GetBucketLocation" => Some(S3Action::GetBucketLocation),
            "s3:ListBucket" => Some(S3Action::ListBucket),
            "s3:GetObject" => Some(S3Action::GetObject),
            "s3:PutObject" => Some(S3Action::PutObject),
            "s3:DeleteObject" => Some(S3Action::DeleteObject),
            _ => None,
        }
    }

    /// Get all actions.
    pub fn all() -> Vec<Self> {
        vec![
            S3Action::ListAllMyBuckets,
            S3Action::GetBucketLocation,
            S3Action::ListBucket,
            S3Action::GetObject,
            S3Action::PutObject,
            S3Action::DeleteObject,
        ]
    }

    /// Check if this action modifies objects.
    ///
    /// # Returns
    ///
    /// `true` for PutObject and DeleteObject
    pub fn is_write(&self) -> bool {
        matches!(self, S3Action::PutObject | S3Action::DeleteObject)
    }

    /// Check if this is a read-only action.
    pub fn is_read_only(&self) -> bool {
        !self.is_write()
    }
}
