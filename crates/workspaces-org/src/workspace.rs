//! Workspace domain models
//!
//! This module provides the Workspace entity, the unit of sharing on the
//! platform. A workspace maps to a key prefix in the shared bucket and can
//! live under either the public or the private namespace root.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::User;

/// A workspace is a named object-key subtree owned by exactly one user.
///
/// Workspaces can be:
/// - **Public**: listed and readable by every authenticated user
/// - **Private**: visible only to the owner and users it was shared with
///
/// The workspace identity (owner, name, visibility) is treated as immutable
/// by consumers that derive key prefixes from it; renaming or re-homing a
/// workspace is a data migration, not a field update.
///
/// # Examples
///
/// ```
/// use workspaces_org::{User, Workspace, WorkspaceVisibility};
///
/// let alice = User::new("alice");
/// let demo = Workspace::new("demo", alice, WorkspaceVisibility::Public);
/// assert_eq!(demo.name, "demo");
/// assert!(demo.is_public());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Unique identifier for the workspace
    pub id: Uuid,

    /// Human-readable name (unique per owner)
    pub name: String,

    /// User who owns the workspace
    pub owner: User,

    /// Visibility level determining the namespace root
    pub visibility: WorkspaceVisibility,

    /// When the workspace was created
    pub created_at: DateTime<Utc>,
}

impl Workspace {
    /// Creates a new workspace.
    ///
    /// The workspace is created with:
    /// - A newly generated UUID v7 ID
    /// - Current timestamp for created_at
    ///
    /// # Arguments
    ///
    /// * `name` - Workspace name (must be unique per owner)
    /// * `owner` - The owning user
    /// * `visibility` - Public or private namespace root
    ///
    /// # Examples
    ///
    /// ```
    /// use workspaces_org::{User, Workspace, WorkspaceVisibility};
    ///
    /// let owner = User::new("alice");
    /// let workspace = Workspace::new("datasets", owner, WorkspaceVisibility::Private);
    /// ```
    pub fn new(name: impl Into<String>, owner: User, visibility: WorkspaceVisibility) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            owner,
            visibility,
            created_at: Utc::now(),
        }
    }

    /// Check if the workspace lives under the public namespace root.
    pub fn is_public(&self) -> bool {
        self.visibility == WorkspaceVisibility::Public
    }

    /// Check if the workspace is owned by the given user.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user ID to check
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner.id == user_id
    }
}

/// Workspace visibility levels.
///
/// Determines which namespace root the workspace's keys live under, and
/// therefore who can discover it without an explicit share.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceVisibility {
    /// Listed and readable by every authenticated user
    Public,

    /// Visible only to the owner and explicit shares
    Private,
}

impl WorkspaceVisibility {
    /// Parse visibility from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(WorkspaceVisibility)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use workspaces_org::WorkspaceVisibility;
    ///
    /// assert_eq!(WorkspaceVisibility::parse("public"), Some(WorkspaceVisibility::Public));
    /// assert_eq!(WorkspaceVisibility::parse("PRIVATE"), Some(WorkspaceVisibility::Private));
    /// assert_eq!(WorkspaceVisibility::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            _ => None,
        }
    }

    /// Get string representation of the visibility.
    ///
    /// # Examples
    ///
    /// ```
    /// use workspaces_org::WorkspaceVisibility;
    ///
    /// assert_eq!(WorkspaceVisibility::Public.as_str(), "public");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl Default for WorkspaceVisibility {
    fn default() -> Self {
        Self::Private
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let owner = User::new("alice");
        let owner_id = owner.id;
        let workspace = Workspace::new("demo", owner, WorkspaceVisibility::Public);

        assert_eq!(workspace.name, "demo");
        assert_eq!(workspace.owner.username, "alice");
        assert!(workspace.is_public());
        assert!(workspace.is_owned_by(owner_id));
    }

    #[test]
    fn test_workspace_private_by_default_visibility() {
        assert_eq!(WorkspaceVisibility::default(), WorkspaceVisibility::Private);
    }

    #[test]
    fn test_workspace_ownership() {
        let owner = User::new("alice");
        let other = User::new("bob");
        let workspace = Workspace::new("demo", owner, WorkspaceVisibility::Private);

        assert!(!workspace.is_owned_by(other.id));
    }

    #[test]
    fn test_visibility_parse() {
        assert_eq!(
            WorkspaceVisibility::parse("public"),
            Some(WorkspaceVisibility::Public)
        );
        assert_eq!(
            WorkspaceVisibility::parse("PRIVATE"),
            Some(WorkspaceVisibility::Private)
        );
        assert_eq!(WorkspaceVisibility::parse("invalid"), None);
    }

    #[test]
    fn test_visibility_as_str() {
        assert_eq!(WorkspaceVisibility::Public.as_str(), "public");
        assert_eq!(WorkspaceVisibility::Private.as_str(), "private");
    }
}
