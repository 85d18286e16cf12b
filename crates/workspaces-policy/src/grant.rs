//! Share grants
//!
//! The compiler's input unit: one entry of the ordered grant list the
//! service layer derives from a user's owned and shared workspaces. The
//! no-workspace case is a first-class variant rather than a sentinel value,
//! so every consumer matches it exhaustively.

use serde::{Deserialize, Serialize};
use workspaces_org::{ShareLevel, Workspace};

/// One entry of a user's ordered grant list.
///
/// # Examples
///
/// ```
/// use workspaces_org::{ShareLevel, User, Workspace, WorkspaceVisibility};
/// use workspaces_policy::ShareGrant;
///
/// let demo = Workspace::new("demo", User::new("alice"), WorkspaceVisibility::Public);
///
/// let grant = ShareGrant::shared(demo, ShareLevel::ReadWrite);
/// assert!(!grant.is_default());
///
/// assert!(ShareGrant::Default.is_default());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ShareGrant {
    /// The user's own cross-cutting default access (no workspace).
    ///
    /// Conventionally ordered first in a grant list; duplicates are
    /// harmless no-ops during compilation.
    Default,

    /// Access to one workspace at a given share level.
    Workspace {
        /// The granted workspace
        workspace: Workspace,
        /// Access level for the grant
        level: ShareLevel,
    },
}

impl ShareGrant {
    /// Create a grant for a specific workspace.
    pub fn shared(workspace: Workspace, level: ShareLevel) -> Self {
        Self::Workspace { workspace, level }
    }

    /// Build a grant from the persistence layer's `(workspace?, level)`
    /// row shape.
    ///
    /// A row without a workspace is the user's synthetic default entry; its
    /// level carries no meaning and is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use workspaces_org::ShareLevel;
    /// use workspaces_policy::ShareGrant;
    ///
    /// let grant = ShareGrant::from_parts(None, ShareLevel::ReadWrite);
    /// assert!(grant.is_default());
    /// ```
    pub fn from_parts(workspace: Option<Workspace>, level: ShareLevel) -> Self {
        match workspace {
            Some(workspace) => Self::Workspace { workspace, level },
            None => Self::Default,
        }
    }

    /// Check if this is the cross-cutting default grant.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Get the granted workspace, if any.
    pub fn workspace(&self) -> Option<&Workspace> {
        match self {
            Self::Workspace { workspace, .. } => Some(workspace),
            Self::Default => None,
        }
    }
}
