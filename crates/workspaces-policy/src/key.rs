//! Workspace key resolution
//!
//! Deterministic mapping from a workspace identity to its object-key
//! prefix, plus the audit-facing session name. Prefixes have the shape
//! `{public|private}/{owner.username}/{name}`.
//!
//! Name segments are validated rather than escaped: a segment that could
//! change the prefix structure (path delimiters, traversal tokens) or widen
//! a `StringLike` match (glob metacharacters) is rejected. On the accepted
//! subset the mapping is the identity, so it is injective and two distinct
//! workspaces can never collide on a prefix.

use workspaces_org::{User, Workspace, WorkspaceVisibility};

use crate::error::{PolicyError, PolicyResult};

/// Namespace root for publicly readable workspaces.
pub const PUBLIC_ROOT: &str = "public";

/// Namespace root for private workspaces and per-user scratch space.
pub const PRIVATE_ROOT: &str = "private";

fn root_for(visibility: WorkspaceVisibility) -> &'static str {
    match visibility {
        WorkspaceVisibility::Public => PUBLIC_ROOT,
        WorkspaceVisibility::Private => PRIVATE_ROOT,
    }
}

// Shared segment rules for workspace names and usernames. '*' and '?' are
// glob metacharacters in both resource ARNs and StringLike conditions.
fn segment_is_safe(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains('/')
        && !segment.contains('*')
        && !segment.contains('?')
}

/// Validate a workspace name for use as a key-prefix segment.
///
/// Rejected names: empty strings, `.` and `..`, and names containing `/`,
/// `*`, or `?`. Accepted names pass through unchanged.
///
/// # Errors
///
/// Returns `PolicyError::InvalidWorkspaceName` for rejected names.
///
/// # Examples
///
/// ```
/// use workspaces_policy::key::sanitize_name;
///
/// assert_eq!(sanitize_name("demo").unwrap(), "demo");
/// assert!(sanitize_name("demo/../other").is_err());
/// ```
pub fn sanitize_name(name: &str) -> PolicyResult<&str> {
    if segment_is_safe(name) {
        Ok(name)
    } else {
        Err(PolicyError::InvalidWorkspaceName(name.to_string()))
    }
}

/// Validate a username for use as a key-prefix segment.
///
/// Same segment rules as [`sanitize_name`].
///
/// # Errors
///
/// Returns `PolicyError::InvalidUsername` for rejected usernames.
pub fn validate_username(username: &str) -> PolicyResult<&str> {
    if segment_is_safe(username) {
        Ok(username)
    } else {
        Err(PolicyError::InvalidUsername(username.to_string()))
    }
}

/// Determine the object-key prefix for a workspace.
///
/// The prefix is `{root}/{owner.username}/{name}`, where the root is chosen
/// from the workspace visibility. The mapping is deterministic: the same
/// (visibility, owner, name) triple always yields the same prefix.
///
/// # Errors
///
/// Returns an invalid-argument error if the owner's username or the
/// workspace name fails segment validation.
///
/// # Examples
///
/// ```
/// use workspaces_org::{User, Workspace, WorkspaceVisibility};
/// use workspaces_policy::workspace_key;
///
/// let alice = User::new("alice");
/// let demo = Workspace::new("demo", alice, WorkspaceVisibility::Public);
/// assert_eq!(workspace_key(&demo).unwrap(), "public/alice/demo");
/// ```
pub fn workspace_key(workspace: &Workspace) -> PolicyResult<String> {
    let username = validate_username(&workspace.owner.username)?;
    let name = sanitize_name(&workspace.name)?;
    Ok(format!(
        "{}/{}/{}",
        root_for(workspace.visibility),
        username,
        name
    ))
}

/// Produce the audit-facing role session name for a credential request.
///
/// The label combines the user id with the workspace id, or the literal
/// `default` for the user's own no-workspace session. It is used only for
/// session naming and audit trails; it carries no security meaning.
///
/// # Examples
///
/// ```
/// use workspaces_org::User;
/// use workspaces_policy::role_session_name;
///
/// let user = User::new("alice");
/// assert_eq!(role_session_name(&user, None), format!("{}::default", user.id));
/// ```
pub fn role_session_name(user: &User, workspace: Option<&Workspace>) -> String {
    match workspace {
        Some(workspace) => format!("{}::{}", user.id, workspace.id),
        None => format!("{}::default", user.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace(name: &str, username: &str, visibility: WorkspaceVisibility) -> Workspace {
        Workspace::new(name, User::new(username), visibility)
    }

    #[test]
    fn test_public_workspace_key() {
        let demo = workspace("demo", "alice", WorkspaceVisibility::Public);
        assert_eq!(workspace_key(&demo).unwrap(), "public/alice/demo");
    }

    #[test]
    fn test_private_workspace_key() {
        let datasets = workspace("datasets", "bob", WorkspaceVisibility::Private);
        assert_eq!(workspace_key(&datasets).unwrap(), "private/bob/datasets");
    }

    #[test]
    fn test_workspace_key_is_deterministic() {
        let demo = workspace("demo", "alice", WorkspaceVisibility::Public);
        assert_eq!(workspace_key(&demo).unwrap(), workspace_key(&demo).unwrap());
    }

    #[test]
    fn test_workspace_name_delimiter_rejected() {
        for name in ["demo/other", "demo/../other", "..", ".", ""] {
            let ws = workspace(name, "alice", WorkspaceVisibility::Public);
            assert_eq!(
                workspace_key(&ws),
                Err(PolicyError::InvalidWorkspaceName(name.to_string())),
                "name {:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_workspace_name_glob_rejected() {
        for name in ["data*", "data?"] {
            let ws = workspace(name, "alice", WorkspaceVisibility::Public);
            assert!(workspace_key(&ws).is_err(), "name {:?} should be rejected", name);
        }
    }

    #[test]
    fn test_invalid_username_rejected() {
        let ws = workspace("demo", "alice/admin", WorkspaceVisibility::Public);
        assert_eq!(
            workspace_key(&ws),
            Err(PolicyError::InvalidUsername("alice/admin".to_string()))
        );
    }

    #[test]
    fn test_validate_username() {
        assert_eq!(validate_username("alice").unwrap(), "alice");
        assert!(validate_username("").is_err());
        assert!(validate_username("a*b").is_err());
    }

    #[test]
    fn test_role_session_name() {
        let user = User::new("alice");
        let demo = workspace("demo", "alice", WorkspaceVisibility::Public);

        assert_eq!(
            role_session_name(&user, Some(&demo)),
            format!("{}::{}", user.id, demo.id)
        );
        assert_eq!(
            role_session_name(&user, None),
            format!("{}::default", user.id)
        );
    }
}
