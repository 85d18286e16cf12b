//! Policy compilation
//!
//! Folds a user's ordered grant list into one policy document. The fold
//! carries a single accumulator: whether the cross-cutting defaults have
//! been emitted yet. Defaults land first (when present), followed by
//! per-workspace statements in input grant order; nothing is ever removed
//! or merged across distinct workspaces.

use tracing::debug;
use workspaces_org::User;

use crate::builder::StatementBuilder;
use crate::document::PolicyDocument;
use crate::error::PolicyResult;
use crate::grant::ShareGrant;
use crate::key::{validate_username, workspace_key};

/// Compiles session policies against one configured bucket.
///
/// The compiler is stateless across calls; each `compile` invocation
/// operates purely on its arguments, so one instance can be shared freely
/// between request-handling tasks.
///
/// # Examples
///
/// ```
/// use workspaces_org::{ShareLevel, User, Workspace, WorkspaceVisibility};
/// use workspaces_policy::{PolicyCompiler, ShareGrant};
///
/// let alice = User::new("alice");
/// let demo = Workspace::new("demo", alice.clone(), WorkspaceVisibility::Public);
///
/// let compiler = PolicyCompiler::new("bucket1").unwrap();
/// let document = compiler
///     .compile(&alice, &[ShareGrant::shared(demo, ShareLevel::Read)])
///     .unwrap();
/// assert_eq!(document.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyCompiler {
    builder: StatementBuilder,
}

impl PolicyCompiler {
    /// Create a compiler for the configured bucket.
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::EmptyBucket` if the bucket identifier is empty.
    pub fn new(bucket: &str) -> PolicyResult<Self> {
        Ok(Self {
            builder: StatementBuilder::new(bucket)?,
        })
    }

    /// Compile a user's ordered grant list into a policy document.
    ///
    /// Default grants append the cross-cutting statement set the first time
    /// one is seen; later default grants are idempotent no-ops, not errors.
    /// Workspace grants append scope statements for the workspace prefix,
    /// with put/delete included only when the level permits writing.
    ///
    /// # Errors
    ///
    /// A malformed grant (unusable username or workspace name) aborts the
    /// whole compilation; no partial document is returned.
    pub fn compile(&self, user: &User, grants: &[ShareGrant]) -> PolicyResult<PolicyDocument> {
        validate_username(&user.username)?;
        debug!(
            user = %user.username,
            grants = grants.len(),
            "compiling session policy"
        );

        let mut statement = Vec::new();
        let mut defaults_emitted = false;
        for grant in grants {
            match grant {
                ShareGrant::Default => {
                    if !defaults_emitted {
                        statement.extend(self.builder.default_statements(&user.username)?);
                        defaults_emitted = true;
                    }
                }
                ShareGrant::Workspace { workspace, level } => {
                    let prefix = workspace_key(workspace)?;
                    statement.extend(self.builder.scope_statements(&prefix, level.can_write()));
                }
            }
        }
        Ok(PolicyDocument::new(statement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PolicyError;
    use workspaces_org::{ShareLevel, Workspace, WorkspaceVisibility};

    fn compiler() -> PolicyCompiler {
        PolicyCompiler::new("bucket1").unwrap()
    }

    fn alice() -> User {
        User::new("alice")
    }

    fn demo(owner: &User) -> Workspace {
        Workspace::new("demo", owner.clone(), WorkspaceVisibility::Public)
    }

    #[test]
    fn test_empty_grant_list_compiles_to_no_statements() {
        let document = compiler().compile(&alice(), &[]).unwrap();
        assert!(document.is_empty());
        assert_eq!(document.version, crate::document::POLICY_VERSION);
    }

    #[test]
    fn test_defaults_emitted_once() {
        let user = alice();
        let document = compiler()
            .compile(&user, &[ShareGrant::Default, ShareGrant::Default])
            .unwrap();
        assert_eq!(document.len(), 8);
    }

    #[test]
    fn test_defaults_precede_workspace_statements() {
        let user = alice();
        let document = compiler()
            .compile(
                &user,
                &[
                    ShareGrant::Default,
                    ShareGrant::shared(demo(&user), ShareLevel::Read),
                ],
            )
            .unwrap();
        assert_eq!(document.len(), 11);

        // Cross-cutting bucket enumeration is always the first statement
        assert_eq!(
            document.statement[0].action[0],
            crate::action::S3Action::ListAllMyBuckets
        );
        // Workspace statements follow the defaults
        assert_eq!(
            document.statement[10].resource,
            vec!["arn:aws:s3:::bucket1/public/alice/demo/*"]
        );
    }

    #[test]
    fn test_invalid_user_aborts_compilation() {
        let mut user = alice();
        user.username = String::new();
        assert_eq!(
            compiler().compile(&user, &[]),
            Err(PolicyError::InvalidUsername(String::new()))
        );
    }

    #[test]
    fn test_malformed_workspace_aborts_compilation() {
        let user = alice();
        let bad = Workspace::new("demo/../other", user.clone(), WorkspaceVisibility::Public);
        let result = compiler().compile(
            &user,
            &[
                ShareGrant::Default,
                ShareGrant::shared(bad, ShareLevel::Read),
            ],
        );
        assert_eq!(
            result,
            Err(PolicyError::InvalidWorkspaceName("demo/../other".to_string()))
        );
    }
}
