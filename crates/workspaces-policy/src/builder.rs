//! Statement builders
//!
//! Produces the permission statements for one scope (a key prefix) and for
//! the cross-cutting defaults every session receives once. Statement shape
//! follows the provider's recommended folder-level access pattern: a
//! delimiter-conditioned listing statement for single-level browsing, a
//! wildcard-conditioned one for recursive listing, and object statements
//! scoped to `{bucket}/{prefix}/*`.

use crate::action::S3Action;
use crate::error::{PolicyError, PolicyResult};
use crate::key::{validate_username, PRIVATE_ROOT, PUBLIC_ROOT};
use crate::statement::{Condition, Statement};

/// Resource locator matching every bucket visible to the provider.
const ALL_BUCKETS: &str = "arn:aws:s3:::*";

/// Builds statements against one configured bucket.
///
/// # Examples
///
/// ```
/// use workspaces_policy::StatementBuilder;
///
/// let builder = StatementBuilder::new("bucket1").unwrap();
/// let statements = builder.scope_statements("public/alice/demo", false);
/// assert_eq!(statements.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    /// Bucket resource locator, `arn:aws:s3:::{bucket}`
    resource_base: String,
}

impl StatementBuilder {
    /// Create a builder for the configured bucket.
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::EmptyBucket` if the bucket identifier is empty.
    pub fn new(bucket: &str) -> PolicyResult<Self> {
        if bucket.is_empty() {
            return Err(PolicyError::EmptyBucket);
        }
        Ok(Self {
            resource_base: format!("arn:aws:s3:::{}", bucket),
        })
    }

    /// The bucket resource locator this builder scopes statements to.
    pub fn resource_base(&self) -> &str {
        &self.resource_base
    }

    /// Object resource locator for every key under `prefix`.
    fn objects_under(&self, prefix: &str) -> String {
        format!("{}/{}/*", self.resource_base, prefix)
    }

    /// Emit the statements granting access to one key prefix.
    ///
    /// In order:
    /// 1. Single-level listing of the prefix (exact match + `/` delimiter)
    /// 2. Recursive listing (`prefix/*`)
    /// 3. Object reads under the prefix
    /// 4. Object put/delete under the prefix, when `include_write`
    ///
    /// # Arguments
    ///
    /// * `prefix` - A resolved workspace key prefix
    /// * `include_write` - Whether the grant level permits writing
    pub fn scope_statements(&self, prefix: &str, include_write: bool) -> Vec<Statement> {
        let mut statements = vec![
            Statement::allow(
                vec![S3Action::ListBucket],
                vec![self.resource_base.clone()],
            )
            .with_condition(Condition::prefix_exact(prefix)),
            Statement::allow(
                vec![S3Action::ListBucket],
                vec![self.resource_base.clone()],
            )
            .with_condition(Condition::prefix_wildcard(prefix)),
            Statement::allow(vec![S3Action::GetObject], vec![self.objects_under(prefix)]),
        ];
        if include_write {
            statements.push(Statement::allow(
                vec![S3Action::PutObject, S3Action::DeleteObject],
                vec![self.objects_under(prefix)],
            ));
        }
        statements
    }

    /// Emit the cross-cutting default statements for a session.
    ///
    /// Emitted at most once per compiled document, in order:
    /// - Bucket enumeration (`ListAllMyBuckets` + `GetBucketLocation`) on
    ///   every bucket
    /// - Read-only scope statements rooted at the public namespace
    /// - Full read-write scope statements rooted at the user's private
    ///   namespace, `private/{username}`
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::InvalidUsername` if the username cannot anchor
    /// a private prefix.
    pub fn default_statements(&self, username: &str) -> PolicyResult<Vec<Statement>> {
        let username = validate_username(username)?;

        let mut statements = vec![Statement::allow(
            vec![S3Action::ListAllMyBuckets, S3Action::GetBucketLocation],
            vec![ALL_BUCKETS.to_string()],
        )];
        statements.extend(self.scope_statements(PUBLIC_ROOT, false));
        statements.extend(
            self.scope_statements(&format!("{}/{}", PRIVATE_ROOT, username), true),
        );
        Ok(statements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn builder() -> StatementBuilder {
        StatementBuilder::new("bucket1").unwrap()
    }

    #[test]
    fn test_empty_bucket_rejected() {
        assert!(matches!(
            StatementBuilder::new(""),
            Err(PolicyError::EmptyBucket)
        ));
    }

    #[test]
    fn test_resource_base() {
        assert_eq!(builder().resource_base(), "arn:aws:s3:::bucket1");
    }

    #[test]
    fn test_scope_statements_read_only() {
        let statements = builder().scope_statements("public/alice/demo", false);
        assert_eq!(statements.len(), 3);
        assert!(statements.iter().all(|s| !s.grants_write()));

        // Listing pair scoped to the bucket, object read scoped to the prefix
        assert_eq!(statements[0].resource, vec!["arn:aws:s3:::bucket1"]);
        assert_eq!(statements[1].resource, vec!["arn:aws:s3:::bucket1"]);
        assert_eq!(
            statements[2].resource,
            vec!["arn:aws:s3:::bucket1/public/alice/demo/*"]
        );
    }

    #[test]
    fn test_scope_statements_with_write() {
        let statements = builder().scope_statements("public/alice/demo", true);
        assert_eq!(statements.len(), 4);

        let write = &statements[3];
        assert_eq!(
            write.action,
            vec![S3Action::PutObject, S3Action::DeleteObject]
        );
        assert_eq!(
            write.resource,
            vec!["arn:aws:s3:::bucket1/public/alice/demo/*"]
        );
        assert!(write.condition.is_none());
    }

    #[test]
    fn test_scope_listing_conditions() {
        let statements = builder().scope_statements("public/alice/demo", false);
        assert_eq!(
            serde_json::to_value(&statements[0].condition).unwrap(),
            json!({
                "StringLike": {
                    "s3:prefix": "public/alice/demo",
                    "s3:delimiter": "/",
                }
            })
        );
        assert_eq!(
            serde_json::to_value(&statements[1].condition).unwrap(),
            json!({"StringLike": {"s3:prefix": "public/alice/demo/*"}})
        );
    }

    #[test]
    fn test_default_statements() {
        let statements = builder().default_statements("alice").unwrap();
        assert_eq!(statements.len(), 8);

        // Bucket enumeration first
        assert_eq!(
            statements[0].action,
            vec![S3Action::ListAllMyBuckets, S3Action::GetBucketLocation]
        );
        assert_eq!(statements[0].resource, vec![ALL_BUCKETS]);

        // Public namespace is read-only
        assert!(statements[1..4].iter().all(|s| !s.grants_write()));
        assert_eq!(
            statements[3].resource,
            vec!["arn:aws:s3:::bucket1/public/*"]
        );

        // Private namespace carries the full scope set including writes
        assert_eq!(
            statements[7].resource,
            vec!["arn:aws:s3:::bucket1/private/alice/*"]
        );
        assert!(statements[7].grants_write());
    }

    #[test]
    fn test_default_statements_invalid_username() {
        assert_eq!(
            builder().default_statements("a/b"),
            Err(PolicyError::InvalidUsername("a/b".to_string()))
        );
    }
}
