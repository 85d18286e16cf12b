//! Policy document wire model
//!
//! The complete declarative access-control artifact attached to a temporary
//! credential session. Serialized field names match the provider grammar.

use serde::{Deserialize, Serialize};

use crate::statement::Statement;

/// Fixed policy schema version expected by the provider.
pub const POLICY_VERSION: &str = "2012-10-17";

/// A complete session policy document.
///
/// Documents are constructed fresh per compile call and must be treated as
/// immutable once returned; they are not persisted by this crate.
///
/// # Examples
///
/// ```
/// use workspaces_policy::{PolicyDocument, POLICY_VERSION};
///
/// let document = PolicyDocument::empty();
/// assert_eq!(document.version, POLICY_VERSION);
/// assert!(document.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    /// Policy schema version
    pub version: String,

    /// Ordered statement sequence
    pub statement: Vec<Statement>,
}

impl PolicyDocument {
    /// Create a document from an ordered statement sequence.
    pub fn new(statement: Vec<Statement>) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement,
        }
    }

    /// Create the zero-statement document.
    ///
    /// Used for sessions whose user holds no active grants, so the session
    /// carries an explicit empty policy instead of relying on the provider's
    /// default behavior.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of statements in the document.
    pub fn len(&self) -> usize {
        self.statement.len()
    }

    /// Check if the document has no statements.
    pub fn is_empty(&self) -> bool {
        self.statement.is_empty()
    }

    /// Serialize the document to provider-grammar JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a document from provider-grammar JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
