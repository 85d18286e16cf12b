//! # WorkspacesIO Session-Policy Compiler
//!
//! This crate compiles a user's ownership and share relationships over
//! workspaces into an S3 session policy, consumed unmodified by the
//! credential-issuance service when it requests temporary STS credentials.
//!
//! ## Overview
//!
//! The workspaces-policy crate handles:
//! - **Key resolution**: Deterministic workspace → object-key prefix mapping
//! - **Statement building**: Listing/read/write statements for one prefix
//! - **Compilation**: Folding an ordered grant list into one policy document
//! - **Wire model**: The exact provider policy grammar (Version/Statement/
//!   Effect/Action/Resource/Condition)
//!
//! ## Architecture
//!
//! ```text
//! (User, [ShareGrant])
//!      │
//!      ▼
//! PolicyCompiler ──► key::workspace_key ──► "public/alice/demo"
//!      │
//!      ▼
//! StatementBuilder ──► listing pair + get [+ put/delete]
//!      │
//!      ▼
//! PolicyDocument { Version: "2012-10-17", Statement: [...] }
//! ```
//!
//! Default (no-workspace) grants contribute a cross-cutting statement set at
//! most once per document; per-workspace grants contribute scope statements
//! in input order, with write actions only for `ReadWrite`/`Own` levels.
//!
//! ## Usage
//!
//! ```rust
//! use workspaces_org::{ShareLevel, User, Workspace, WorkspaceVisibility};
//! use workspaces_policy::{PolicyCompiler, ShareGrant};
//!
//! let alice = User::new("alice");
//! let demo = Workspace::new("demo", alice.clone(), WorkspaceVisibility::Public);
//!
//! let compiler = PolicyCompiler::new("bucket1").unwrap();
//! let document = compiler
//!     .compile(
//!         &alice,
//!         &[
//!             ShareGrant::Default,
//!             ShareGrant::shared(demo, ShareLevel::Read),
//!         ],
//!     )
//!     .unwrap();
//!
//! assert_eq!(document.version, workspaces_policy::POLICY_VERSION);
//! ```
//!
//! ## Concurrency
//!
//! Every operation is a synchronous pure function over its arguments; no
//! state is shared across calls, so the compiler is safe under arbitrary
//! concurrent use from request-handling tasks. Returned documents must be
//! treated as immutable by callers.

pub mod action;
pub mod builder;
pub mod compiler;
pub mod document;
pub mod error;
pub mod grant;
pub mod key;
pub mod statement;

// Re-export main types for convenience
pub use action::S3Action;
pub use builder::StatementBuilder;
pub use compiler::PolicyCompiler;
pub use document::{PolicyDocument, POLICY_VERSION};
pub use error::{PolicyError, PolicyResult};
pub use grant::ShareGrant;
pub use key::{role_session_name, workspace_key};
pub use statement::{Condition, Effect, Statement};
