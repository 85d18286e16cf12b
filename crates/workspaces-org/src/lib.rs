//! # WorkspacesIO Domain Models
//!
//! This crate provides the user and workspace domain models for the
//! WorkspacesIO storage platform, shared between the API service and the
//! session-policy compiler.
//!
//! ## Overview
//!
//! The workspaces-org crate handles:
//! - **Users**: Platform accounts whose username anchors a private key namespace
//! - **Workspaces**: Named object-key subtrees owned by exactly one user
//! - **Visibility**: Public vs. private namespace roots for a workspace
//! - **Share Levels**: Hierarchical access levels granted on a workspace
//!
//! ## Architecture
//!
//! ```text
//! User
//!   ├─ private/{username}/...        (implicit private namespace)
//!   └─ Workspace (owned)
//!         ├─ Visibility (public | private)
//!         └─ shared at a ShareLevel (read < readwrite < own)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use workspaces_org::{ShareLevel, User, Workspace, WorkspaceVisibility};
//!
//! // A user and a public workspace they own
//! let alice = User::new("alice");
//! let demo = Workspace::new("demo", alice.clone(), WorkspaceVisibility::Public);
//! assert!(demo.is_public());
//!
//! // Share levels form a hierarchy
//! assert!(ShareLevel::ReadWrite.can_write());
//! assert!(!ShareLevel::Read.can_write());
//! ```
//!
//! ## Cross-Crate Integration
//!
//! This crate is designed to work with:
//! - `workspaces-policy`: Compiles these models into S3 session policies
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support (enabled by default)

pub mod share;
pub mod user;
pub mod workspace;

// Re-export main types for convenience
pub use share::ShareLevel;
pub use user::User;
pub use workspace::{Workspace, WorkspaceVisibility};
