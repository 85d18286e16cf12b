//! User domain models
//!
//! This module provides the User entity. A user's username doubles as the
//! anchor of their private object-key namespace, so it is part of the
//! platform's security model rather than purely cosmetic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user of the storage platform.
///
/// Every user implicitly owns the `private/{username}/` subtree of the
/// shared bucket, in addition to any workspaces they own or that are
/// shared with them.
///
/// # Examples
///
/// ```
/// use workspaces_org::User;
///
/// let user = User::new("alice");
/// assert_eq!(user.username, "alice");
/// assert!(user.email.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login name, unique across the platform.
    ///
    /// Used as the private-namespace path segment, so it must remain
    /// stable for the lifetime of the account.
    pub username: String,

    /// Contact email address
    pub email: Option<String>,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user.
    ///
    /// The user is created with:
    /// - A newly generated UUID v7 ID
    /// - No email address
    /// - Current timestamp for created_at
    ///
    /// # Arguments
    ///
    /// * `username` - Login name (must be unique across the platform)
    ///
    /// # Examples
    ///
    /// ```
    /// use workspaces_org::User;
    ///
    /// let user = User::new("alice");
    /// ```
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            username: username.into(),
            email: None,
            created_at: Utc::now(),
        }
    }

    /// Set the contact email address.
    ///
    /// # Examples
    ///
    /// ```
    /// use workspaces_org::User;
    ///
    /// let user = User::new("alice").with_email("alice@example.com");
    /// assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    /// ```
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
