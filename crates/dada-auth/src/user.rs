//! User types.

use dada_commerce::ids::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Id of the administrator account that always exists.
pub const BUILTIN_ADMIN_ID: &str = "admin-1";

/// User role for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular customer.
    #[default]
    User,
    /// Back-office access.
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A storefront account, stored as JSON in local storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

impl User {
    /// A new regular user.
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        email: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            full_name: full_name.into(),
            role: Role::User,
        }
    }

    /// The built-in administrator.
    pub fn builtin_admin() -> Self {
        Self {
            id: UserId::new(BUILTIN_ADMIN_ID),
            username: "admin".to_string(),
            email: "admin@gymstore.com".to_string(),
            full_name: "Admin User".to_string(),
            role: Role::Admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_builtin_admin(&self) -> bool {
        self.id.as_str() == BUILTIN_ADMIN_ID
    }

    /// Whether `login` names this user, by username or email.
    pub fn matches_login(&self, username_or_email: &str) -> bool {
        self.username == username_or_email || self.email == username_or_email
    }
}

/// Admin edit of a user; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<Role>,
}

impl UserUpdate {
    pub(crate) fn apply(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(full_name) = self.full_name {
            user.full_name = full_name;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
    }
}
