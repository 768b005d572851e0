//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown user or password too short.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Username or email already taken.
    #[error("user already exists: {0}")]
    UserAlreadyExists(String),

    #[error("user not found: {0}")]
    UserNotFound(String),

    /// No one is signed in.
    #[error("not signed in")]
    NotAuthenticated,

    /// Signed in, but not as an administrator.
    #[error("insufficient permissions")]
    InsufficientPermissions,

    #[error("cannot delete the signed-in user")]
    CannotDeleteSelf,

    /// The built-in administrator cannot be deleted or demoted.
    #[error("user is protected: {0}")]
    ProtectedUser(String),

    #[error("password too weak: {0}")]
    WeakPassword(String),

    /// Local storage failure.
    #[error("storage error: {0}")]
    Storage(#[from] dada_kv::KvError),
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials | AuthError::NotAuthenticated)
    }

    /// Check if this is a permission error.
    pub fn is_permission_error(&self) -> bool {
        matches!(
            self,
            AuthError::InsufficientPermissions | AuthError::CannotDeleteSelf | AuthError::ProtectedUser(_)
        )
    }

    /// Storefront translation key for errors shown to the user.
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            AuthError::InvalidCredentials => Some("login.invalidCredentials"),
            AuthError::UserAlreadyExists(_) => Some("signup.userExists"),
            AuthError::CannotDeleteSelf => Some("admin.users.cannotDeleteSelf"),
            AuthError::ProtectedUser(_) => Some("admin.users.cannotDeleteDefaultAdmin"),
            _ => None,
        }
    }
}
