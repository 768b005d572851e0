//! Accounts for the GYM DADA storefront.
//!
//! Provides the user list, the signed-in user and admin user management,
//! persisted in local key-value storage under `users` and `currentUser`.
//!
//! There is no real authentication: any known user signs in with a password
//! of four or more characters, and `admin`/`admin123` always opens the
//! built-in administrator account.

mod error;
mod store;
mod user;

pub use error::AuthError;
pub use store::{require_admin, IdentityStore, CURRENT_USER_KEY, MIN_PASSWORD_LEN, USERS_KEY};
pub use user::{Role, User, UserUpdate, BUILTIN_ADMIN_ID};
