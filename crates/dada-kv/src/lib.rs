//! Typed key-value storage for the GYM DADA storefront.
//!
//! The storefront keeps its small amount of durable state (registered users and
//! the signed-in user) in the host's local key-value storage. This crate
//! provides that storage behind a backend trait, with automatic JSON
//! serialization on top.
//!
//! # Example
//!
//! ```rust
//! use dada_kv::{MemoryBackend, Store};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Profile {
//!     username: String,
//! }
//!
//! let mut store = Store::new(MemoryBackend::new());
//!
//! // Store a value
//! store.set("currentUser", &Profile { username: "admin".into() }).unwrap();
//!
//! // Retrieve a value
//! let profile: Option<Profile> = store.get("currentUser").unwrap();
//! assert_eq!(profile.unwrap().username, "admin");
//!
//! // Delete a value
//! store.delete("currentUser").unwrap();
//! assert!(!store.exists("currentUser").unwrap());
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{FileBackend, KvBackend, MemoryBackend};
pub use error::KvError;
pub use kv::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileBackend, KvBackend, KvError, MemoryBackend, Store};
}
