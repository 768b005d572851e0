//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// An entity with this id already exists.
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    /// An order was requested for an empty cart.
    #[error("Cannot create an order from an empty cart")]
    EmptyCart,

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Malformed wilaya/commune data.
    #[error("Invalid wilaya data at line {line}: {reason}")]
    InvalidWilayaData { line: usize, reason: String },

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
