//! Error types for remi-core

use thiserror::Error;

use crate::models::ReminderStatus;

/// Result type alias using remi-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in remi-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (connect, timeout, TLS)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request the remote side (or the gateway's pre-flight check) refused
    #[error("Validation error: {0}")]
    Validation(String),

    /// Reminder id no longer exists, locally or server-side
    #[error("Reminder not found: {0}")]
    NotFound(String),

    /// Status change that violates the reminder lifecycle
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: ReminderStatus,
        to: ReminderStatus,
    },

    /// Another mutation for the same reminder is still in flight
    #[error("Mutation already in flight for reminder: {0}")]
    ConcurrentMutation(String),

    /// Operation issued before a user was bound to the session
    #[error("No user bound to the session")]
    NotBound,

    /// Non-success response that maps to no more specific kind
    #[error("Remote API error: {0}")]
    Api(String),

    /// Response body that could not be decoded into reminder records
    #[error("Invalid response payload: {0}")]
    InvalidPayload(String),
}
