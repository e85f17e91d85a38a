//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`FoxhenError`] via `#[from]`.

/// Top-level error shared by the domain, application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum FoxhenError {
    /// A domain invariant was violated by the caller's input.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store failed in an unexpected way.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("identifier must not be empty")]
    EmptyId,

    #[error("malformed identifier: {0}")]
    MalformedId(String),

    #[error("name must not be empty")]
    EmptyName,

    #[error("state must not be empty")]
    EmptyState,

    #[error("duplicate identifier `{0}`")]
    DuplicateId(String),
}

/// A lookup found no record with the given identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} `{id}` not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"Target"`).
    pub entity: &'static str,
    /// The identifier that was not found.
    pub id: String,
}
