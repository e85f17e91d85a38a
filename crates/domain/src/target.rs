//! Target — a unit of trackable state the platform reports on.

use std::fmt;

use serde::Serialize;

use crate::error::{FoxhenError, ValidationError};
use crate::id::TargetId;

/// Operational state tag of a target.
///
/// The taxonomy is open: any non-empty tag is accepted. `active` is the
/// only value the built-in seed set uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TargetState(String);

impl TargetState {
    pub const ACTIVE: &'static str = "active";

    /// Wrap a state tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The `active` state.
    #[must_use]
    pub fn active() -> Self {
        Self::new(Self::ACTIVE)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TargetState {
    fn default() -> Self {
        Self::active()
    }
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registry record: identity, label, difficulty and state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub id: TargetId,
    pub name: String,
    pub difficulty: u32,
    pub state: TargetState,
}

impl Target {
    /// Create a builder for constructing a [`Target`].
    #[must_use]
    pub fn builder() -> TargetBuilder {
        TargetBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FoxhenError::Validation`] when `name` or `state` is empty.
    pub fn validate(&self) -> Result<(), FoxhenError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.state.as_str().trim().is_empty() {
            return Err(ValidationError::EmptyState.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Target`].
#[derive(Debug, Default)]
pub struct TargetBuilder {
    id: Option<String>,
    name: Option<String>,
    difficulty: u32,
    state: Option<TargetState>,
}

impl TargetBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn difficulty(mut self, difficulty: u32) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn state(mut self, state: TargetState) -> Self {
        self.state = Some(state);
        self
    }

    /// Consume the builder, validate, and return a [`Target`].
    ///
    /// The state defaults to `active` when not set.
    ///
    /// # Errors
    ///
    /// Returns [`FoxhenError::Validation`] if `id`, `name` or `state` is
    /// missing or empty.
    pub fn build(self) -> Result<Target, FoxhenError> {
        let id = TargetId::new(self.id.unwrap_or_default())?;
        let target = Target {
            id,
            name: self.name.unwrap_or_default(),
            difficulty: self.difficulty,
            state: self.state.unwrap_or_default(),
        };
        target.validate()?;
        Ok(target)
    }
}
