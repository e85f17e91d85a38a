//! Built-in seed set used when no targets are configured.

use foxhen_domain::error::FoxhenError;
use foxhen_domain::target::{Target, TargetState};

/// The two demo targets the registry starts with by default.
///
/// # Errors
///
/// Returns a validation error if a seed record violates domain invariants.
pub fn default_targets() -> Result<Vec<Target>, FoxhenError> {
    Ok(vec![
        Target::builder()
            .id("target-001")
            .name("Web Server Alpha")
            .difficulty(1)
            .state(TargetState::active())
            .build()?,
        Target::builder()
            .id("target-002")
            .name("Database Beta")
            .difficulty(2)
            .state(TargetState::active())
            .build()?,
    ])
}
