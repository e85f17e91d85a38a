//! Target service — read use-cases for the target registry.

use foxhen_domain::error::{FoxhenError, NotFoundError};
use foxhen_domain::id::TargetId;
use foxhen_domain::target::Target;

use crate::ports::TargetRepository;

/// Application service answering target lookups.
pub struct TargetService<R> {
    repo: R,
}

impl<R: TargetRepository> TargetService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a target by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`FoxhenError::NotFound`] when no target with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_target(&self, id: &TargetId) -> Result<Target, FoxhenError> {
        match self.repo.get_by_id(id).await? {
            Some(target) => Ok(target),
            None => {
                tracing::debug!(target_id = %id, "target not found");
                Err(NotFoundError {
                    entity: "Target",
                    id: id.to_string(),
                }
                .into())
            }
        }
    }

    /// List all targets in registry order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_targets(&self) -> Result<Vec<Target>, FoxhenError> {
        self.repo.get_all().await
    }
}
