//! # foxhen-adapter-memory
//!
//! In-memory implementation of the [`TargetRepository`] port.
//!
//! ## Built-in seed set
//!
//! | Id | Name | Difficulty | State |
//! |----|------|------------|-------|
//! | `target-001` | Web Server Alpha | 1 | `active` |
//! | `target-002` | Database Beta | 2 | `active` |
//!
//! ## Concurrency
//!
//! The registry is an immutable snapshot behind an [`Arc`]. Reads never
//! lock, and cloning the repository shares the same snapshot.
//!
//! ## Dependency rule
//!
//! Depends on `foxhen-app` (port traits) and `foxhen-domain` only.

mod seed;

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use foxhen_app::ports::TargetRepository;
use foxhen_domain::error::{FoxhenError, ValidationError};
use foxhen_domain::id::TargetId;
use foxhen_domain::target::Target;

pub use seed::default_targets;

#[derive(Debug, Default)]
struct Snapshot {
    targets: Vec<Target>,
    index: HashMap<TargetId, usize>,
}

/// Target registry held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTargetRepository {
    snapshot: Arc<Snapshot>,
}

impl InMemoryTargetRepository {
    /// Build a registry from `targets`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateId`] when two targets share an id.
    pub fn from_targets(targets: Vec<Target>) -> Result<Self, FoxhenError> {
        let mut index = HashMap::with_capacity(targets.len());
        for (position, target) in targets.iter().enumerate() {
            if index.insert(target.id.clone(), position).is_some() {
                return Err(ValidationError::DuplicateId(target.id.to_string()).into());
            }
        }
        tracing::debug!(count = targets.len(), "target registry built");
        Ok(Self {
            snapshot: Arc::new(Snapshot { targets, index }),
        })
    }

    /// Registry populated with [`default_targets`].
    ///
    /// # Errors
    ///
    /// Only fails if the built-in seed set is invalid.
    pub fn seeded() -> Result<Self, FoxhenError> {
        Self::from_targets(default_targets()?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot.targets.is_empty()
    }

    fn lookup(&self, id: &TargetId) -> Option<&Target> {
        self.snapshot
            .index
            .get(id)
            .and_then(|&position| self.snapshot.targets.get(position))
    }
}

impl TargetRepository for InMemoryTargetRepository {
    fn get_by_id(
        &self,
        id: &TargetId,
    ) -> impl Future<Output = Result<Option<Target>, FoxhenError>> + Send {
        let result = self.lookup(id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Target>, FoxhenError>> + Send {
        let result = self.snapshot.targets.clone();
        async { Ok(result) }
    }
}
