//! Storage port — repository traits for the target registry.

use std::future::Future;

use foxhen_domain::error::FoxhenError;
use foxhen_domain::id::TargetId;
use foxhen_domain::target::Target;

/// Read access to the set of known [`Target`]s.
///
/// Implementations own all target state. The registry is read-only once
/// constructed, so implementations must be safe to query concurrently.
pub trait TargetRepository {
    /// Get a target by its identifier, `None` when absent.
    fn get_by_id(
        &self,
        id: &TargetId,
    ) -> impl Future<Output = Result<Option<Target>, FoxhenError>> + Send;

    /// Get all targets in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Target>, FoxhenError>> + Send;
}
