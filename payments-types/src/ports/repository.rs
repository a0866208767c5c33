//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (DynamoDB, in-memory) implement this trait.

use crate::domain::{PaymentFilter, PaymentId, PaymentRecord};
use crate::error::RepoError;

/// The storage port for payment records.
///
/// Each method maps to exactly one store operation. Implementations must not
/// add existence checks, uniqueness checks or retries on top of the store.
#[async_trait::async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Scans the whole table, optionally keeping only items that match the
    /// equality filter. Order is whatever the store yields.
    async fn scan_payments(
        &self,
        filter: Option<PaymentFilter>,
    ) -> Result<Vec<PaymentRecord>, RepoError>;

    /// Writes the record unconditionally, replacing any item with the same id.
    async fn put_payment(&self, record: &PaymentRecord) -> Result<(), RepoError>;

    /// Overwrites every non-key attribute of the item keyed by `record.id`.
    ///
    /// A missing item is not an error; the store's upsert semantics apply.
    async fn update_payment(&self, record: &PaymentRecord) -> Result<(), RepoError>;

    /// Removes the item keyed by `id`. Removing a missing item succeeds.
    async fn delete_payment(&self, id: &PaymentId) -> Result<(), RepoError>;
}
