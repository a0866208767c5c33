//! In-memory repository adapter.
//!
//! Mirrors the table semantics of the managed store: puts overwrite, updates
//! upsert, deletes of missing keys succeed, and filtered reads are full scans.

use async_trait::async_trait;
use dashmap::DashMap;

use payments_types::{PaymentFilter, PaymentId, PaymentRecord, PaymentRepository, RepoError};

/// Process-local payments table keyed by id.
#[derive(Debug, Default)]
pub struct MemoryRepo {
    items: DashMap<PaymentId, PaymentRecord>,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl PaymentRepository for MemoryRepo {
    #[tracing::instrument(skip(self))]
    async fn scan_payments(
        &self,
        filter: Option<PaymentFilter>,
    ) -> Result<Vec<PaymentRecord>, RepoError> {
        let items: Vec<PaymentRecord> = self
            .items
            .iter()
            .filter(|entry| filter.as_ref().is_none_or(|f| entry.value().matches(f)))
            .map(|entry| entry.value().clone())
            .collect();

        tracing::debug!(count = items.len(), "scanned memory table");
        Ok(items)
    }

    #[tracing::instrument(skip(self, record), fields(payment_id = %record.id))]
    async fn put_payment(&self, record: &PaymentRecord) -> Result<(), RepoError> {
        self.items.insert(record.id.clone(), record.clone());
        Ok(())
    }

    #[tracing::instrument(skip(self, record), fields(payment_id = %record.id))]
    async fn update_payment(&self, record: &PaymentRecord) -> Result<(), RepoError> {
        // All non-key attributes are replaced, so an upsert is a plain insert.
        self.items.insert(record.id.clone(), record.clone());
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(payment_id = %id))]
    async fn delete_payment(&self, id: &PaymentId) -> Result<(), RepoError> {
        self.items.remove(id);
        Ok(())
    }
}
