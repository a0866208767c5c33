//! Payment Application Service
//!
//! Translates each use case into exactly one repository call.
//! Contains NO infrastructure logic and NO validation beyond typed input.

use payments_types::{
    AppError, CreatePaymentRequest, PaymentFilter, PaymentId, PaymentRecord, PaymentRepository,
    UpdatePaymentRequest,
};

/// Application service for payment records.
///
/// Generic over `R: PaymentRepository` - the adapter is injected at compile time.
/// This enables:
/// - Swapping the store without code changes
/// - Testing with an in-memory repo
/// - Compile-time checks for port implementation
pub struct PaymentService<R: PaymentRepository> {
    repo: R,
}

impl<R: PaymentRepository> PaymentService<R> {
    /// Creates a new payment service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Reads (all table scans)
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists every payment in store scan order.
    pub async fn list_payments(&self) -> Result<Vec<PaymentRecord>, AppError> {
        self.repo.scan_payments(None).await.map_err(Into::into)
    }

    /// Lists the payments of one user. An unknown user yields an empty list.
    pub async fn list_user_payments(&self, user_id: String) -> Result<Vec<PaymentRecord>, AppError> {
        self.repo
            .scan_payments(Some(PaymentFilter::UserId(user_id)))
            .await
            .map_err(Into::into)
    }

    /// First payment whose `reserveId` matches.
    pub async fn get_by_reserve_id(&self, reserve_id: String) -> Result<PaymentRecord, AppError> {
        self.first_match(PaymentFilter::ReserveId(reserve_id)).await
    }

    /// First payment whose `borrowId` matches.
    pub async fn get_by_borrow_id(&self, borrow_id: String) -> Result<PaymentRecord, AppError> {
        self.first_match(PaymentFilter::BorrowId(borrow_id)).await
    }

    async fn first_match(&self, filter: PaymentFilter) -> Result<PaymentRecord, AppError> {
        let not_found = format!(
            "Payment with {} {} not found",
            filter.attribute(),
            filter.value()
        );

        let matches = self.repo.scan_payments(Some(filter)).await?;
        if matches.len() > 1 {
            tracing::warn!(count = matches.len(), "lookup matched several payments, using the first");
        }

        matches
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(not_found))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────────────

    /// Stores a new payment under a freshly generated id.
    ///
    /// No existence or uniqueness check is made on `reserveId`/`borrowId`.
    pub async fn create_payment(&self, req: CreatePaymentRequest) -> Result<PaymentRecord, AppError> {
        let record = req.into_record(PaymentId::new());
        self.repo.put_payment(&record).await?;

        tracing::info!(payment_id = %record.id, "payment created");
        Ok(record)
    }

    /// Overwrites every mutable field of the payment keyed by `req.id`.
    pub async fn update_payment(&self, req: UpdatePaymentRequest) -> Result<PaymentRecord, AppError> {
        let record = PaymentRecord::from(req);
        self.repo.update_payment(&record).await?;
        Ok(record)
    }

    /// Deletes a payment. Deleting an unknown id succeeds.
    pub async fn delete_payment(&self, id: PaymentId) -> Result<(), AppError> {
        self.repo.delete_payment(&id).await.map_err(Into::into)
    }
}
