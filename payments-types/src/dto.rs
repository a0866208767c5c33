//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{PaymentId, PaymentRecord, Timestamp};

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a payment. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    #[schema(example = "u1")]
    pub user_id: String,
    #[schema(example = "r1")]
    pub reserve_id: String,
    #[schema(example = "active")]
    pub status: String,
    #[schema(example = 1000)]
    pub timestamp: Timestamp,
    #[schema(example = 9.99)]
    pub price: f64,
    #[schema(example = "b1")]
    pub borrow_id: String,
}

impl CreatePaymentRequest {
    /// Builds the record to store under `id`.
    pub fn into_record(self, id: PaymentId) -> PaymentRecord {
        PaymentRecord {
            id,
            user_id: self.user_id,
            reserve_id: self.reserve_id,
            status: self.status,
            timestamp: self.timestamp,
            price: self.price,
            borrow_id: self.borrow_id,
        }
    }
}

/// Full overwrite of an existing payment. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentRequest {
    /// Identifier of the record to overwrite
    pub id: PaymentId,
    #[schema(example = "u1")]
    pub user_id: String,
    #[schema(example = "r1")]
    pub reserve_id: String,
    #[schema(example = "closed")]
    pub status: String,
    #[schema(example = 1000)]
    pub timestamp: Timestamp,
    #[schema(example = 9.99)]
    pub price: f64,
    #[schema(example = "b1")]
    pub borrow_id: String,
}

impl From<UpdatePaymentRequest> for PaymentRecord {
    fn from(req: UpdatePaymentRequest) -> Self {
        PaymentRecord {
            id: req.id,
            user_id: req.user_id,
            reserve_id: req.reserve_id,
            status: req.status,
            timestamp: req.timestamp,
            price: req.price,
            borrow_id: req.borrow_id,
        }
    }
}

/// Acknowledgement returned by every write endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    #[schema(example = true)]
    pub success: bool,
    /// Id assigned by a create; absent for update and delete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PaymentId>,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            id: None,
        }
    }

    pub fn created(id: PaymentId) -> Self {
        Self {
            success: true,
            id: Some(id),
        }
    }
}

/// Error body shared by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Payment with reserveId r1 not found")]
    pub error: String,
    #[schema(example = 404)]
    pub code: u16,
}

// ─────────────────────────────────────────────────────────────────────────────
// Query-string variants of the lookup endpoints
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UserIdQuery {
    /// User whose payments to list
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ReserveIdQuery {
    /// Reservation to look up
    pub reserve_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BorrowIdQuery {
    /// Borrow transaction to look up
    pub borrow_id: String,
}
