//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use payments_types::domain::{PaymentId, PaymentRecord, Timestamp};
use payments_types::dto::{
    BorrowIdQuery, CreatePaymentRequest, ErrorResponse, ReserveIdQuery, SuccessResponse,
    UpdatePaymentRequest, UserIdQuery,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List all payments (full table scan)
#[utoipa::path(
    get,
    path = "/payments",
    tag = "payments",
    responses(
        (status = 200, description = "Every payment, in store scan order", body = Vec<PaymentRecord>),
        (status = 500, description = "Storage operation failed", body = ErrorResponse)
    )
)]
async fn list_payments() {}

/// List the payments of one user
#[utoipa::path(
    get,
    path = "/userPayments/{userId}",
    tag = "payments",
    params(
        ("userId" = String, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "Matching payments, possibly none", body = Vec<PaymentRecord>),
        (status = 500, description = "Storage operation failed", body = ErrorResponse)
    )
)]
async fn list_user_payments() {}

/// List the payments of one user (query-string form)
#[utoipa::path(
    get,
    path = "/userPayments",
    tag = "payments",
    params(UserIdQuery),
    responses(
        (status = 200, description = "Matching payments, possibly none", body = Vec<PaymentRecord>),
        (status = 400, description = "Missing userId", body = ErrorResponse),
        (status = 500, description = "Storage operation failed", body = ErrorResponse)
    )
)]
async fn list_user_payments_query() {}

/// Get the first payment for a reservation
#[utoipa::path(
    get,
    path = "/paymentReserveId/{reserveId}",
    tag = "payments",
    params(
        ("reserveId" = String, Path, description = "Reservation identifier")
    ),
    responses(
        (status = 200, description = "First matching payment", body = PaymentRecord),
        (status = 404, description = "No payment for this reservation", body = ErrorResponse),
        (status = 500, description = "Storage operation failed", body = ErrorResponse)
    )
)]
async fn get_by_reserve_id() {}

/// Get the first payment for a reservation (query-string form)
#[utoipa::path(
    get,
    path = "/paymentReserveId",
    tag = "payments",
    params(ReserveIdQuery),
    responses(
        (status = 200, description = "First matching payment", body = PaymentRecord),
        (status = 400, description = "Missing reserveId", body = ErrorResponse),
        (status = 404, description = "No payment for this reservation", body = ErrorResponse),
        (status = 500, description = "Storage operation failed", body = ErrorResponse)
    )
)]
async fn get_by_reserve_id_query() {}

/// Get the first payment for a borrow transaction
#[utoipa::path(
    get,
    path = "/paymentBorrowId/{borrowId}",
    tag = "payments",
    params(
        ("borrowId" = String, Path, description = "Borrow transaction identifier")
    ),
    responses(
        (status = 200, description = "First matching payment", body = PaymentRecord),
        (status = 404, description = "No payment for this borrow", body = ErrorResponse),
        (status = 500, description = "Storage operation failed", body = ErrorResponse)
    )
)]
async fn get_by_borrow_id() {}

/// Get the first payment for a borrow transaction (query-string form)
#[utoipa::path(
    get,
    path = "/paymentBorrowId",
    tag = "payments",
    params(BorrowIdQuery),
    responses(
        (status = 200, description = "First matching payment", body = PaymentRecord),
        (status = 400, description = "Missing borrowId", body = ErrorResponse),
        (status = 404, description = "No payment for this borrow", body = ErrorResponse),
        (status = 500, description = "Storage operation failed", body = ErrorResponse)
    )
)]
async fn get_by_borrow_id_query() {}

/// Create a payment; the server assigns its id
#[utoipa::path(
    post,
    path = "/payment",
    tag = "payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 200, description = "Payment stored", body = SuccessResponse),
        (status = 400, description = "Body is not a payment", body = ErrorResponse),
        (status = 500, description = "Storage operation failed", body = ErrorResponse)
    )
)]
async fn create_payment() {}

/// Overwrite every field of a payment
#[utoipa::path(
    put,
    path = "/payment",
    tag = "payments",
    request_body = UpdatePaymentRequest,
    responses(
        (status = 200, description = "Payment overwritten", body = SuccessResponse),
        (status = 400, description = "Body is not a full payment", body = ErrorResponse),
        (status = 500, description = "Storage operation failed", body = ErrorResponse)
    )
)]
async fn update_payment() {}

/// Delete a payment by id
#[utoipa::path(
    delete,
    path = "/payment/{id}",
    tag = "payments",
    params(
        ("id" = String, Path, description = "Payment identifier")
    ),
    responses(
        (status = 200, description = "Payment removed, or was already absent", body = SuccessResponse),
        (status = 500, description = "Storage operation failed", body = ErrorResponse)
    )
)]
async fn delete_payment() {}

/// OpenAPI documentation for the Payments API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Record Service API",
        version = "1.0.0",
        description = "CRUD endpoints over the payments table.\n\nLookups by user, reservation and borrow id scan the whole table; their cost grows with table size.",
        license(name = "MIT"),
    ),
    paths(
        health,
        list_payments,
        list_user_payments,
        list_user_payments_query,
        get_by_reserve_id,
        get_by_reserve_id_query,
        get_by_borrow_id,
        get_by_borrow_id_query,
        create_payment,
        update_payment,
        delete_payment,
    ),
    components(
        schemas(
            PaymentId,
            Timestamp,
            PaymentRecord,
            CreatePaymentRequest,
            UpdatePaymentRequest,
            SuccessResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment record operations"),
    )
)]
pub struct ApiDoc;
