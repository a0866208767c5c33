//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use payments_types::{
    AppError, BorrowIdQuery, CreatePaymentRequest, ErrorResponse, PaymentId, PaymentRepository,
    ReserveIdQuery, SuccessResponse, UpdatePaymentRequest, UserIdQuery,
};

use crate::PaymentService;

/// Application state shared across handlers.
pub struct AppState<R: PaymentRepository> {
    pub service: PaymentService<R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(AppError::BadRequest(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError(AppError::BadRequest(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError(AppError::BadRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "storage operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = ErrorResponse {
            error: message,
            code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Reads
// ─────────────────────────────────────────────────────────────────────────────

/// List all payments.
#[tracing::instrument(skip(state))]
pub async fn list_payments<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let payments = state.service.list_payments().await?;
    Ok(Json(payments))
}

/// List payments of a user (`/userPayments/{userId}`).
#[tracing::instrument(skip_all)]
pub async fn list_user_payments<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(user_id) = path?;
    let payments = state.service.list_user_payments(user_id).await?;
    Ok(Json(payments))
}

/// List payments of a user (`/userPayments?userId=`).
#[tracing::instrument(skip_all)]
pub async fn list_user_payments_query<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    query: Result<Query<UserIdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let payments = state.service.list_user_payments(query.user_id).await?;
    Ok(Json(payments))
}

/// Get a payment by reservation id (`/paymentReserveId/{reserveId}`).
#[tracing::instrument(skip_all)]
pub async fn get_by_reserve_id<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(reserve_id) = path?;
    let payment = state.service.get_by_reserve_id(reserve_id).await?;
    Ok(Json(payment))
}

/// Get a payment by reservation id (`/paymentReserveId?reserveId=`).
#[tracing::instrument(skip_all)]
pub async fn get_by_reserve_id_query<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    query: Result<Query<ReserveIdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let payment = state.service.get_by_reserve_id(query.reserve_id).await?;
    Ok(Json(payment))
}

/// Get a payment by borrow id (`/paymentBorrowId/{borrowId}`).
#[tracing::instrument(skip_all)]
pub async fn get_by_borrow_id<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(borrow_id) = path?;
    let payment = state.service.get_by_borrow_id(borrow_id).await?;
    Ok(Json(payment))
}

/// Get a payment by borrow id (`/paymentBorrowId?borrowId=`).
#[tracing::instrument(skip_all)]
pub async fn get_by_borrow_id_query<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    query: Result<Query<BorrowIdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let payment = state.service.get_by_borrow_id(query.borrow_id).await?;
    Ok(Json(payment))
}

// ─────────────────────────────────────────────────────────────────────────────
// Writes
// ─────────────────────────────────────────────────────────────────────────────

/// Create a payment.
#[tracing::instrument(skip_all)]
pub async fn create_payment<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    body: Result<Json<CreatePaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;
    let record = state.service.create_payment(req).await?;
    Ok(Json(SuccessResponse::created(record.id)))
}

/// Overwrite a payment.
#[tracing::instrument(skip_all)]
pub async fn update_payment<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    body: Result<Json<UpdatePaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;
    tracing::debug!(payment_id = %req.id, "updating payment");
    state.service.update_payment(req).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Delete a payment by id.
#[tracing::instrument(skip_all)]
pub async fn delete_payment<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = path?;
    tracing::debug!(payment_id = %id, "deleting payment");
    state
        .service
        .delete_payment(PaymentId::from_string(id))
        .await?;
    Ok(Json(SuccessResponse::ok()))
}
