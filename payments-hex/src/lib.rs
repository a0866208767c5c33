//! # Payments Hex
//!
//! Application service layer and HTTP adapter for the payment record service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (one store operation per use case)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served next to the API
//!
//! The service is generic over `R: PaymentRepository`, allowing
//! different repository implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::PaymentService;
