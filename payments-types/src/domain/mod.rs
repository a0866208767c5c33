//! Domain models for the payment record service.

pub mod payment;

pub use payment::{PaymentAttribute, PaymentFilter, PaymentId, PaymentRecord, Timestamp};
