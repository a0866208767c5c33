//! # Payments Client SDK
//!
//! A typed Rust client for the payment record API.

use payments_types::{
    CreatePaymentRequest, PaymentId, PaymentRecord, SuccessResponse, UpdatePaymentRequest,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// True for a lookup that matched no payment.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}

/// Payments API client.
pub struct PaymentsClient {
    base_url: String,
    http: Client,
}

impl PaymentsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Lists every payment.
    pub async fn list_payments(&self) -> Result<Vec<PaymentRecord>, ClientError> {
        self.get("/payments", &[]).await
    }

    /// Lists the payments of one user.
    pub async fn list_user_payments(&self, user_id: &str) -> Result<Vec<PaymentRecord>, ClientError> {
        self.get("/userPayments", &[("userId", user_id)]).await
    }

    /// Gets the payment for a reservation.
    pub async fn get_by_reserve_id(&self, reserve_id: &str) -> Result<PaymentRecord, ClientError> {
        self.get("/paymentReserveId", &[("reserveId", reserve_id)])
            .await
    }

    /// Gets the payment for a borrow transaction.
    pub async fn get_by_borrow_id(&self, borrow_id: &str) -> Result<PaymentRecord, ClientError> {
        self.get("/paymentBorrowId", &[("borrowId", borrow_id)])
            .await
    }

    /// Creates a payment and returns the id the server assigned.
    pub async fn create_payment(&self, req: &CreatePaymentRequest) -> Result<PaymentId, ClientError> {
        let resp = self
            .http
            .post(format!("{}/payment", self.base_url))
            .json(req)
            .send()
            .await?;
        let ack: SuccessResponse = self.handle_response(resp).await?;
        ack.id.ok_or_else(|| ClientError::Api {
            status: 200,
            message: "create response carried no id".into(),
        })
    }

    /// Overwrites every field of a payment.
    pub async fn update_payment(&self, req: &UpdatePaymentRequest) -> Result<(), ClientError> {
        let resp = self
            .http
            .put(format!("{}/payment", self.base_url))
            .json(req)
            .send()
            .await?;
        let _: SuccessResponse = self.handle_response(resp).await?;
        Ok(())
    }

    /// Deletes a payment. Unknown ids succeed.
    pub async fn delete_payment(&self, id: &PaymentId) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.payment_url(id)?)
            .send()
            .await?;
        let _: SuccessResponse = self.handle_response(resp).await?;
        Ok(())
    }

    /// URL of `/payment/{id}` with the id percent-encoded as one segment.
    fn payment_url(&self, id: &PaymentId) -> Result<reqwest::Url, ClientError> {
        let mut url = reqwest::Url::parse(&format!("{}/payment", self.base_url)).map_err(|e| {
            ClientError::Api {
                status: 0,
                message: format!("invalid base URL: {}", e),
            }
        })?;
        url.path_segments_mut()
            .map_err(|_| ClientError::Api {
                status: 0,
                message: "base URL cannot carry a path".into(),
            })?
            .push(id.as_str());
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PaymentsClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = PaymentsClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_payment_url_encodes_id() {
        let client = PaymentsClient::new("http://localhost:3000");

        let url = client
            .payment_url(&PaymentId::from_string("a b/c"))
            .unwrap();

        assert_eq!(url.as_str(), "http://localhost:3000/payment/a%20b%2Fc");
    }

    #[test]
    fn test_not_found_detection() {
        let err = ClientError::Api {
            status: 404,
            message: "Payment with reserveId r1 not found".into(),
        };
        assert!(err.is_not_found());

        let err = ClientError::Api {
            status: 500,
            message: "boom".into(),
        };
        assert!(!err.is_not_found());
    }
}
