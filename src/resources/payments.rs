//! Payment resource operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::StreamClient;
use crate::clients::{HttpError, HttpMethod, HttpRequest};
use crate::resources::common::ListResource;

/// A payment as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    /// The payment identifier.
    pub id: String,
    /// The invoice this payment settles, if any.
    #[serde(default)]
    pub invoice_id: Option<String>,
    /// Paid amount.
    #[serde(default)]
    pub amount: Option<f64>,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Payment status (e.g. `CAPTURED`, `REFUNDED`), passed through verbatim.
    #[serde(default)]
    pub status: Option<String>,
    /// When the payment was made.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Filter for the payment list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentListParams {
    /// Restrict to payments settling the given invoice.
    pub invoice_id: Option<String>,
}

/// Input for refunding a payment.
///
/// With no amount the full payment is refunded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentRefundRequest {
    /// Amount to refund; omit for a full refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Free-text reason recorded with the refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl StreamClient {
    /// Lists payments, optionally filtered by invoice.
    ///
    /// `GET /api/v2/payments`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn list_payments(
        &self,
        params: Option<&PaymentListParams>,
    ) -> Result<ListResource<Payment>, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, "/api/v2/payments");
        if let Some(params) = params {
            builder = builder.opt_query_param("invoice_id", params.invoice_id.clone());
        }
        self.http.request(builder.build()).await
    }

    /// Fetches a single payment by ID.
    ///
    /// `GET /api/v2/payments/{payment_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn get_payment(&self, payment_id: &str) -> Result<Payment, HttpError> {
        let path = format!("/api/v2/payments/{}", urlencoding::encode(payment_id));
        self.http
            .request(HttpRequest::builder(HttpMethod::Get, path).build())
            .await
    }

    /// Refunds a payment, fully or partially.
    ///
    /// `POST /api/v2/payments/{payment_id}/refund`
    ///
    /// Refunds are not retried on failure; a transport error leaves the
    /// refund state unknown and the caller should inspect the payment
    /// before trying again.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn refund_payment(
        &self,
        payment_id: &str,
        input: &PaymentRefundRequest,
    ) -> Result<Payment, HttpError> {
        let path = format!("/api/v2/payments/{}/refund", urlencoding::encode(payment_id));
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .json_body(input)?
            .build();
        self.http.request(request).await
    }
}
