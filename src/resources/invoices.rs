//! Invoice resource operations.
//!
//! Invoices are generated by the service (for subscriptions and one-off
//! payments); the API exposes them read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::StreamClient;
use crate::clients::{HttpError, HttpMethod, HttpRequest};
use crate::resources::common::{ListResource, PaginationParams};

/// A detailed invoice as returned by the single-invoice endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    /// The invoice identifier.
    pub id: String,
    /// The subscription that generated this invoice, if any.
    #[serde(default)]
    pub subscription_id: Option<String>,
    /// The consumer billed by this invoice.
    #[serde(default)]
    pub organization_consumer_id: Option<String>,
    /// Invoice amount.
    #[serde(default)]
    pub amount: Option<f64>,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Invoice status (e.g. `PENDING`, `PAID`), passed through verbatim.
    #[serde(default)]
    pub status: Option<String>,
    /// Payment due date.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// When the invoice was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The reduced invoice shape returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceListItem {
    /// The invoice identifier.
    pub id: String,
    /// Invoice amount.
    #[serde(default)]
    pub amount: Option<f64>,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Invoice status, passed through verbatim.
    #[serde(default)]
    pub status: Option<String>,
    /// When the invoice was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl StreamClient {
    /// Lists invoices with pagination.
    ///
    /// `GET /api/v2/invoices`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn list_invoices(
        &self,
        params: Option<&PaginationParams>,
    ) -> Result<ListResource<InvoiceListItem>, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, "/api/v2/invoices");
        if let Some(params) = params {
            builder = params.apply(builder);
        }
        self.http.request(builder.build()).await
    }

    /// Fetches a single invoice by ID.
    ///
    /// `GET /api/v2/invoices/{invoice_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn get_invoice(&self, invoice_id: &str) -> Result<Invoice, HttpError> {
        let path = format!("/api/v2/invoices/{}", urlencoding::encode(invoice_id));
        self.http
            .request(HttpRequest::builder(HttpMethod::Get, path).build())
            .await
    }
}
