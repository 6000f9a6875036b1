//! Subscription resource operations, including freeze periods.
//!
//! A freeze is a time-bounded suspension of invoice generation for an
//! active subscription; freezes have their own CRUD surface nested under
//! the subscription.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::StreamClient;
use crate::clients::{HttpError, HttpMethod, HttpRequest};
use crate::resources::common::{ListResource, PaginationParams};

/// Input for creating a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionCreate {
    /// The product to subscribe to.
    pub product_id: String,
    /// The consumer being billed.
    pub organization_consumer_id: String,
    /// Units per billing cycle; server default is 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// First billing date; server default is now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
}

/// Input for updating a subscription. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionUpdate {
    /// New units per billing cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// Replacement product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

/// Optional input for cancelling a subscription.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionCancel {
    /// Free-text cancellation reason recorded with the subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A subscription as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    /// The subscription identifier.
    pub id: String,
    /// The subscribed product.
    #[serde(default)]
    pub product_id: Option<String>,
    /// The billed consumer.
    #[serde(default)]
    pub organization_consumer_id: Option<String>,
    /// Units per billing cycle.
    #[serde(default)]
    pub quantity: Option<u32>,
    /// Subscription status (e.g. `ACTIVE`, `CANCELLED`), passed through verbatim.
    #[serde(default)]
    pub status: Option<String>,
    /// Next invoice generation date, absent once cancelled.
    #[serde(default)]
    pub next_invoice_date: Option<DateTime<Utc>>,
    /// When the subscription was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Input for creating a freeze period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FreezeCreateRequest {
    /// When invoice generation stops.
    pub starts_at: DateTime<Utc>,
    /// When invoice generation resumes.
    pub ends_at: DateTime<Utc>,
}

/// Input for updating a freeze period. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FreezeUpdateRequest {
    /// New freeze start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    /// New freeze end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

/// A freeze period as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionFreeze {
    /// The freeze identifier.
    pub id: String,
    /// The frozen subscription.
    #[serde(default)]
    pub subscription_id: Option<String>,
    /// When invoice generation stops.
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    /// When invoice generation resumes.
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
}

impl StreamClient {
    /// Creates a new subscription.
    ///
    /// `POST /api/v2/subscriptions`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn create_subscription(
        &self,
        input: &SubscriptionCreate,
    ) -> Result<Subscription, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, "/api/v2/subscriptions")
            .json_body(input)?
            .build();
        self.http.request(request).await
    }

    /// Lists subscriptions with pagination.
    ///
    /// `GET /api/v2/subscriptions`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn list_subscriptions(
        &self,
        params: Option<&PaginationParams>,
    ) -> Result<ListResource<Subscription>, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, "/api/v2/subscriptions");
        if let Some(params) = params {
            builder = params.apply(builder);
        }
        self.http.request(builder.build()).await
    }

    /// Fetches a single subscription by ID.
    ///
    /// `GET /api/v2/subscriptions/{subscription_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn get_subscription(&self, subscription_id: &str) -> Result<Subscription, HttpError> {
        let path = format!(
            "/api/v2/subscriptions/{}",
            urlencoding::encode(subscription_id)
        );
        self.http
            .request(HttpRequest::builder(HttpMethod::Get, path).build())
            .await
    }

    /// Updates a subscription.
    ///
    /// `PUT /api/v2/subscriptions/{subscription_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn update_subscription(
        &self,
        subscription_id: &str,
        input: &SubscriptionUpdate,
    ) -> Result<Subscription, HttpError> {
        let path = format!(
            "/api/v2/subscriptions/{}",
            urlencoding::encode(subscription_id)
        );
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .json_body(input)?
            .build();
        self.http.request(request).await
    }

    /// Cancels a subscription, with an optional reason.
    ///
    /// `POST /api/v2/subscriptions/{subscription_id}/cancel`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn cancel_subscription(
        &self,
        subscription_id: &str,
        input: Option<&SubscriptionCancel>,
    ) -> Result<Subscription, HttpError> {
        let path = format!(
            "/api/v2/subscriptions/{}/cancel",
            urlencoding::encode(subscription_id)
        );
        let mut builder = HttpRequest::builder(HttpMethod::Post, path);
        if let Some(input) = input {
            builder = builder.json_body(input)?;
        }
        self.http.request(builder.build()).await
    }

    /// Creates a freeze period, pausing invoice generation.
    ///
    /// `POST /api/v2/subscriptions/{subscription_id}/freeze`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn freeze_subscription(
        &self,
        subscription_id: &str,
        input: &FreezeCreateRequest,
    ) -> Result<SubscriptionFreeze, HttpError> {
        let path = format!(
            "/api/v2/subscriptions/{}/freeze",
            urlencoding::encode(subscription_id)
        );
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .json_body(input)?
            .build();
        self.http.request(request).await
    }

    /// Lists the freeze periods of a subscription.
    ///
    /// `GET /api/v2/subscriptions/{subscription_id}/freeze`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn list_subscription_freezes(
        &self,
        subscription_id: &str,
    ) -> Result<ListResource<SubscriptionFreeze>, HttpError> {
        let path = format!(
            "/api/v2/subscriptions/{}/freeze",
            urlencoding::encode(subscription_id)
        );
        self.http
            .request(HttpRequest::builder(HttpMethod::Get, path).build())
            .await
    }

    /// Updates a freeze period.
    ///
    /// `PUT /api/v2/subscriptions/{subscription_id}/freeze/{freeze_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn update_subscription_freeze(
        &self,
        subscription_id: &str,
        freeze_id: &str,
        input: &FreezeUpdateRequest,
    ) -> Result<SubscriptionFreeze, HttpError> {
        let path = format!(
            "/api/v2/subscriptions/{}/freeze/{}",
            urlencoding::encode(subscription_id),
            urlencoding::encode(freeze_id)
        );
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .json_body(input)?
            .build();
        self.http.request(request).await
    }

    /// Deletes a freeze period, resuming invoice generation.
    ///
    /// `DELETE /api/v2/subscriptions/{subscription_id}/freeze/{freeze_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport or API failure.
    pub async fn delete_subscription_freeze(
        &self,
        subscription_id: &str,
        freeze_id: &str,
    ) -> Result<(), HttpError> {
        let path = format!(
            "/api/v2/subscriptions/{}/freeze/{}",
            urlencoding::encode(subscription_id),
            urlencoding::encode(freeze_id)
        );
        self.http
            .request_empty(HttpRequest::builder(HttpMethod::Delete, path).build())
            .await
    }
}
