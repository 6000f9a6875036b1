//! Consumer resource operations.
//!
//! A consumer is a customer record in StreamPay, optionally linked to a
//! payment link or subscription.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::StreamClient;
use crate::clients::{HttpError, HttpMethod, HttpRequest};
use crate::resources::common::{ListResource, PaginationParams};

/// Input for creating a consumer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsumerCreate {
    /// Contact email address.
    pub email: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Input for updating a consumer. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsumerUpdate {
    /// New contact email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A consumer record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Consumer {
    /// The organization-scoped consumer identifier.
    pub id: String,
    /// Contact email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// When the consumer was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl StreamClient {
    /// Creates a new consumer.
    ///
    /// `POST /api/v2/consumers`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn create_consumer(&self, input: &ConsumerCreate) -> Result<Consumer, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, "/api/v2/consumers")
            .json_body(input)?
            .build();
        self.http.request(request).await
    }

    /// Lists consumers with pagination.
    ///
    /// `GET /api/v2/consumers`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn list_consumers(
        &self,
        params: Option<&PaginationParams>,
    ) -> Result<ListResource<Consumer>, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, "/api/v2/consumers");
        if let Some(params) = params {
            builder = params.apply(builder);
        }
        self.http.request(builder.build()).await
    }

    /// Fetches a single consumer by ID.
    ///
    /// `GET /api/v2/consumers/{consumer_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn get_consumer(&self, consumer_id: &str) -> Result<Consumer, HttpError> {
        let path = format!("/api/v2/consumers/{}", urlencoding::encode(consumer_id));
        self.http
            .request(HttpRequest::builder(HttpMethod::Get, path).build())
            .await
    }

    /// Updates a consumer.
    ///
    /// `PUT /api/v2/consumers/{consumer_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn update_consumer(
        &self,
        consumer_id: &str,
        input: &ConsumerUpdate,
    ) -> Result<Consumer, HttpError> {
        let path = format!("/api/v2/consumers/{}", urlencoding::encode(consumer_id));
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .json_body(input)?
            .build();
        self.http.request(request).await
    }

    /// Deletes a consumer.
    ///
    /// `DELETE /api/v2/consumers/{consumer_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport or API failure.
    pub async fn delete_consumer(&self, consumer_id: &str) -> Result<(), HttpError> {
        let path = format!("/api/v2/consumers/{}", urlencoding::encode(consumer_id));
        self.http
            .request_empty(HttpRequest::builder(HttpMethod::Delete, path).build())
            .await
    }
}
