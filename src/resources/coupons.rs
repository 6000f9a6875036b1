//! Coupon resource operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::StreamClient;
use crate::clients::{HttpError, HttpMethod, HttpRequest};
use crate::resources::common::{ListResource, PaginationParams};

/// Input for creating a coupon.
///
/// Exactly one of `discount_percentage` or `discount_amount` should be set;
/// the server enforces this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CouponCreate {
    /// Coupon name shown to customers.
    pub name: String,
    /// Percentage discount, 0-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    /// Fixed discount amount in the coupon currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    /// ISO 4217 currency code, required with `discount_amount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// When the coupon stops being redeemable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
}

/// Input for updating a coupon. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CouponUpdate {
    /// New coupon name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New percentage discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    /// New fixed discount amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    /// New expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
}

/// A coupon as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    /// The coupon identifier.
    pub id: String,
    /// Coupon name.
    #[serde(default)]
    pub name: Option<String>,
    /// Percentage discount, when percentage-based.
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    /// Fixed discount amount, when amount-based.
    #[serde(default)]
    pub discount_amount: Option<f64>,
    /// ISO 4217 currency code for amount-based coupons.
    #[serde(default)]
    pub currency: Option<String>,
    /// When the coupon stops being redeemable.
    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,
    /// When the coupon was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl StreamClient {
    /// Creates a new coupon.
    ///
    /// `POST /api/v2/coupons`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn create_coupon(&self, input: &CouponCreate) -> Result<Coupon, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, "/api/v2/coupons")
            .json_body(input)?
            .build();
        self.http.request(request).await
    }

    /// Lists coupons with pagination.
    ///
    /// `GET /api/v2/coupons`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn list_coupons(
        &self,
        params: Option<&PaginationParams>,
    ) -> Result<ListResource<Coupon>, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, "/api/v2/coupons");
        if let Some(params) = params {
            builder = params.apply(builder);
        }
        self.http.request(builder.build()).await
    }

    /// Fetches a single coupon by ID.
    ///
    /// `GET /api/v2/coupons/{coupon_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn get_coupon(&self, coupon_id: &str) -> Result<Coupon, HttpError> {
        let path = format!("/api/v2/coupons/{}", urlencoding::encode(coupon_id));
        self.http
            .request(HttpRequest::builder(HttpMethod::Get, path).build())
            .await
    }

    /// Updates a coupon.
    ///
    /// `PUT /api/v2/coupons/{coupon_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn update_coupon(
        &self,
        coupon_id: &str,
        input: &CouponUpdate,
    ) -> Result<Coupon, HttpError> {
        let path = format!("/api/v2/coupons/{}", urlencoding::encode(coupon_id));
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .json_body(input)?
            .build();
        self.http.request(request).await
    }

    /// Deletes a coupon.
    ///
    /// `DELETE /api/v2/coupons/{coupon_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport or API failure.
    pub async fn delete_coupon(&self, coupon_id: &str) -> Result<(), HttpError> {
        let path = format!("/api/v2/coupons/{}", urlencoding::encode(coupon_id));
        self.http
            .request_empty(HttpRequest::builder(HttpMethod::Delete, path).build())
            .await
    }
}
