//! Product resource operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::StreamClient;
use crate::clients::{HttpError, HttpMethod, HttpRequest};
use crate::resources::common::{ListResource, PaginationParams};

/// Input for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductCreate {
    /// Product name shown on checkout pages.
    pub name: String,
    /// Unit price in the given currency.
    pub price: f64,
    /// ISO 4217 currency code (e.g. `SAR`).
    pub currency: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Input for updating a product. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductUpdate {
    /// New product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// New currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A product as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// The product identifier.
    pub id: String,
    /// Product name.
    #[serde(default)]
    pub name: Option<String>,
    /// Unit price.
    #[serde(default)]
    pub price: Option<f64>,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// When the product was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl StreamClient {
    /// Creates a new product.
    ///
    /// `POST /api/v2/products`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn create_product(&self, input: &ProductCreate) -> Result<Product, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, "/api/v2/products")
            .json_body(input)?
            .build();
        self.http.request(request).await
    }

    /// Lists products with pagination.
    ///
    /// `GET /api/v2/products`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn list_products(
        &self,
        params: Option<&PaginationParams>,
    ) -> Result<ListResource<Product>, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, "/api/v2/products");
        if let Some(params) = params {
            builder = params.apply(builder);
        }
        self.http.request(builder.build()).await
    }

    /// Fetches a single product by ID.
    ///
    /// `GET /api/v2/products/{product_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn get_product(&self, product_id: &str) -> Result<Product, HttpError> {
        let path = format!("/api/v2/products/{}", urlencoding::encode(product_id));
        self.http
            .request(HttpRequest::builder(HttpMethod::Get, path).build())
            .await
    }

    /// Updates a product.
    ///
    /// `PUT /api/v2/products/{product_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn update_product(
        &self,
        product_id: &str,
        input: &ProductUpdate,
    ) -> Result<Product, HttpError> {
        let path = format!("/api/v2/products/{}", urlencoding::encode(product_id));
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .json_body(input)?
            .build();
        self.http.request(request).await
    }

    /// Deletes a product.
    ///
    /// `DELETE /api/v2/products/{product_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport or API failure.
    pub async fn delete_product(&self, product_id: &str) -> Result<(), HttpError> {
        let path = format!("/api/v2/products/{}", urlencoding::encode(product_id));
        self.http
            .request_empty(HttpRequest::builder(HttpMethod::Delete, path).build())
            .await
    }
}
