//! Payment link resource operations.
//!
//! A payment link is a shareable, remotely hosted checkout page for one
//! purchasable configuration. The API takes a full canonical payload
//! ([`CreatePaymentLink`]); [`CreateLinkInput`] is the reduced
//! one-product/one-consumer shape most callers want, translated to the
//! canonical payload by [`CreateLinkInput::to_canonical`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::client::StreamClient;
use crate::clients::{HttpError, HttpMethod, HttpRequest, InvalidRequestError};
use crate::resources::common::{ListResource, PaginationParams};
use crate::resources::consumers::ConsumerCreate;
use crate::resources::products::ProductCreate;

/// How customer contact information is collected on the checkout page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactInformationType {
    /// Collect a phone number.
    Phone,
    /// Collect an email address.
    Email,
}

/// One purchasable line item on a payment link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentLinkItem {
    /// The product being sold.
    pub product_id: String,
    /// Number of units, at least 1.
    pub quantity: u32,
}

/// The canonical payment-link creation payload.
///
/// Matches the remote schema exactly: optional fields are serialized as
/// explicit `null` rather than omitted, and `coupons` is always a sequence,
/// never null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatePaymentLink {
    /// Link name shown on the checkout page.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// The purchasable items; the convenience translator always produces one.
    pub items: Vec<PaymentLinkItem>,
    /// Coupon IDs applicable at checkout.
    pub coupons: Vec<String>,
    /// How many times the link may be paid before it closes.
    pub max_number_of_payments: Option<u32>,
    /// Expiry timestamp in RFC 3339 text form.
    pub valid_until: Option<String>,
    /// Where to send the customer after a successful payment.
    pub success_redirect_url: Option<String>,
    /// Where to send the customer after a failed payment.
    pub failure_redirect_url: Option<String>,
    /// Fixes the payer; customer info is not collected when set.
    pub organization_consumer_id: Option<String>,
    /// Arbitrary metadata echoed back on the link.
    pub custom_metadata: Option<serde_json::Value>,
    /// Contact field collected at checkout when no consumer is fixed.
    pub contact_information_type: Option<ContactInformationType>,
}

/// An expiry timestamp that is either structured or already text.
///
/// Structured values are serialized to RFC 3339; text passes through
/// unvalidated, so a malformed string surfaces only as a remote rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidUntil {
    /// A structured UTC timestamp.
    Timestamp(DateTime<Utc>),
    /// An already-formatted date-time string, passed through unmodified.
    Text(String),
}

impl ValidUntil {
    fn to_wire(&self) -> String {
        match self {
            Self::Timestamp(value) => value.to_rfc3339_opts(SecondsFormat::Millis, true),
            Self::Text(value) => value.clone(),
        }
    }
}

impl From<DateTime<Utc>> for ValidUntil {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<&str> for ValidUntil {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ValidUntil {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Reduced input for creating a payment link with a single product and an
/// optional fixed consumer.
///
/// # Example
///
/// ```rust
/// use streampay_sdk::resources::CreateLinkInput;
///
/// let input = CreateLinkInput {
///     name: "Order".to_string(),
///     product_id: "prod_1".to_string(),
///     ..CreateLinkInput::default()
/// };
///
/// let payload = input.to_canonical().unwrap();
/// assert_eq!(payload.items[0].quantity, 1);
/// assert!(payload.coupons.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateLinkInput {
    /// Link name shown on the checkout page.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Fixes the payer; customer info is not collected when set.
    pub consumer_id: Option<String>,
    /// The single product being sold.
    pub product_id: String,
    /// Units of the product; defaults to 1 when absent.
    pub quantity: Option<u32>,
    /// Expiry timestamp.
    pub valid_until: Option<ValidUntil>,
    /// How many times the link may be paid before it closes.
    pub max_number_of_payments: Option<u32>,
    /// Where to send the customer after a successful payment.
    pub success_redirect_url: Option<String>,
    /// Where to send the customer after a failed payment.
    pub failure_redirect_url: Option<String>,
    /// Coupon IDs applicable at checkout.
    pub coupons: Option<Vec<String>>,
    /// Arbitrary metadata echoed back on the link.
    pub custom_metadata: Option<serde_json::Value>,
    /// Contact field collected at checkout when no consumer is fixed.
    pub contact_information_type: Option<ContactInformationType>,
}

impl CreateLinkInput {
    /// Translates this input into the canonical creation payload.
    ///
    /// Absent optional fields become explicit nulls on the wire, `coupons`
    /// becomes an empty sequence, and an absent quantity defaults to 1.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::ZeroQuantity`] for an explicit
    /// quantity of 0; the remote schema requires at least one unit and a
    /// silent default would mask the caller's bug.
    pub fn to_canonical(&self) -> Result<CreatePaymentLink, InvalidRequestError> {
        let quantity = match self.quantity {
            None => 1,
            Some(0) => return Err(InvalidRequestError::ZeroQuantity),
            Some(quantity) => quantity,
        };

        Ok(CreatePaymentLink {
            name: self.name.clone(),
            description: self.description.clone(),
            items: vec![PaymentLinkItem {
                product_id: self.product_id.clone(),
                quantity,
            }],
            coupons: self.coupons.clone().unwrap_or_default(),
            max_number_of_payments: self.max_number_of_payments,
            valid_until: self.valid_until.as_ref().map(ValidUntil::to_wire),
            success_redirect_url: self.success_redirect_url.clone(),
            failure_redirect_url: self.failure_redirect_url.clone(),
            organization_consumer_id: self.consumer_id.clone(),
            custom_metadata: self.custom_metadata.clone(),
            contact_information_type: self.contact_information_type,
        })
    }
}

/// Field names older API revisions used for the checkout URL, consulted in
/// this order when the current `payment_url` field is absent.
const PAY_URL_FALLBACKS: [&str; 4] = ["url", "link", "redirect_url", "checkout_url"];

/// A payment link as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentLink {
    /// The payment link identifier.
    pub id: String,
    /// Link name.
    #[serde(default)]
    pub name: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// The hosted checkout page URL.
    #[serde(default)]
    pub payment_url: Option<String>,
    /// The purchasable items.
    #[serde(default)]
    pub items: Option<Vec<PaymentLinkItem>>,
    /// Coupon IDs applicable at checkout.
    #[serde(default)]
    pub coupons: Option<Vec<String>>,
    /// The fixed payer, if any.
    #[serde(default)]
    pub organization_consumer_id: Option<String>,
    /// Expiry timestamp in RFC 3339 text form.
    #[serde(default)]
    pub valid_until: Option<String>,
    /// How many times the link may be paid before it closes.
    #[serde(default)]
    pub max_number_of_payments: Option<u32>,
    /// Success redirect URL.
    #[serde(default)]
    pub success_redirect_url: Option<String>,
    /// Failure redirect URL.
    #[serde(default)]
    pub failure_redirect_url: Option<String>,
    /// Contact field collected at checkout.
    #[serde(default)]
    pub contact_information_type: Option<ContactInformationType>,
    /// Metadata echoed back from creation.
    #[serde(default)]
    pub custom_metadata: Option<serde_json::Value>,
    /// When the link was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Response fields the SDK does not model, preserved for the pay-URL
    /// fallback and for forward compatibility.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PaymentLink {
    /// Returns the hosted checkout URL for this link.
    ///
    /// The current schema reports it as `payment_url`; older revisions used
    /// other names, so when that field is absent the unmodeled response
    /// fields are consulted in the fixed order `url`, `link`,
    /// `redirect_url`, `checkout_url`.
    #[must_use]
    pub fn pay_url(&self) -> Option<&str> {
        if let Some(url) = self.payment_url.as_deref() {
            return Some(url);
        }
        PAY_URL_FALLBACKS
            .iter()
            .find_map(|key| self.extra.get(*key).and_then(serde_json::Value::as_str))
    }
}

/// Input for the one-call checkout helper.
///
/// Describes the sale in caller terms; the helper creates the missing
/// records. With `product_id` set the existing product is sold and
/// `amount`/`currency` are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimplePaymentLinkRequest {
    /// Link and (when created) product name.
    pub name: String,
    /// Optional description for the link and created product.
    pub description: Option<String>,
    /// Unit price used when a product has to be created.
    pub amount: f64,
    /// Currency used when a product has to be created.
    pub currency: String,
    /// Consumer to create and fix as the payer; omit for guest checkout.
    pub consumer: Option<ConsumerCreate>,
    /// Sell an existing product instead of creating one.
    pub product_id: Option<String>,
    /// Where to send the customer after a successful payment.
    pub success_redirect_url: Option<String>,
    /// Where to send the customer after a failed payment.
    pub failure_redirect_url: Option<String>,
}

/// Result of the one-call checkout helper.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplePaymentLink {
    /// The hosted checkout URL, when the API reported one.
    pub payment_url: Option<String>,
    /// The consumer created for this sale, if any.
    pub consumer_id: Option<String>,
    /// The product sold (created or pre-existing).
    pub product_id: String,
    /// The full payment link.
    pub link: PaymentLink,
}

impl StreamClient {
    /// Creates a payment link from the reduced single-product input.
    ///
    /// `POST /api/v2/payment_links`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for a zero quantity, otherwise
    /// [`HttpError`] on transport, API, or decode failure.
    pub async fn create_link(&self, input: &CreateLinkInput) -> Result<PaymentLink, HttpError> {
        let payload = input.to_canonical()?;
        self.create_payment_link(&payload).await
    }

    /// Creates a payment link from the full canonical payload.
    ///
    /// `POST /api/v2/payment_links`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn create_payment_link(
        &self,
        input: &CreatePaymentLink,
    ) -> Result<PaymentLink, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, "/api/v2/payment_links")
            .json_body(input)?
            .build();
        self.http.request(request).await
    }

    /// Lists payment links with pagination.
    ///
    /// `GET /api/v2/payment_links`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn list_payment_links(
        &self,
        params: Option<&PaginationParams>,
    ) -> Result<ListResource<PaymentLink>, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, "/api/v2/payment_links");
        if let Some(params) = params {
            builder = params.apply(builder);
        }
        self.http.request(builder.build()).await
    }

    /// Fetches a single payment link by ID.
    ///
    /// `GET /api/v2/payment_links/{payment_link_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport, API, or decode failure.
    pub async fn get_payment_link(&self, payment_link_id: &str) -> Result<PaymentLink, HttpError> {
        let path = format!(
            "/api/v2/payment_links/{}",
            urlencoding::encode(payment_link_id)
        );
        self.http
            .request(HttpRequest::builder(HttpMethod::Get, path).build())
            .await
    }

    /// Creates everything needed for a one-off checkout in a single call.
    ///
    /// Resolves the product (creating one from `name`/`amount`/`currency`
    /// when no `product_id` is given), creates the consumer when one is
    /// supplied, then creates the payment link fixed to them.
    ///
    /// The three underlying calls are not transactional: a failure partway
    /// through leaves already-created records in place, and the error says
    /// which call failed.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] from the first underlying call that fails.
    pub async fn create_simple_payment_link(
        &self,
        input: &SimplePaymentLinkRequest,
    ) -> Result<SimplePaymentLink, HttpError> {
        let product_id = match &input.product_id {
            Some(id) => id.clone(),
            None => {
                let product = self
                    .create_product(&ProductCreate {
                        name: input.name.clone(),
                        price: input.amount,
                        currency: input.currency.clone(),
                        description: input.description.clone(),
                    })
                    .await?;
                product.id
            }
        };

        let consumer_id = match &input.consumer {
            Some(consumer) => Some(self.create_consumer(consumer).await?.id),
            None => None,
        };

        let link = self
            .create_link(&CreateLinkInput {
                name: input.name.clone(),
                description: input.description.clone(),
                consumer_id: consumer_id.clone(),
                product_id: product_id.clone(),
                success_redirect_url: input.success_redirect_url.clone(),
                failure_redirect_url: input.failure_redirect_url.clone(),
                ..CreateLinkInput::default()
            })
            .await?;

        Ok(SimplePaymentLink {
            payment_url: link.pay_url().map(str::to_owned),
            consumer_id,
            product_id,
            link,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_canonical_defaults_quantity_and_coupons() {
        let input = CreateLinkInput {
            name: "Order".to_string(),
            product_id: "prod_1".to_string(),
            ..CreateLinkInput::default()
        };

        let payload = input.to_canonical().unwrap();
        assert_eq!(
            payload.items,
            vec![PaymentLinkItem {
                product_id: "prod_1".to_string(),
                quantity: 1,
            }]
        );
        assert_eq!(payload.coupons, Vec::<String>::new());
        assert!(payload.organization_consumer_id.is_none());
    }

    #[test]
    fn test_to_canonical_rejects_zero_quantity() {
        let input = CreateLinkInput {
            name: "Order".to_string(),
            product_id: "prod_1".to_string(),
            quantity: Some(0),
            ..CreateLinkInput::default()
        };

        assert!(matches!(
            input.to_canonical(),
            Err(InvalidRequestError::ZeroQuantity)
        ));
    }

    #[test]
    fn test_canonical_payload_serializes_absent_fields_as_explicit_null() {
        let input = CreateLinkInput {
            name: "Order".to_string(),
            product_id: "prod_1".to_string(),
            ..CreateLinkInput::default()
        };

        let value = serde_json::to_value(input.to_canonical().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Order",
                "description": null,
                "items": [{"product_id": "prod_1", "quantity": 1}],
                "coupons": [],
                "max_number_of_payments": null,
                "valid_until": null,
                "success_redirect_url": null,
                "failure_redirect_url": null,
                "organization_consumer_id": null,
                "custom_metadata": null,
                "contact_information_type": null,
            })
        );
    }

    #[test]
    fn test_valid_until_timestamp_serializes_to_rfc3339() {
        let timestamp: DateTime<Utc> = "2026-03-01T12:30:00Z".parse().unwrap();
        let input = CreateLinkInput {
            name: "Order".to_string(),
            product_id: "prod_1".to_string(),
            valid_until: Some(timestamp.into()),
            ..CreateLinkInput::default()
        };

        let payload = input.to_canonical().unwrap();
        assert_eq!(
            payload.valid_until.as_deref(),
            Some("2026-03-01T12:30:00.000Z")
        );
    }

    #[test]
    fn test_valid_until_text_passes_through_unvalidated() {
        let input = CreateLinkInput {
            name: "Order".to_string(),
            product_id: "prod_1".to_string(),
            valid_until: Some("next tuesday".into()),
            ..CreateLinkInput::default()
        };

        let payload = input.to_canonical().unwrap();
        assert_eq!(payload.valid_until.as_deref(), Some("next tuesday"));
    }

    #[test]
    fn test_contact_information_type_wire_form() {
        assert_eq!(
            serde_json::to_value(ContactInformationType::Phone).unwrap(),
            json!("PHONE")
        );
        assert_eq!(
            serde_json::to_value(ContactInformationType::Email).unwrap(),
            json!("EMAIL")
        );
    }

    #[test]
    fn test_pay_url_prefers_typed_field() {
        let link: PaymentLink = serde_json::from_value(json!({
            "id": "pl_1",
            "payment_url": "https://pay.example/a",
            "url": "https://pay.example/legacy",
        }))
        .unwrap();
        assert_eq!(link.pay_url(), Some("https://pay.example/a"));
    }

    #[test]
    fn test_pay_url_falls_back_in_documented_order() {
        let link: PaymentLink = serde_json::from_value(json!({
            "id": "pl_1",
            "checkout_url": "https://pay.example/checkout",
            "link": "https://pay.example/link",
        }))
        .unwrap();
        // `link` precedes `checkout_url` in the fallback order.
        assert_eq!(link.pay_url(), Some("https://pay.example/link"));
    }

    #[test]
    fn test_pay_url_none_when_no_candidate_field() {
        let link: PaymentLink = serde_json::from_value(json!({"id": "pl_1"})).unwrap();
        assert_eq!(link.pay_url(), None);
    }
}
