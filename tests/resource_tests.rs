//! Integration tests for the consumer, product, coupon, invoice, and
//! payment resources.
//!
//! Each test mounts a mock endpoint and verifies the method, path, query,
//! and body the client puts on the wire, plus the decoding of the response.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use streampay_sdk::resources::{
    ConsumerCreate, ConsumerUpdate, CouponCreate, PaginationParams, PaymentListParams,
    PaymentRefundRequest, ProductCreate, ProductUpdate,
};
use streampay_sdk::{HttpError, StreamClient, StreamConfig};

/// Builds a client pointed at the given mock server.
fn client_for(server: &MockServer) -> StreamClient {
    let config = StreamConfig::builder()
        .api_key("sk_test_123")
        .base_url(server.uri())
        .build()
        .unwrap();
    StreamClient::new(config)
}

// ============================================================================
// Consumers
// ============================================================================

#[tokio::test]
async fn test_create_consumer_posts_body_and_decodes_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/consumers"))
        .and(body_json(json!({"email": "dana@example.com", "name": "Dana"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cons_1",
            "email": "dana@example.com",
            "name": "Dana",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let consumer = client
        .create_consumer(&ConsumerCreate {
            email: "dana@example.com".to_string(),
            name: Some("Dana".to_string()),
            phone: None,
        })
        .await
        .unwrap();

    assert_eq!(consumer.id, "cons_1");
    assert_eq!(consumer.name.as_deref(), Some("Dana"));
}

#[tokio::test]
async fn test_list_consumers_sends_pagination_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/consumers"))
        .and(query_param("page", "2"))
        .and(query_param("size", "50"))
        .and(query_param("sort", "created_at"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "cons_1"}, {"id": "cons_2"}],
            "pagination": {"page": 2, "size": 50, "total": 120},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let list = client
        .list_consumers(Some(&PaginationParams {
            page: Some(2),
            size: Some(50),
            sort: Some("created_at".to_string()),
        }))
        .await
        .unwrap();

    assert_eq!(list.items.len(), 2);
    assert_eq!(list.pagination.total, Some(120));
}

#[tokio::test]
async fn test_get_consumer_percent_encodes_identifier() {
    let server = MockServer::start().await;

    // A reserved character in the ID must not split the path.
    Mock::given(method("GET"))
        .and(path("/api/v2/consumers/cons%2F1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "cons/1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let consumer = client.get_consumer("cons/1").await.unwrap();

    assert_eq!(consumer.id, "cons/1");
}

#[tokio::test]
async fn test_update_consumer_puts_only_present_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v2/consumers/cons_1"))
        .and(body_json(json!({"name": "New Name"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "cons_1", "name": "New Name"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let consumer = client
        .update_consumer(
            "cons_1",
            &ConsumerUpdate {
                name: Some("New Name".to_string()),
                ..ConsumerUpdate::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(consumer.name.as_deref(), Some("New Name"));
}

#[tokio::test]
async fn test_delete_consumer_accepts_empty_200() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/consumers/cons_1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.delete_consumer("cons_1").await.is_ok());
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_create_product_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/products"))
        .and(body_json(json!({
            "name": "Premium Plan",
            "price": 99.0,
            "currency": "SAR",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "prod_1",
            "name": "Premium Plan",
            "price": 99.0,
            "currency": "SAR",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let product = client
        .create_product(&ProductCreate {
            name: "Premium Plan".to_string(),
            price: 99.0,
            currency: "SAR".to_string(),
            description: None,
        })
        .await
        .unwrap();

    assert_eq!(product.id, "prod_1");
    assert_eq!(product.price, Some(99.0));
}

#[tokio::test]
async fn test_update_product_hits_put_with_id() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v2/products/prod_1"))
        .and(body_json(json!({"price": 120.0})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "prod_1", "price": 120.0})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let product = client
        .update_product(
            "prod_1",
            &ProductUpdate {
                price: Some(120.0),
                ..ProductUpdate::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(product.price, Some(120.0));
}

#[tokio::test]
async fn test_list_products_without_params_has_no_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let list = client.list_products(None).await.unwrap();

    assert!(list.items.is_empty());
    let received = server.received_requests().await.unwrap();
    assert!(received[0].url.query().is_none());
}

// ============================================================================
// Coupons
// ============================================================================

#[tokio::test]
async fn test_create_coupon_with_percentage_discount() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/coupons"))
        .and(body_json(json!({"name": "LAUNCH10", "discount_percentage": 10.0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "coup_1",
            "name": "LAUNCH10",
            "discount_percentage": 10.0,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let coupon = client
        .create_coupon(&CouponCreate {
            name: "LAUNCH10".to_string(),
            discount_percentage: Some(10.0),
            discount_amount: None,
            currency: None,
            valid_until: None,
        })
        .await
        .unwrap();

    assert_eq!(coupon.id, "coup_1");
    assert_eq!(coupon.discount_percentage, Some(10.0));
}

#[tokio::test]
async fn test_delete_coupon_surfaces_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/coupons/coup_1"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"message": "coupon is in use"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.delete_coupon("coup_1").await.unwrap_err();

    match error {
        HttpError::Api(error) => {
            assert_eq!(error.status, 409);
            assert_eq!(error.message, "coupon is in use");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

// ============================================================================
// Invoices
// ============================================================================

#[tokio::test]
async fn test_list_invoices_decodes_list_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/invoices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": "inv_1", "amount": 99.0, "currency": "SAR", "status": "PAID"},
                {"id": "inv_2", "amount": 99.0, "currency": "SAR", "status": "PENDING"},
            ],
            "pagination": {"page": 1, "size": 25, "total": 2},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let list = client.list_invoices(None).await.unwrap();

    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[0].status.as_deref(), Some("PAID"));
}

#[tokio::test]
async fn test_get_invoice_decodes_detail_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/invoices/inv_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "inv_1",
            "subscription_id": "sub_1",
            "organization_consumer_id": "cons_1",
            "amount": 99.0,
            "currency": "SAR",
            "status": "PAID",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let invoice = client.get_invoice("inv_1").await.unwrap();

    assert_eq!(invoice.subscription_id.as_deref(), Some("sub_1"));
    assert_eq!(invoice.organization_consumer_id.as_deref(), Some("cons_1"));
}

// ============================================================================
// Payments
// ============================================================================

#[tokio::test]
async fn test_list_payments_filters_by_invoice() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/payments"))
        .and(query_param("invoice_id", "inv_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "pay_1", "invoice_id": "inv_1", "status": "CAPTURED"}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let list = client
        .list_payments(Some(&PaymentListParams {
            invoice_id: Some("inv_1".to_string()),
        }))
        .await
        .unwrap();

    assert_eq!(list.items[0].invoice_id.as_deref(), Some("inv_1"));
}

#[tokio::test]
async fn test_refund_payment_posts_to_refund_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/payments/pay_1/refund"))
        .and(body_json(json!({"amount": 25.0, "reason": "damaged item"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pay_1",
            "status": "REFUNDED",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payment = client
        .refund_payment(
            "pay_1",
            &PaymentRefundRequest {
                amount: Some(25.0),
                reason: Some("damaged item".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(payment.status.as_deref(), Some("REFUNDED"));
}

#[tokio::test]
async fn test_full_refund_sends_empty_object_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/payments/pay_1/refund"))
        .and(body_json(json!({})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "pay_1", "status": "REFUNDED"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payment = client
        .refund_payment("pay_1", &PaymentRefundRequest::default())
        .await
        .unwrap();

    assert_eq!(payment.id, "pay_1");
}
