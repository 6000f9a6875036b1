//! Resource operations and wire types for the StreamPay API.
//!
//! Each submodule holds the serde model types for one resource family and
//! the corresponding [`StreamClient`](crate::client::StreamClient) methods.
//! Every method is a fixed mapping of {verb, path template, query, body}
//! onto the HTTP core; identifier path segments are percent-encoded before
//! interpolation.
//!
//! The wire types mirror the remote schema, which is an external, versioned
//! contract; fields the SDK does not model are ignored on decode (and, for
//! payment links, preserved; see
//! [`PaymentLink::extra`](payment_links::PaymentLink)).

mod common;
pub mod consumers;
pub mod coupons;
pub mod invoices;
pub mod payment_links;
pub mod payments;
pub mod products;
pub mod subscriptions;

pub use common::{ListResource, Pagination, PaginationParams};
pub use consumers::{Consumer, ConsumerCreate, ConsumerUpdate};
pub use coupons::{Coupon, CouponCreate, CouponUpdate};
pub use invoices::{Invoice, InvoiceListItem};
pub use payment_links::{
    ContactInformationType, CreateLinkInput, CreatePaymentLink, PaymentLink, PaymentLinkItem,
    SimplePaymentLink, SimplePaymentLinkRequest, ValidUntil,
};
pub use payments::{Payment, PaymentListParams, PaymentRefundRequest};
pub use products::{Product, ProductCreate, ProductUpdate};
pub use subscriptions::{
    FreezeCreateRequest, FreezeUpdateRequest, Subscription, SubscriptionCancel,
    SubscriptionCreate, SubscriptionFreeze, SubscriptionUpdate,
};
