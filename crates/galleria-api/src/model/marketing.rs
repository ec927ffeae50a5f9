// Marketing records: coupons, newsletter subscribers, price inquiries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a coupon discounts an order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    #[default]
    Percent,
    Fixed,
}

/// A discount coupon.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    #[serde(alias = "_id")]
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub discount_type: DiscountType,
    pub amount: f64,
    #[serde(default)]
    pub min_order_total: Option<f64>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub usage_count: u64,
    #[serde(default)]
    pub usage_limit: Option<u64>,
}

/// Coupon create/update body.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponPayload {
    pub code: String,
    #[serde(default)]
    pub discount_type: DiscountType,
    pub amount: f64,
    #[serde(default)]
    pub min_order_total: Option<f64>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub usage_limit: Option<u64>,
}

impl From<&Coupon> for CouponPayload {
    fn from(coupon: &Coupon) -> Self {
        Self {
            code: coupon.code.clone(),
            discount_type: coupon.discount_type,
            amount: coupon.amount,
            min_order_total: coupon.min_order_total,
            expires_at: coupon.expires_at,
            active: coupon.active,
            usage_limit: coupon.usage_limit,
        }
    }
}

/// A newsletter subscriber.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub subscribed_at: Option<DateTime<Utc>>,
}

/// Subscriber create body (admins can add addresses by hand).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberPayload {
    pub email: String,
}

/// Handling state of a price inquiry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    New,
    Answered,
    Closed,
}

/// A price inquiry a visitor left on a product page.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceInquiry {
    #[serde(alias = "_id")]
    pub id: String,
    pub product_id: String,
    #[serde(default)]
    pub product_title: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: InquiryStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Admin-side inquiry mutation: only the handling state may change.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryUpdate {
    pub status: InquiryStatus,
}
