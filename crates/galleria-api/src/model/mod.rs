// Entity records exposed by the admin collection endpoints

pub mod catalog;
pub mod marketing;
pub mod metrics;
pub mod orders;
pub mod users;

pub use catalog::{
    Author, AuthorPayload, Category, CategoryPayload, Product, ProductPayload, ProductStatus,
};
pub use marketing::{
    Coupon, CouponPayload, DiscountType, InquiryStatus, InquiryUpdate, PriceInquiry, Subscriber,
    SubscriberPayload,
};
pub use metrics::{DashboardMetrics, MonthlySales};
pub use orders::{CustomerInfo, Order, OrderItem, OrderStatus, OrderUpdate};
pub use users::{Credentials, Role, User, UserPayload};
