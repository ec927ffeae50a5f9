// One thin binding per admin screen over the shared machinery

use galleria_api::{
    Author, AuthorPayload, Category, CategoryPayload, Coupon, CouponPayload, InquiryUpdate, Order,
    OrderUpdate, PriceInquiry, Product, ProductPayload, Subscriber, SubscriberPayload, User,
    UserPayload,
};
use galleria_client::AdminApi;

use crate::controller::ListController;

pub type CategoryList = ListController<Category, CategoryPayload>;
pub type AuthorList = ListController<Author, AuthorPayload>;
pub type ProductList = ListController<Product, ProductPayload>;
pub type OrderList = ListController<Order, OrderUpdate>;
pub type CouponList = ListController<Coupon, CouponPayload>;
pub type UserList = ListController<User, UserPayload>;
pub type SubscriberList = ListController<Subscriber, SubscriberPayload>;
pub type InquiryList = ListController<PriceInquiry, InquiryUpdate>;

pub fn category_list(api: &AdminApi) -> CategoryList {
    ListController::new(api.categories())
}

pub fn author_list(api: &AdminApi) -> AuthorList {
    ListController::new(api.authors())
}

pub fn product_list(api: &AdminApi) -> ProductList {
    ListController::new(api.products())
}

pub fn order_list(api: &AdminApi) -> OrderList {
    ListController::new(api.orders())
}

pub fn coupon_list(api: &AdminApi) -> CouponList {
    ListController::new(api.coupons())
}

pub fn user_list(api: &AdminApi) -> UserList {
    ListController::new(api.users())
}

pub fn subscriber_list(api: &AdminApi) -> SubscriberList {
    ListController::new(api.subscribers())
}

pub fn inquiry_list(api: &AdminApi) -> InquiryList {
    ListController::new(api.inquiries())
}
