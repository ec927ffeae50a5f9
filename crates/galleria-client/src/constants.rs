// Admin API path constants, joined to the configured base URL

pub mod api_path {
    // Collections
    pub const CATEGORIES: &str = "/categories";
    pub const AUTHORS: &str = "/authors";
    pub const PRODUCTS: &str = "/products";
    pub const ORDERS: &str = "/orders";
    pub const COUPONS: &str = "/coupons";
    pub const USERS: &str = "/users";
    pub const SUBSCRIBERS: &str = "/subscribers";
    pub const INQUIRIES: &str = "/inquiries";

    // Auth
    pub const AUTH_LOGIN: &str = "/auth/login";

    // Dashboard
    pub const DASHBOARD_METRICS: &str = "/dashboard/metrics";
}
