// Dashboard metrics records

use serde::{Deserialize, Serialize};

use crate::model::Order;

/// Revenue and order volume for one calendar month.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySales {
    /// Month in `YYYY-MM` form.
    pub month: String,
    pub revenue: f64,
    pub orders: u64,
}

/// The aggregate numbers shown on the dashboard screen.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_revenue: f64,
    pub order_count: u64,
    pub product_count: u64,
    pub user_count: u64,
    pub subscriber_count: u64,
    pub pending_inquiries: u64,
    #[serde(default)]
    pub sales_by_month: Vec<MonthlySales>,
    #[serde(default)]
    pub recent_orders: Vec<Order>,
}
