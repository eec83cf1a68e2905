//! Dashboard Indicator Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Dish;

/// Dish with its sold quantity in the requested range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DishIndicator {
    #[serde(flatten)]
    pub dish: Dish,
    pub success_orders: i64,
}

/// Revenue of one business day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RevenueByDate {
    /// Date label as returned by the backend (dd/MM/yyyy)
    pub date: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

/// Dashboard indicators for a date range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardIndicator {
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    pub guest_count: i64,
    pub order_count: i64,
    pub serving_table_count: i64,
    #[serde(default)]
    pub dish_indicator: Vec<DishIndicator>,
    #[serde(default)]
    pub revenue_by_date: Vec<RevenueByDate>,
}
