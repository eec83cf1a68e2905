//! Ingredient Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Id;

/// Ingredient entity (stock tracked by the backend)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: Id,
    pub name: String,
    /// Unit of measure, e.g. "kg", "pcs"
    pub unit: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub stock: Decimal,
}

/// Create ingredient payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCreate {
    pub name: String,
    pub unit: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub stock: Decimal,
}

/// Update ingredient payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub stock: Option<Decimal>,
}
