//! Menu Model

use serde::{Deserialize, Serialize};

use super::Id;

/// Menu entity
///
/// At most one menu is active at a time; the backend deactivates the others
/// when one is activated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
    #[serde(default)]
    pub dish_ids: Vec<Id>,
}

/// Create menu payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCreate {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub dish_ids: Vec<Id>,
}

/// Update menu payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dish_ids: Option<Vec<Id>>,
}
