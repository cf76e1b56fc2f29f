use serde::{Deserialize, Serialize};

/// A catalog record. The id is the table name in products.toml.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Product {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Purchase (cost) price per unit
    #[serde(default)]
    pub buysellprice_per_unit: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, buysellprice_per_unit: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            buysellprice_per_unit,
            category: None,
            description: None,
            image: None,
        }
    }
}
