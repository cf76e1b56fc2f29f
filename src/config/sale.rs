use serde::{Deserialize, Serialize};

/// sales.toml holds one `[[sale]]` table per completed sale line
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct SalesFile {
    #[serde(default, rename = "sale")]
    pub sales: Vec<SoldItem>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SoldItem {
    pub sale_id: String,
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sellprice_per_unit: Option<f64>,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_sale: Option<String>,
}

impl SoldItem {
    pub fn new(sale_id: impl Into<String>, product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            sale_id: sale_id.into(),
            product_id: product_id.into(),
            product_name: String::new(),
            customer_name: None,
            customer_mobile: None,
            sellprice_per_unit: None,
            quantity,
            timestamp: None,
            date_of_sale: None,
        }
    }

    /// `timestamp` wins over `date_of_sale` when both are recorded
    pub fn sale_date(&self) -> Option<&str> {
        self.timestamp
            .as_deref()
            .or(self.date_of_sale.as_deref())
    }
}

/// Next free sale id of the form `S<n>`
pub fn next_sale_id(sales: &[SoldItem]) -> String {
    let last = sales
        .iter()
        .filter_map(|s| s.sale_id.strip_prefix('S'))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("S{}", last + 1)
}
