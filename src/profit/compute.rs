use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::{Product, SoldItem};

/// Placeholder for customer fields a sale did not record
pub const NOT_AVAILABLE: &str = "N/A";

/// A sale joined with its product's cost basis
#[derive(Debug, Clone, Serialize)]
pub struct ProfitItem {
    pub sale_id: String,
    pub product_id: String,
    pub product_name: String,
    pub customer_name: String,
    pub customer_mobile: String,
    pub sold_price: f64,
    pub purchase_price: f64,
    pub profit: f64,
    pub quantity: u32,
    pub total_profit: f64,
    pub sale_date: Option<String>,
    /// false when no product matched and the purchase price fell back to 0
    pub cost_matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

impl ProfitItem {
    pub fn parsed_sale_date(&self) -> Option<NaiveDateTime> {
        self.sale_date.as_deref().and_then(parse_sale_date)
    }
}

/// Parse a recorded sale date. Accepts RFC 3339, naive date-times and plain
/// dates (midnight).
pub fn parse_sale_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Join every sale against the catalog and derive its profit, newest first.
///
/// A sale whose product is missing from the catalog is kept with a purchase
/// price of 0 and `cost_matched == false`.
pub fn compute_profit_items(sold: &[SoldItem], products: &[Product]) -> Vec<ProfitItem> {
    let mut catalog: HashMap<&str, &Product> = HashMap::with_capacity(products.len());
    for product in products {
        // first record wins on duplicate ids
        catalog.entry(product.id.as_str()).or_insert(product);
    }

    let mut items: Vec<ProfitItem> = sold
        .iter()
        .map(|sale| {
            let product = catalog.get(sale.product_id.as_str()).copied();
            if product.is_none() {
                tracing::warn!(
                    sale_id = %sale.sale_id,
                    product_id = %sale.product_id,
                    "no product for sale, purchase price taken as 0"
                );
            }

            let sold_price = sale.sellprice_per_unit.unwrap_or(0.0);
            let purchase_price = product.map_or(0.0, |p| p.buysellprice_per_unit);
            let profit = sold_price - purchase_price;

            ProfitItem {
                sale_id: sale.sale_id.clone(),
                product_id: sale.product_id.clone(),
                product_name: sale.product_name.clone(),
                customer_name: or_not_available(sale.customer_name.as_deref()),
                customer_mobile: or_not_available(sale.customer_mobile.as_deref()),
                sold_price,
                purchase_price,
                profit,
                quantity: sale.quantity,
                total_profit: profit * f64::from(sale.quantity),
                sale_date: sale.sale_date().map(str::to_string),
                cost_matched: product.is_some(),
                product: product.cloned(),
            }
        })
        .collect();

    // sort_by is stable, so equal dates keep their recorded order
    items.sort_by(|a, b| newest_first(a.parsed_sale_date(), b.parsed_sale_date()));
    tracing::debug!(count = items.len(), "computed profit items");
    items
}

fn or_not_available(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

/// Undated sales sort after every dated one
fn newest_first(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Aggregate profit across all items
pub fn total_profit(items: &[ProfitItem]) -> f64 {
    items.iter().map(|i| i.total_profit).sum()
}

/// Number of sales whose product had no cost record
pub fn unmatched_count(items: &[ProfitItem]) -> usize {
    items.iter().filter(|i| !i.cost_matched).count()
}
