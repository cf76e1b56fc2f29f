mod product;
mod sale;
mod state;
mod store;

pub use product::Product;
pub use sale::{next_sale_id, SalesFile, SoldItem};
pub use state::{CartLine, State};
pub use store::{Config, DisplaySettings, StoreSettings};

use crate::error::{Result, StoreError};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Category name to the items filed under it
pub type Categories = BTreeMap<String, Vec<String>>;

/// Get the store directory path (~/.itzone/)
pub fn store_dir() -> Result<PathBuf> {
    // First try XDG-style directories
    if let Some(proj_dirs) = ProjectDirs::from("", "", "itzone") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    // Fallback to ~/.itzone/
    let home = std::env::var_os("HOME").map(PathBuf::from).ok_or_else(|| {
        StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".itzone"))
}

fn read_toml<T: DeserializeOwned>(path: PathBuf) -> Result<T> {
    if !path.exists() {
        return Err(StoreError::DataFileNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| StoreError::DataParse { path, source: e })
}

fn read_toml_or_default<T: DeserializeOwned + Default>(path: PathBuf) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    read_toml(path)
}

fn write_toml<T: Serialize>(path: PathBuf, value: &T) -> Result<()> {
    let content = toml::to_string_pretty(value).map_err(|e| StoreError::DataWrite {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    fs::write(&path, content)?;
    tracing::debug!(path = %path.display(), "saved data file");
    Ok(())
}

/// Load config.toml (defaults if missing)
pub fn load_config(store_dir: &Path) -> Result<Config> {
    read_toml_or_default(store_dir.join("config.toml"))
}

/// Load products.toml, ordered by product id (empty if missing; sales then
/// count as unmatched)
pub fn load_products(store_dir: &Path) -> Result<Vec<Product>> {
    let table: HashMap<String, Product> =
        read_toml_or_default(store_dir.join("products.toml"))?;
    let mut products: Vec<Product> = table
        .into_iter()
        .map(|(id, mut product)| {
            product.id = id;
            product
        })
        .collect();
    products.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(products)
}

/// Load sales.toml (empty if missing)
pub fn load_sales(store_dir: &Path) -> Result<Vec<SoldItem>> {
    let file: SalesFile = read_toml_or_default(store_dir.join("sales.toml"))?;
    Ok(file.sales)
}

pub fn save_sales(store_dir: &Path, sales: Vec<SoldItem>) -> Result<()> {
    write_toml(store_dir.join("sales.toml"), &SalesFile { sales })
}

/// Load categories.toml (empty if missing)
pub fn load_categories(store_dir: &Path) -> Result<Categories> {
    read_toml_or_default(store_dir.join("categories.toml"))
}

pub fn save_categories(store_dir: &Path, categories: &Categories) -> Result<()> {
    write_toml(store_dir.join("categories.toml"), categories)
}

/// Load state.toml (creates default if missing)
pub fn load_state(store_dir: &Path) -> Result<State> {
    read_toml_or_default(store_dir.join("state.toml"))
}

pub fn save_state(store_dir: &Path, state: &State) -> Result<()> {
    write_toml(store_dir.join("state.toml"), state)
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[store]
name = "Friends IT Zone"
# phone = "+880 1700-000000"   # optional
# address = "Dhaka, Bangladesh" # optional

[display]
currency_symbol = "৳"
"#;

/// Template content for products.toml
pub const PRODUCTS_TEMPLATE: &str = r#"# Define your catalog here. The table name (e.g., [P1]) is the product id
# referenced by sales and the cart.
#
# buysellprice_per_unit is the purchase (cost) price used for profit.

[P1]
name = "USB-C Charger 65W"
buysellprice_per_unit = 1200.00
category = "Accessories"
description = "GaN wall charger with a single USB-C port"

[P2]
name = "Wireless Mouse"
buysellprice_per_unit = 450.00
category = "Peripherals"
"#;

/// Template content for sales.toml
pub const SALES_TEMPLATE: &str = r#"# One [[sale]] table per completed sale line. Record new sales with:
#   itzone sell --product P1 --quantity 1 --price 1500
#
# [[sale]]
# sale_id = "S1"
# product_id = "P1"
# product_name = "USB-C Charger 65W"
# customer_name = "Rahim"          # optional
# customer_mobile = "01700000000"  # optional
# sellprice_per_unit = 1500.00
# quantity = 1
# timestamp = "2024-01-01T10:30:00"
"#;

/// Template content for categories.toml
pub const CATEGORIES_TEMPLATE: &str = r#"Accessories = ["Chargers", "Cables"]
Peripherals = ["Mice", "Keyboards"]
"#;
