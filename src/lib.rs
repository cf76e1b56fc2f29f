pub mod config;
pub mod error;
pub mod profit;
pub mod ui;

pub use config::{Categories, Config, Product, SoldItem, State};
pub use error::{Result, StoreError};
pub use profit::{compute_profit_items, total_profit, ProfitItem, ProfitView};
pub use ui::{Theme, ThemeContext};
