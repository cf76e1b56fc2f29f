use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store directory not found at {0}. Run 'itzone init' to create it.")]
    StoreNotFound(PathBuf),

    #[error("Data file not found: {0}")]
    DataFileNotFound(PathBuf),

    #[error("Failed to parse data file {path}: {source}")]
    DataParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write data file {path}: {reason}")]
    DataWrite { path: PathBuf, reason: String },

    #[error("Store directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Product '{0}' not found in products.toml")]
    ProductNotFound(String),

    #[error("Sale '{0}' not found in sales.toml")]
    SaleNotFound(String),

    #[error("Invalid sale index '{0}'. Use 'itzone profit --all' to see available sales.")]
    InvalidSaleIndex(String),

    #[error("Invalid quantity '{0}': must be greater than 0")]
    InvalidQuantity(u32),

    #[error("Invalid price '{0}': must be a finite number, not negative")]
    InvalidPrice(f64),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Unknown section '{0}'. Use one of: home, categories, cart, profit, profile")]
    UnknownSection(String),

    #[error("Unknown theme '{0}'. Use 'day' or 'night'.")]
    UnknownTheme(String),

    #[error("Both category and item must be filled in before saving")]
    IncompleteCategoryItem,

    #[error("Cannot add {quantity} more of '{product}': cart quantity is at its limit")]
    CartOverflow { product: String, quantity: u32 },

    #[error("Product '{0}' is not in the cart")]
    NotInCart(String),

    #[error("Page {page} is out of range (1-{pages})")]
    PageOutOfRange { page: usize, pages: usize },

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
