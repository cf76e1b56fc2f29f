use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

use itzone::config::{
    load_categories, load_config, load_products, load_sales, load_state, next_sale_id,
    save_categories, save_sales, save_state, store_dir, Config, SoldItem, State,
    CATEGORIES_TEMPLATE, CONFIG_TEMPLATE, PRODUCTS_TEMPLATE, SALES_TEMPLATE,
};
use itzone::error::{Result, StoreError};
use itzone::profit::{
    compute_profit_items, total_pages, total_profit, unmatched_count, ProfitItem, ProfitView,
};
use itzone::ui::{
    format_money, format_sale_date, format_sale_timestamp, CategoryItemForm, Header, Section,
    Theme, ThemeContext,
};

#[derive(Parser)]
#[command(name = "itzone")]
#[command(version, about = "Friends IT Zone storefront and profit tool", long_about = None)]
struct Cli {
    /// Path to store directory (default: ~/.itzone or XDG config)
    #[arg(short = 'C', long, global = true)]
    store_dir: Option<PathBuf>,

    /// UI theme for this run
    #[arg(long, global = true, value_enum, default_value_t = Theme::Night)]
    theme: Theme,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize store directory with template files
    Init,

    /// Show store summary
    Status,

    /// List the product catalog
    Products,

    /// List categories and their items
    Categories,

    /// Add an item under a category
    AddCategoryItem {
        /// Category name
        #[arg(long, default_value = "")]
        category: String,

        /// Item text
        #[arg(long, default_value = "")]
        item: String,
    },

    /// Show or change the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },

    /// Record a completed sale
    Sell {
        /// Product id from products.toml
        #[arg(short, long)]
        product: String,

        /// Units sold
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Selling price per unit
        #[arg(long)]
        price: f64,

        /// Customer name
        #[arg(long)]
        customer: Option<String>,

        /// Customer mobile number
        #[arg(long)]
        mobile: Option<String>,

        /// Sale date (YYYY-MM-DD, default: now)
        #[arg(long)]
        date: Option<String>,
    },

    /// Switch to a section and show the header
    Nav {
        /// home, categories, cart, profit or profile
        section: String,
    },

    /// Show the signed-in user
    Profile,

    /// Show or change the theme for this run
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },

    /// Profit analysis of recorded sales
    Profit {
        /// Show full history instead of the preview
        #[arg(long)]
        all: bool,

        /// Page of full history to show (implies --all)
        #[arg(long)]
        page: Option<usize>,

        /// Print the computed items as JSON
        #[arg(long)]
        json: bool,

        #[command(subcommand)]
        action: Option<ProfitAction>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id from products.toml
        product: String,

        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },

    /// Remove a product from the cart
    Remove {
        /// Product id from products.toml
        product: String,
    },

    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum ProfitAction {
    /// Show full detail for one sale
    Show {
        /// Sale id or row number from 'profit'
        sale: String,
    },

    /// Next page of full history
    Next,

    /// Previous page of full history
    Prev,

    /// Download a receipt for a sale
    Receipt {
        /// Sale id or row number from 'profit'
        sale: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeAction {
    Toggle,
    Day,
    Night,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dir = match cli.store_dir {
        Some(p) => p,
        None => store_dir()?,
    };
    tracing::info!(store = %dir.display(), "using store directory");

    let mut theme = ThemeContext::new(cli.theme);

    match cli.command {
        Commands::Init => cmd_init(&dir),
        Commands::Status => cmd_status(&dir),
        Commands::Products => cmd_products(&dir, &theme),
        Commands::Categories => cmd_categories(&dir, &theme),
        Commands::AddCategoryItem { category, item } => {
            cmd_add_category_item(&dir, &category, &item)
        }
        Commands::Cart { action } => cmd_cart(&dir, &theme, action),
        Commands::Sell {
            product,
            quantity,
            price,
            customer,
            mobile,
            date,
        } => cmd_sell(&dir, &product, quantity, price, customer, mobile, date),
        Commands::Nav { section } => cmd_nav(&dir, &theme, &section),
        Commands::Profile => cmd_profile(&dir, &theme),
        Commands::Theme { action } => cmd_theme(&mut theme, action),
        Commands::Profit {
            all,
            page,
            json,
            action,
        } => cmd_profit(&dir, &theme, all, page, json, action),
    }
}

fn ensure_store(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(StoreError::StoreNotFound(dir.to_path_buf()));
    }
    Ok(())
}

/// Initialize store directory with template files
fn cmd_init(dir: &Path) -> Result<()> {
    use std::fs;

    if dir.exists() {
        return Err(StoreError::AlreadyInitialized(dir.to_path_buf()));
    }

    fs::create_dir_all(dir)?;
    fs::write(dir.join("config.toml"), CONFIG_TEMPLATE)?;
    fs::write(dir.join("products.toml"), PRODUCTS_TEMPLATE)?;
    fs::write(dir.join("sales.toml"), SALES_TEMPLATE)?;
    fs::write(dir.join("categories.toml"), CATEGORIES_TEMPLATE)?;

    println!("Initialized store at: {}", dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Edit your catalog:   $EDITOR {}/products.toml",
        dir.display()
    );
    println!("  2. Record a sale:       itzone sell --product P1 --quantity 1 --price 1500");
    println!("  3. Review profit:       itzone profit");

    Ok(())
}

// Table row structs for tabled
#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "COST")]
    cost: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "ITEMS")]
    items: String,
}

#[derive(Tabled)]
struct CartRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "QTY")]
    quantity: u32,
}

#[derive(Tabled)]
struct ProfitRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "SALE")]
    sale_id: String,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "PRODUCT")]
    product: String,
    #[tabled(rename = "CUSTOMER")]
    customer: String,
    #[tabled(rename = "QTY")]
    quantity: u32,
    #[tabled(rename = "SOLD")]
    sold: String,
    #[tabled(rename = "COST")]
    cost: String,
    #[tabled(rename = "PROFIT")]
    total_profit: String,
}

/// Show store summary
fn cmd_status(dir: &Path) -> Result<()> {
    ensure_store(dir)?;

    let config = load_config(dir)?;
    let products = load_products(dir)?;
    let sales = load_sales(dir)?;
    let categories = load_categories(dir)?;
    let state = load_state(dir)?;

    let items = compute_profit_items(&sales, &products);
    let symbol = &config.display.currency_symbol;

    println!("Store Status");
    println!("{}", "-".repeat(50));
    println!("Store directory:  {}", dir.display());
    println!("Store:            {}", config.store.name);
    println!("Products:         {}", products.len());
    println!("Categories:       {}", categories.len());
    println!("Sales:            {}", sales.len());
    println!("Cart items:       {}", state.cart_count());
    println!("Section:          {}", state.section);
    println!(
        "Total profit:     {}",
        format_money(total_profit(&items), symbol)
    );

    Ok(())
}

/// List the product catalog
fn cmd_products(dir: &Path, theme: &ThemeContext) -> Result<()> {
    ensure_store(dir)?;

    let config = load_config(dir)?;
    let products = load_products(dir)?;

    if products.is_empty() {
        println!("No products configured.");
        println!("Add products to: {}/products.toml", dir.display());
        return Ok(());
    }

    let rows: Vec<ProductRow> = products
        .iter()
        .map(|p| ProductRow {
            id: p.id.clone(),
            name: p.name.clone(),
            category: p.category.clone().unwrap_or_default(),
            cost: format_money(p.buysellprice_per_unit, &config.display.currency_symbol),
        })
        .collect();

    println!("{}", theme.render_table(Table::new(rows)));
    Ok(())
}

/// List categories and their items
fn cmd_categories(dir: &Path, theme: &ThemeContext) -> Result<()> {
    ensure_store(dir)?;

    let categories = load_categories(dir)?;
    if categories.is_empty() {
        println!("No categories yet.");
        println!("Add one with: itzone add-category-item --category <name> --item <text>");
        return Ok(());
    }

    let rows: Vec<CategoryRow> = categories
        .iter()
        .map(|(category, items)| CategoryRow {
            category: category.clone(),
            items: items.join(", "),
        })
        .collect();

    println!("{}", theme.render_table(Table::new(rows)));
    Ok(())
}

/// Add an item under a category
fn cmd_add_category_item(dir: &Path, category: &str, item: &str) -> Result<()> {
    ensure_store(dir)?;

    let mut form = CategoryItemForm::new(category, item);
    if !form.can_save() {
        return Err(StoreError::IncompleteCategoryItem);
    }

    let mut categories = load_categories(dir)?;
    let (category, item) = form.save(&mut categories)?;
    save_categories(dir, &categories)?;

    tracing::info!(%category, %item, "category item saved");
    println!("Added '{}' to {}", item, category);
    Ok(())
}

/// Show or change the cart
fn cmd_cart(dir: &Path, theme: &ThemeContext, action: Option<CartAction>) -> Result<()> {
    ensure_store(dir)?;

    let products = load_products(dir)?;
    let mut state = load_state(dir)?;

    match action {
        None => {
            if state.cart.is_empty() {
                println!("Your cart is empty.");
                return Ok(());
            }
            let rows: Vec<CartRow> = state
                .cart
                .iter()
                .map(|line| CartRow {
                    id: line.product_id.clone(),
                    name: products
                        .iter()
                        .find(|p| p.id == line.product_id)
                        .map(|p| p.name.clone())
                        .unwrap_or_default(),
                    quantity: line.quantity,
                })
                .collect();
            println!("{}", theme.render_table(Table::new(rows)));
            println!("Cart items: {}", state.cart_count());
            return Ok(());
        }
        Some(CartAction::Add { product, quantity }) => {
            if quantity == 0 {
                return Err(StoreError::InvalidQuantity(quantity));
            }
            if !products.iter().any(|p| p.id == product) {
                return Err(StoreError::ProductNotFound(product));
            }
            state.add_to_cart(&product, quantity)?;
            println!(
                "Added {} x {} to cart ({} items)",
                quantity,
                product,
                state.cart_count()
            );
        }
        Some(CartAction::Remove { product }) => {
            let removed = state
                .remove_from_cart(&product)
                .ok_or_else(|| StoreError::NotInCart(product.clone()))?;
            println!(
                "Removed {} x {} from cart ({} items)",
                removed.quantity,
                product,
                state.cart_count()
            );
        }
        Some(CartAction::Clear) => {
            state.cart.clear();
            println!("Cart cleared");
        }
    }

    save_state(dir, &state)
}

/// Record a completed sale
fn cmd_sell(
    dir: &Path,
    product_id: &str,
    quantity: u32,
    price: f64,
    customer: Option<String>,
    mobile: Option<String>,
    date: Option<String>,
) -> Result<()> {
    ensure_store(dir)?;

    if quantity == 0 {
        return Err(StoreError::InvalidQuantity(quantity));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(StoreError::InvalidPrice(price));
    }

    let timestamp = match date {
        Some(s) => {
            chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .map_err(|_| StoreError::InvalidDate(s.clone()))?;
            s
        }
        None => chrono::Local::now()
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string(),
    };

    let config = load_config(dir)?;
    let products = load_products(dir)?;
    let product = products
        .iter()
        .find(|p| p.id == product_id)
        .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))?;

    let mut sales = load_sales(dir)?;
    let sale_id = next_sale_id(&sales);

    let mut sale = SoldItem::new(sale_id.clone(), product_id, quantity);
    sale.product_name = product.name.clone();
    sale.customer_name = customer;
    sale.customer_mobile = mobile;
    sale.sellprice_per_unit = Some(price);
    sale.timestamp = Some(timestamp);
    sales.push(sale);

    save_sales(dir, sales)?;

    let profit = (price - product.buysellprice_per_unit) * f64::from(quantity);
    tracing::info!(%sale_id, product = %product_id, quantity, "sale recorded");
    println!("Recorded {}", sale_id);
    println!("  Product: {} x {}", product.name, quantity);
    println!(
        "  Profit:  {}",
        format_money(profit, &config.display.currency_symbol)
    );

    Ok(())
}

fn render_header(config: &Config, state: &State, theme: &ThemeContext) -> String {
    Header {
        store_name: &config.store.name,
        current: state.section,
        user: state.user.as_ref(),
        cart_count: state.cart_count(),
    }
    .render(theme)
}

/// Switch to a section and show the header
fn cmd_nav(dir: &Path, theme: &ThemeContext, section: &str) -> Result<()> {
    ensure_store(dir)?;

    let section: Section = section.parse()?;
    let config = load_config(dir)?;
    let mut state = load_state(dir)?;

    state.section = section;
    save_state(dir, &state)?;

    println!("{}", render_header(&config, &state, theme));
    Ok(())
}

/// Show the signed-in user
fn cmd_profile(dir: &Path, theme: &ThemeContext) -> Result<()> {
    ensure_store(dir)?;

    let config = load_config(dir)?;
    let mut state = load_state(dir)?;
    state.section = Section::Profile;
    save_state(dir, &state)?;

    println!("{}", render_header(&config, &state, theme));
    match &state.user {
        Some(user) => {
            println!("Name:    {}", user.name);
            println!("Points:  {}", user.points);
        }
        None => {
            println!("Not signed in.");
            println!("Add a [user] table to {}/state.toml", dir.display());
        }
    }
    Ok(())
}

/// Show or change the theme for this run
fn cmd_theme(theme: &mut ThemeContext, action: Option<ThemeAction>) -> Result<()> {
    match action {
        None => {}
        Some(ThemeAction::Toggle) => {
            theme.toggle();
        }
        Some(ThemeAction::Day) => theme.set(Theme::Day),
        Some(ThemeAction::Night) => theme.set(Theme::Night),
    }
    println!("Theme: {}", theme.theme());
    Ok(())
}

/// Resolve a sale reference: a sale id, or a 1-based row number from the
/// newest-first list.
fn resolve_sale<'a>(items: &'a [ProfitItem], reference: &str) -> Result<&'a ProfitItem> {
    if let Some(item) = items.iter().find(|i| i.sale_id == reference) {
        return Ok(item);
    }

    match reference.parse::<usize>() {
        Ok(idx) if idx >= 1 && idx <= items.len() => Ok(&items[idx - 1]),
        Ok(_) => Err(StoreError::InvalidSaleIndex(reference.to_string())),
        Err(_) => Err(StoreError::SaleNotFound(reference.to_string())),
    }
}

/// Profit analysis of recorded sales
fn cmd_profit(
    dir: &Path,
    theme: &ThemeContext,
    all: bool,
    page: Option<usize>,
    json: bool,
    action: Option<ProfitAction>,
) -> Result<()> {
    ensure_store(dir)?;

    let config = load_config(dir)?;
    let products = load_products(dir)?;
    let sales = load_sales(dir)?;
    let mut state = load_state(dir)?;

    let items = compute_profit_items(&sales, &products);
    let count = items.len();

    match action {
        Some(ProfitAction::Show { sale }) => {
            let item = resolve_sale(&items, &sale)?;
            print_profit_detail(item, &config, theme);
            return Ok(());
        }
        Some(ProfitAction::Receipt { sale }) => {
            let item = resolve_sale(&items, &sale)?;
            println!("Receipt download for {} is not available yet.", item.sale_id);
            return Ok(());
        }
        // coming from the preview, paging opens full history at page 1
        Some(ProfitAction::Next | ProfitAction::Prev) if !state.profit.is_full_history() => {
            state.profit.expand();
            state.profit.page = 1;
        }
        Some(ProfitAction::Next) => {
            state.profit.clamp(count);
            if !state.profit.next_page(count) {
                println!("Already on the last page.");
            }
        }
        Some(ProfitAction::Prev) => {
            state.profit.clamp(count);
            if !state.profit.prev_page() {
                println!("Already on the first page.");
            }
        }
        None => {
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
                return Ok(());
            }
            if all || page.is_some() {
                state.profit.expand();
                match page {
                    Some(p) => state.profit.go_to(p, count)?,
                    None => state.profit.clamp(count),
                }
            } else {
                state.profit.collapse();
            }
        }
    }

    save_state(dir, &state)?;
    print_profit(&items, &state.profit, &config, theme);
    Ok(())
}

fn print_profit(items: &[ProfitItem], view: &ProfitView, config: &Config, theme: &ThemeContext) {
    let symbol = &config.display.currency_symbol;

    println!("Profit Analysis");
    println!(
        "Total Profit: {}",
        format_money(total_profit(items), symbol)
    );
    println!("{}", theme.rule(40));

    if items.is_empty() {
        println!("No sales data available.");
        println!("Record one with: itzone sell --product <id> --quantity <n> --price <p>");
        return;
    }

    let offset = view.offset();
    let rows: Vec<ProfitRow> = view
        .window(items)
        .iter()
        .enumerate()
        .map(|(idx, item)| ProfitRow {
            index: offset + idx + 1,
            sale_id: item.sale_id.clone(),
            date: format_sale_date(item.sale_date.as_deref()),
            product: item.product_name.clone(),
            customer: item.customer_name.clone(),
            quantity: item.quantity,
            sold: format_money(item.sold_price, symbol),
            cost: if item.cost_matched {
                format_money(item.purchase_price, symbol)
            } else {
                format!("{} (no record)", format_money(item.purchase_price, symbol))
            },
            total_profit: format_money(item.total_profit, symbol),
        })
        .collect();

    println!("{}", theme.render_table(Table::new(rows)));

    let unmatched = unmatched_count(items);
    if unmatched > 0 {
        println!(
            "Warning: {} sale(s) have no matching product; their cost is counted as 0.",
            unmatched
        );
    }

    if view.is_full_history() {
        let shown = view.window(items).len();
        let prev = if view.has_prev() { "‹ Prev" } else { "‹ Prev (disabled)" };
        let next = if view.has_next(items.len()) {
            "Next ›"
        } else {
            "Next › (disabled)"
        };
        println!(
            "Page {} of {} ({} of {} sales)   {}   {}",
            view.page,
            total_pages(items.len()),
            shown,
            items.len(),
            prev,
            next
        );
    } else {
        println!(
            "Showing {} of {} sales. Use 'itzone profit --all' for full history.",
            view.window(items).len(),
            items.len()
        );
    }
    println!("Use 'itzone profit show <#>' for details.");
}

fn print_profit_detail(item: &ProfitItem, config: &Config, theme: &ThemeContext) {
    let symbol = &config.display.currency_symbol;
    let quantity = f64::from(item.quantity);
    let description = item
        .product
        .as_ref()
        .and_then(|p| p.description.as_deref())
        .unwrap_or("No description");

    println!("Sale {}", item.sale_id);
    println!("{}", theme.rule(40));
    println!("Customer:       {}", item.customer_name);
    println!("Mobile:         {}", item.customer_mobile);
    println!("Product:        {} ({})", item.product_name, item.product_id);
    println!("Description:    {}", description);
    println!(
        "Sold on:        {}",
        format_sale_timestamp(item.sale_date.as_deref())
    );
    println!("{}", theme.rule(40));
    println!("Unit price:     {}", format_money(item.sold_price, symbol));
    if item.cost_matched {
        println!("Unit cost:      {}", format_money(item.purchase_price, symbol));
    } else {
        println!(
            "Unit cost:      {} (no product record)",
            format_money(item.purchase_price, symbol)
        );
    }
    println!("Unit profit:    {}", format_money(item.profit, symbol));
    println!("Quantity:       {}", item.quantity);
    println!(
        "Total revenue:  {}",
        format_money(item.sold_price * quantity, symbol)
    );
    println!(
        "Total cost:     {}",
        format_money(item.purchase_price * quantity, symbol)
    );
    println!("Total profit:   {}", format_money(item.total_profit, symbol));
}
