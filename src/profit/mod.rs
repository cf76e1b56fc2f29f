mod compute;
mod pager;

pub use compute::{
    compute_profit_items, parse_sale_date, total_profit, unmatched_count, ProfitItem,
    NOT_AVAILABLE,
};
pub use pager::{total_pages, ProfitView, ViewMode, PAGE_SIZE, PREVIEW_SIZE};
