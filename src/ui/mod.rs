mod category_form;
mod format;
mod header;
mod theme;

pub use category_form::CategoryItemForm;
pub use format::{format_money, format_sale_date, format_sale_timestamp};
pub use header::{Header, Section, User};
pub use theme::{Theme, ThemeContext};
