use crate::profit::{parse_sale_date, NOT_AVAILABLE};

/// Two decimals with thousands separators, symbol first: ৳1,250.00
pub fn format_money(value: f64, currency_symbol: &str) -> String {
    let rounded = format!("{:.2}", value);
    let (whole, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let negative = whole.starts_with('-');
    let digits = whole.trim_start_matches('-');
    let grouped = group_digits(digits);

    if negative {
        format!("{currency_symbol}-{grouped}.{frac}")
    } else {
        format!("{currency_symbol}{grouped}.{frac}")
    }
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// Long form for the detail panel; unparseable dates are shown as recorded
pub fn format_sale_timestamp(raw: Option<&str>) -> String {
    match raw {
        Some(raw) => match parse_sale_date(raw) {
            Some(dt) => dt.format("%B %d, %Y %I:%M %p").to_string(),
            None => raw.to_string(),
        },
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Short form for table rows
pub fn format_sale_date(raw: Option<&str>) -> String {
    match raw {
        Some(raw) => match parse_sale_date(raw) {
            Some(dt) => dt.format("%Y-%m-%d").to_string(),
            None => raw.to_string(),
        },
        None => NOT_AVAILABLE.to_string(),
    }
}
