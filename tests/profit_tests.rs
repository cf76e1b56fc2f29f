use itzone::config::{Product, SoldItem};
use itzone::profit::{
    compute_profit_items, total_profit, unmatched_count, ProfitView, PAGE_SIZE, PREVIEW_SIZE,
};
use itzone::ui::format_money;

fn sale(id: &str, product: &str, price: f64, qty: u32, timestamp: &str) -> SoldItem {
    let mut s = SoldItem::new(id, product, qty);
    s.sellprice_per_unit = Some(price);
    s.timestamp = Some(timestamp.to_string());
    s
}

fn many_sales(n: usize) -> Vec<SoldItem> {
    (0..n)
        .map(|i| {
            let day = (i % 28) + 1;
            let month = (i / 28) % 12 + 1;
            sale(
                &format!("S{i}"),
                "P1",
                15.0,
                1,
                &format!("2023-{month:02}-{day:02}"),
            )
        })
        .collect()
}

#[test]
fn test_single_sale_profit_and_header_total() {
    let products = vec![Product::new("P1", 10.0)];
    let sold = vec![sale("S1", "P1", 15.0, 2, "2024-01-01")];

    let items = compute_profit_items(&sold, &products);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].profit, 5.0);
    assert_eq!(items[0].total_profit, 10.0);
    assert!(items[0].cost_matched);
    assert_eq!(format_money(total_profit(&items), "৳"), "৳10.00");
}

#[test]
fn test_matched_sale_uses_catalog_cost() {
    let products = vec![Product::new("P1", 10.0), Product::new("P2", 7.25)];
    let sold = vec![
        sale("S1", "P2", 9.0, 3, "2024-01-02"),
        sale("S2", "P1", 12.0, 1, "2024-01-01"),
    ];

    let items = compute_profit_items(&sold, &products);
    for item in &items {
        let product = products.iter().find(|p| p.id == item.product_id).unwrap();
        assert_eq!(item.purchase_price, product.buysellprice_per_unit);
        assert_eq!(
            item.total_profit,
            (item.sold_price - item.purchase_price) * f64::from(item.quantity)
        );
    }
}

#[test]
fn test_unmatched_product_costs_zero() {
    let products = vec![Product::new("P1", 10.0)];
    let sold = vec![sale("S1", "GHOST", 40.0, 2, "2024-01-01")];

    let items = compute_profit_items(&sold, &products);

    assert_eq!(items[0].purchase_price, 0.0);
    assert_eq!(items[0].profit, items[0].sold_price);
    assert_eq!(items[0].total_profit, 80.0);
    assert!(!items[0].cost_matched);
    assert!(items[0].product.is_none());
    assert_eq!(unmatched_count(&items), 1);
}

#[test]
fn test_missing_fields_default() {
    let sold = vec![SoldItem::new("S1", "P1", 4)];
    let products = vec![Product::new("P1", 2.5)];

    let items = compute_profit_items(&sold, &products);

    assert_eq!(items[0].sold_price, 0.0);
    assert_eq!(items[0].customer_name, "N/A");
    assert_eq!(items[0].customer_mobile, "N/A");
    assert_eq!(items[0].sale_date, None);
    assert_eq!(items[0].total_profit, -10.0);
}

#[test]
fn test_timestamp_preferred_over_date_of_sale() {
    let mut s = SoldItem::new("S1", "P1", 1);
    s.date_of_sale = Some("2023-05-05".to_string());
    s.timestamp = Some("2024-06-06T08:00:00".to_string());
    let mut fallback = SoldItem::new("S2", "P1", 1);
    fallback.date_of_sale = Some("2023-05-05".to_string());

    let items = compute_profit_items(&[s, fallback], &[]);

    assert_eq!(items[0].sale_date.as_deref(), Some("2024-06-06T08:00:00"));
    assert_eq!(items[1].sale_date.as_deref(), Some("2023-05-05"));
}

#[test]
fn test_sorted_newest_first_with_undated_last() {
    let mut undated = SoldItem::new("S0", "P1", 1);
    undated.sellprice_per_unit = Some(1.0);
    let sold = vec![
        undated,
        sale("S1", "P1", 1.0, 1, "2024-01-01"),
        sale("S2", "P1", 1.0, 1, "2024-03-01T09:00:00Z"),
        sale("S3", "P1", 1.0, 1, "2024-02-15 18:30:00"),
        sale("S4", "P1", 1.0, 1, "2024-01-01"),
    ];

    let items = compute_profit_items(&sold, &[]);
    let ids: Vec<&str> = items.iter().map(|i| i.sale_id.as_str()).collect();

    // equal dates keep recorded order
    assert_eq!(ids, vec!["S2", "S3", "S1", "S4", "S0"]);

    let dates: Vec<_> = items.iter().filter_map(|i| i.parsed_sale_date()).collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_aggregate_is_sum_of_items() {
    let products = vec![Product::new("P1", 3.3)];
    let sold: Vec<SoldItem> = (0..17)
        .map(|i| sale(&format!("S{i}"), "P1", 4.1 + i as f64, i + 1, "2024-01-01"))
        .collect();

    let items = compute_profit_items(&sold, &products);
    let expected: f64 = items.iter().map(|i| i.total_profit).sum();

    assert_eq!(total_profit(&items), expected);
}

#[test]
fn test_first_duplicate_product_wins() {
    let products = vec![Product::new("P1", 10.0), Product::new("P1", 99.0)];
    let items = compute_profit_items(&[sale("S1", "P1", 12.0, 1, "2024-01-01")], &products);
    assert_eq!(items[0].purchase_price, 10.0);
}

#[test]
fn test_preview_window_size() {
    let view = ProfitView::default();
    for n in [0, 1, 2, 3, 4, 120] {
        let items = compute_profit_items(&many_sales(n), &[]);
        assert_eq!(view.window(&items).len(), n.min(PREVIEW_SIZE));
    }
}

#[test]
fn test_full_history_window_size() {
    let items = compute_profit_items(&many_sales(120), &[]);
    let mut view = ProfitView::default();
    view.expand();

    for page in 1..=3 {
        view.go_to(page, items.len()).unwrap();
        let expected = PAGE_SIZE.min(items.len() - (page - 1) * PAGE_SIZE);
        assert_eq!(view.window(&items).len(), expected);
    }
    assert_eq!(view.window(&items)[0].sale_id, items[100].sale_id);
}

#[test]
fn test_preview_ignores_page() {
    let items = compute_profit_items(&many_sales(120), &[]);
    let mut view = ProfitView::default();
    view.expand();
    view.go_to(3, items.len()).unwrap();
    view.collapse();

    assert_eq!(view.page, 1);
    assert_eq!(view.window(&items).len(), PREVIEW_SIZE);
    assert_eq!(view.window(&items)[0].sale_id, items[0].sale_id);
}

#[test]
fn test_empty_sales_produce_no_items() {
    let items = compute_profit_items(&[], &[Product::new("P1", 1.0)]);
    assert!(items.is_empty());
    assert_eq!(total_profit(&items), 0.0);
}
