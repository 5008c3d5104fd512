use super::*;

// =============================================================
// GiftBox
// =============================================================

#[test]
fn gift_box_parses_numeric_price() {
    let raw = r#"{"id":1,"title":"Classic","description":"Kraft box","price":1500,"image_url":"https://img.test/1.png","created_at":"2025-01-01T10:00:00"}"#;
    let gift: GiftBox = serde_json::from_str(raw).unwrap();
    assert_eq!(gift.id, 1);
    assert_eq!(gift.title, "Classic");
    assert!((gift.price - 1500.0).abs() < f64::EPSILON);
}

#[test]
fn gift_box_parses_decimal_string_price() {
    let raw = r#"{"id":2,"title":"Deluxe","description":"Velvet","price":"2490.50","image_url":"u","created_at":"c"}"#;
    let gift: GiftBox = serde_json::from_str(raw).unwrap();
    assert!((gift.price - 2490.5).abs() < f64::EPSILON);
}

#[test]
fn gift_box_rejects_non_numeric_price_string() {
    let raw = r#"{"id":3,"title":"t","description":"d","price":"free","image_url":"u","created_at":"c"}"#;
    assert!(serde_json::from_str::<GiftBox>(raw).is_err());
}

#[test]
fn price_label_drops_trailing_zero_fraction() {
    let mut gift = GiftBox {
        id: 1,
        title: "t".into(),
        description: "d".into(),
        price: 1500.0,
        image_url: "u".into(),
        created_at: "c".into(),
    };
    assert_eq!(gift.price_label(), "1500 ₽");
    gift.price = 999.5;
    assert_eq!(gift.price_label(), "999.5 ₽");
}

// =============================================================
// OrderForm
// =============================================================

#[test]
fn order_form_default_is_empty() {
    let form = OrderForm::default();
    assert_eq!(form.box_id, 0);
    assert!(form.customer_name.is_empty());
    assert!(form.customer_email.is_empty());
    assert!(form.customer_phone.is_empty());
}

#[test]
fn order_form_serializes_wire_field_names() {
    let form = OrderForm {
        box_id: 4,
        customer_name: "Иван Иванов".into(),
        customer_email: "ivan@example.com".into(),
        customer_phone: "+7 (999) 123-45-67".into(),
    };
    let value = serde_json::to_value(&form).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "box_id": 4,
            "customer_name": "Иван Иванов",
            "customer_email": "ivan@example.com",
            "customer_phone": "+7 (999) 123-45-67",
        })
    );
}

// =============================================================
// OrderReceipt / OrderSummary
// =============================================================

#[test]
fn order_receipt_tolerates_missing_order() {
    let raw = r#"{"status":"success","message":"ok"}"#;
    let receipt: OrderReceipt = serde_json::from_str(raw).unwrap();
    assert_eq!(receipt.status, "success");
    assert!(receipt.order.is_none());
}

#[test]
fn order_summary_flattens_order_and_box_columns() {
    let raw = r#"{"id":9,"box_id":1,"customer_name":"n","customer_email":"e@x","customer_phone":"p","created_at":"c","box_title":"Classic","box_price":"1500.00"}"#;
    let summary: OrderSummary = serde_json::from_str(raw).unwrap();
    assert_eq!(summary.order.id, 9);
    assert_eq!(summary.box_title.as_deref(), Some("Classic"));
    assert_eq!(summary.box_price, Some(1500.0));
}

#[test]
fn order_summary_left_join_nulls() {
    let raw = r#"{"id":9,"box_id":77,"customer_name":"n","customer_email":"e@x","customer_phone":"p","created_at":"c","box_title":null,"box_price":null}"#;
    let summary: OrderSummary = serde_json::from_str(raw).unwrap();
    assert!(summary.box_title.is_none());
    assert!(summary.box_price.is_none());
}
