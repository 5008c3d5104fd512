use super::*;

#[test]
fn parse_shop_command_verbs() {
    assert_eq!(parse_shop_command("list"), Some(ShopCommand::List));
    assert_eq!(parse_shop_command("  select 3 "), Some(ShopCommand::Select(3)));
    assert_eq!(parse_shop_command("submit"), Some(ShopCommand::Submit));
    assert_eq!(parse_shop_command("cancel"), Some(ShopCommand::Cancel));
    assert_eq!(parse_shop_command("q"), Some(ShopCommand::Quit));
}

#[test]
fn parse_shop_command_keeps_spaces_in_values() {
    assert_eq!(
        parse_shop_command("name Иван Иванов"),
        Some(ShopCommand::Set(FormField::Name, "Иван Иванов".to_owned()))
    );
    assert_eq!(
        parse_shop_command("phone +7 (999) 123-45-67"),
        Some(ShopCommand::Set(FormField::Phone, "+7 (999) 123-45-67".to_owned()))
    );
}

#[test]
fn parse_shop_command_rejects_unknown_and_bad_ids() {
    assert_eq!(parse_shop_command("buy 3"), None);
    assert_eq!(parse_shop_command("select three"), None);
}

#[test]
fn cli_parses_order_subcommand() {
    let cli = Cli::try_parse_from([
        "giftbox",
        "--base-url",
        "http://127.0.0.1:5000/api",
        "order",
        "--box-id",
        "2",
        "--name",
        "Иван",
        "--email",
        "ivan@example.com",
        "--phone",
        "+7 999",
    ])
    .unwrap();
    assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:5000/api"));
    assert!(matches!(cli.command, Command::Order { box_id: 2, .. }));
}

#[test]
fn base_url_flag_is_optional() {
    let cli = Cli::try_parse_from(["giftbox", "boxes"]).unwrap();
    assert_eq!(cli.base_url, None);
}

#[test]
fn resolve_config_derives_every_endpoint_from_flag() {
    let config = resolve_config(Some("http://127.0.0.1:5000/api/")).unwrap();
    assert_eq!(config.base_url, "http://127.0.0.1:5000/api");
    assert_eq!(config.health_url, "http://127.0.0.1:5000/api/health");
    assert_eq!(config.boxes_url, "http://127.0.0.1:5000/api/boxes");
    assert_eq!(config.orders_url, "http://127.0.0.1:5000/api/orders");
}
