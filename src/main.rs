use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use giftbox::config::{ApiConfig, ConfigError};
use giftbox::net::api::{ApiError, HttpStorefront};
use giftbox::render;
use giftbox::screen::{CatalogScreen, SubmitOutcome};
use giftbox::state::catalog::{FormField, SubmitRejected};
use giftbox::stub::{self, StubState};

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("storefront request failed: {0}")]
    Api(#[from] ApiError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("box {0} is not in the catalog")]
    UnknownBox(i64),
    #[error("order was not accepted")]
    OrderFailed,
    #[error("order not sent: {0}")]
    Rejected(SubmitRejected),
}

#[derive(Parser, Debug)]
#[command(name = "giftbox", about = "Gift box storefront client")]
struct Cli {
    /// Overrides `GIFTBOX_API_BASE_URL` and every per-endpoint URL.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the catalog as cards.
    Boxes,
    /// Print one box.
    Box { id: i64 },
    /// Place an order for a box from the catalog.
    Order {
        #[arg(long)]
        box_id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },
    /// Print all orders, newest first.
    Orders,
    /// Check the service health endpoint.
    Health,
    /// Interactive catalog screen on stdin.
    Shop,
    /// Serve the in-memory stub API.
    Stub {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 5000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = resolve_config(cli.base_url.as_deref())?;

    match cli.command {
        Command::Boxes => run_boxes(config).await,
        Command::Box { id } => run_box(config, id).await,
        Command::Order { box_id, name, email, phone } => run_order(config, box_id, [name, email, phone]).await,
        Command::Orders => run_orders(config).await,
        Command::Health => run_health(config).await,
        Command::Shop => run_shop(config).await,
        Command::Stub { host, port } => run_stub(&host, port).await,
    }
}

fn resolve_config(base_url: Option<&str>) -> Result<ApiConfig, CliError> {
    let config = ApiConfig::from_env()?;
    Ok(match base_url {
        Some(url) => ApiConfig { request_timeout: config.request_timeout, ..ApiConfig::with_base_url(url) },
        None => config,
    })
}

fn print_toasts(screen: &mut CatalogScreen<HttpStorefront>) {
    for toast in screen.drain_toasts() {
        println!("{}", render::render_toast(&toast));
    }
}

async fn run_boxes(config: ApiConfig) -> Result<(), CliError> {
    let mut screen = CatalogScreen::mount(HttpStorefront::new(config)?).await;
    println!("{}", render::render_text(&render::catalog_view(screen.state())));
    print_toasts(&mut screen);
    Ok(())
}

async fn run_box(config: ApiConfig, id: i64) -> Result<(), CliError> {
    let gift = HttpStorefront::new(config)?.fetch_box(id).await?;
    print!("{}", render::render_card(&render::CardView::from(&gift)));
    Ok(())
}

async fn run_order(config: ApiConfig, box_id: i64, contact: [String; 3]) -> Result<(), CliError> {
    let mut screen = CatalogScreen::mount(HttpStorefront::new(config)?).await;
    print_toasts(&mut screen);
    if !screen.order_click(box_id) {
        return Err(CliError::UnknownBox(box_id));
    }
    let [name, email, phone] = contact;
    screen.set_field(FormField::Name, name);
    screen.set_field(FormField::Email, email);
    screen.set_field(FormField::Phone, phone);

    let outcome = screen.submit().await;
    print_toasts(&mut screen);
    match outcome {
        SubmitOutcome::Placed(receipt) => {
            if let Some(order) = receipt.and_then(|r| r.order) {
                println!("order #{} created at {}", order.id, order.created_at);
            }
            Ok(())
        }
        SubmitOutcome::Failed => Err(CliError::OrderFailed),
        SubmitOutcome::Rejected(rejected) => Err(CliError::Rejected(rejected)),
    }
}

async fn run_orders(config: ApiConfig) -> Result<(), CliError> {
    let orders = HttpStorefront::new(config)?.fetch_orders().await?;
    if orders.is_empty() {
        println!("no orders");
    }
    for row in orders {
        let title = row.box_title.as_deref().unwrap_or("?");
        let price = row.box_price.map(|p| format!("{p} ₽")).unwrap_or_default();
        println!(
            "#{} {} {title} {price} | {} <{}> {}",
            row.order.id, row.order.created_at, row.order.customer_name, row.order.customer_email, row.order.customer_phone
        );
    }
    Ok(())
}

async fn run_health(config: ApiConfig) -> Result<(), CliError> {
    let status = HttpStorefront::new(config)?.health().await?;
    println!("{}: {}", status.status, status.message);
    Ok(())
}

async fn run_stub(host: &str, port: u16) -> Result<(), CliError> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    stub::serve(listener, StubState::seeded()).await?;
    Ok(())
}

// =============================================================================
// SHOP
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
enum ShopCommand {
    List,
    Reload,
    Select(i64),
    Set(FormField, String),
    Submit,
    Cancel,
    Help,
    Quit,
}

fn parse_shop_command(line: &str) -> Option<ShopCommand> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    match verb {
        "list" | "ls" => Some(ShopCommand::List),
        "reload" => Some(ShopCommand::Reload),
        "select" | "order" => rest.parse().ok().map(ShopCommand::Select),
        "name" => Some(ShopCommand::Set(FormField::Name, rest.to_owned())),
        "email" => Some(ShopCommand::Set(FormField::Email, rest.to_owned())),
        "phone" => Some(ShopCommand::Set(FormField::Phone, rest.to_owned())),
        "submit" => Some(ShopCommand::Submit),
        "cancel" => Some(ShopCommand::Cancel),
        "help" | "?" => Some(ShopCommand::Help),
        "quit" | "exit" | "q" => Some(ShopCommand::Quit),
        _ => None,
    }
}

const SHOP_HELP: &str =
    "commands: list | reload | select <id> | name <v> | email <v> | phone <v> | submit | cancel | quit";

async fn run_shop(config: ApiConfig) -> Result<(), CliError> {
    let mut screen = CatalogScreen::mount(HttpStorefront::new(config)?).await;
    println!("{}", render::render_text(&render::catalog_view(screen.state())));
    print_toasts(&mut screen);
    println!("{SHOP_HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = parse_shop_command(&line) else {
            println!("{SHOP_HELP}");
            continue;
        };
        match command {
            ShopCommand::Quit => break,
            ShopCommand::Help => {
                println!("{SHOP_HELP}");
                continue;
            }
            ShopCommand::List => {}
            ShopCommand::Reload => screen.load().await,
            ShopCommand::Select(id) => {
                if !screen.order_click(id) {
                    println!("no box {id}");
                }
            }
            ShopCommand::Set(field, value) => screen.set_field(field, value),
            ShopCommand::Submit => {
                if let SubmitOutcome::Rejected(rejected) = screen.submit().await {
                    println!("{rejected}");
                }
            }
            ShopCommand::Cancel => {
                screen.cancel();
            }
        }
        println!("{}", render::render_text(&render::catalog_view(screen.state())));
        print_toasts(&mut screen);
    }
    Ok(())
}
