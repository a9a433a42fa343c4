//! Command-line surface
//!
//! Thin driver over the café core for running it without the GUI: browse the
//! menu, manage stock, look at the floor plan and ring up an order.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use shared::models::{Ingredient, TableStatus};

use crate::core::{Cafe, Config};
use crate::orders::OrderSession;
use crate::store::Access;
use crate::utils::init_logger;

#[derive(Debug, Parser)]
#[command(name = "cloud-cafe", version, about = "Cloud Café operations")]
pub struct Cli {
    /// Directory holding the CSV data files
    #[arg(long, env = "DATA_DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the menu by category, with availability against current stock
    Menu,
    /// Show the full inventory with low-stock flags
    Inventory,
    /// Show only ingredients at or below their reorder point
    LowStock,
    /// Add stock to an ingredient
    Restock { name: String, amount: i64 },
    /// Take stock out of an ingredient (spillage, spoilage)
    StockOut { name: String, amount: i64 },
    /// Register a new ingredient
    AddIngredient {
        name: String,
        stock: i64,
        unit: String,
        reorder_point: i64,
    },
    /// Show the floor plan
    Tables,
    /// Reserve a table for a member (VIP only)
    Reserve { table: String, user_id: String },
    /// Free a table (staff override)
    Free { table: String },
    /// Ring up an order: repeatable ITEM=QTY, a table and an optional
    /// customer id
    Order {
        /// Menu item and quantity, e.g. --item "Creamy Cumulatte=2"
        #[arg(long = "item", required = true)]
        items: Vec<String>,
        #[arg(long)]
        table: String,
        #[arg(long)]
        customer: Option<String>,
    },
}

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match &cli.data_dir {
        Some(dir) => Config::with_data_dir(dir.clone()),
        None => Config::from_env(),
    };
    init_logger(&config.log_level);

    let mut cafe = Cafe::load(&config).context("loading café data")?;

    match cli.command {
        Command::Menu => {
            for category in cafe.menu.categories() {
                println!("{category}");
                for item in cafe.menu.by_category(&category) {
                    let marker = if cafe.inventory.is_available(item) {
                        ' '
                    } else {
                        '!'
                    };
                    println!("{marker} {:<22} ₱{:>7}  {}", item.name, item.price, item.description);
                }
                println!();
            }
        }
        Command::Inventory => {
            for ingredient in cafe.inventory.stock().values() {
                print_ingredient(ingredient);
            }
        }
        Command::LowStock => {
            let alerts = cafe.inventory.low_stock_alerts();
            if alerts.is_empty() {
                println!("All ingredients above reorder point.");
            }
            for ingredient in alerts {
                print_ingredient(ingredient);
            }
        }
        Command::Restock { name, amount } => {
            cafe.inventory.restock(&name, amount)?;
            println!(
                "{name} now at {}",
                cafe.inventory.get(&name).map(|i| i.stock_level).unwrap_or(0)
            );
        }
        Command::StockOut { name, amount } => match cafe.inventory.stock_out(&name, amount)? {
            Ok(()) => println!(
                "{name} now at {}",
                cafe.inventory.get(&name).map(|i| i.stock_level).unwrap_or(0)
            ),
            Err(err) => println!("{err}"),
        },
        Command::AddIngredient {
            name,
            stock,
            unit,
            reorder_point,
        } => {
            cafe.inventory
                .add_ingredient(Ingredient::new(name.clone(), stock, unit, reorder_point))?;
            println!("Added {name}.");
        }
        Command::Tables => {
            for table in cafe.tables.tables().values() {
                let vip = if table.is_vip { " VIP" } else { "" };
                println!(
                    "{:<8} cap {}{}  {:<9} {}",
                    table.id, table.capacity, vip, table.status, table.customer
                );
            }
        }
        Command::Reserve { table, user_id } => {
            let Some(user) = cafe.users.get(&user_id).cloned() else {
                bail!("unknown user id: {user_id}");
            };
            cafe.tables.reserve_for(&table, &user)?;
            println!("{table} reserved for {}.", user.name);
        }
        Command::Free { table } => {
            cafe.tables
                .transition(&table, TableStatus::Available, "", Access::Staff)?;
            println!("{table} is available again.");
        }
        Command::Order {
            items,
            table,
            customer,
        } => {
            let mut session = OrderSession::new();
            for spec in &items {
                let (name, qty) = parse_item_spec(spec)?;
                let Some(item) = cafe.menu.get(name).cloned() else {
                    bail!("unknown menu item: {name}");
                };
                for _ in 0..qty {
                    session.add_item(&item, &cafe)?;
                }
            }
            if let Some(id) = &customer {
                let status = session.enter_customer_id(id, &cafe);
                println!("Customer: {}", status.display_name());
            }
            session.select_table(table);

            let receipt = session.checkout(&mut cafe)?;
            println!("{receipt}");
        }
    }
    Ok(())
}

fn print_ingredient(ingredient: &Ingredient) {
    let flag = if ingredient.needs_reorder() {
        "LOW"
    } else {
        "ok"
    };
    println!(
        "{:<18} {:>6} {:<10} reorder at {:>5}  [{flag}]",
        ingredient.name, ingredient.stock_level, ingredient.unit, ingredient.reorder_point
    );
}

/// Parse `Name=qty` (quantity defaults to 1).
fn parse_item_spec(spec: &str) -> anyhow::Result<(&str, i64)> {
    match spec.split_once('=') {
        None => Ok((spec.trim(), 1)),
        Some((name, qty)) => {
            let qty: i64 = qty
                .trim()
                .parse()
                .with_context(|| format!("bad quantity in {spec:?}"))?;
            if qty < 1 {
                bail!("quantity must be at least 1 in {spec:?}");
            }
            Ok((name.trim(), qty))
        }
    }
}
