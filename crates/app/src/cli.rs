//! Command-line front end.
//!
//! Commands:
//! - `storefront products|services|stores` - List a catalog collection
//! - `storefront explore` - Search by kind, category and text
//! - `storefront store <id>` - Show a store and what it sells
//! - `storefront buy <product-id>` - Buy a product for pickup
//! - `storefront book <service-id>` - Book a service
//! - `storefront orders` - List the order history
//! - `storefront order <id>` - Show an order confirmation
//! - `storefront recommend <vehicle>` - Pick offerings for a vehicle

use std::io::Write;
use std::path::PathBuf;

use catalog::{CatalogItem, CatalogQuery, ItemKind, Offering};
use clap::{Parser, Subcommand};
use common::OrderId;
use domain::Order;
use order_store::Storage;
use serde::Serialize;

use crate::{Result, Storefront};

/// Storefront for automotive parts, services and stores
#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use JSON output format
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the order history [default: $STOREFRONT_DATA_DIR or .storefront]
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all products
    Products,

    /// List all services
    Services,

    /// List all stores
    Stores,

    /// Search the catalog
    Explore {
        /// Collection to search: product, service or store
        #[arg(long, default_value = "product")]
        kind: ItemKind,

        /// Category (or store specialty) to filter by
        #[arg(long)]
        category: Option<String>,

        /// Text matched against name, location and seller
        #[arg(long, short)]
        query: Option<String>,
    },

    /// Show a store and the products and services it sells
    Store {
        /// Store identifier
        id: String,
    },

    /// Buy a product for in-store pickup
    Buy {
        /// Product identifier
        product_id: String,
    },

    /// Book a service
    Book {
        /// Service identifier
        service_id: String,
    },

    /// List orders, most recent first
    Orders,

    /// Show the confirmation for an order
    Order {
        /// Order identifier
        id: String,
    },

    /// Recommend products and services for a vehicle
    Recommend {
        /// Vehicle make, model and year
        vehicle: String,

        /// Free-text description of past purchases
        #[arg(long, default_value = "")]
        past_purchases: String,
    },
}

/// Runs one command against the storefront, writing its output to `out`.
pub fn run<S: Storage, W: Write>(
    command: Command,
    app: &Storefront<S>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let output = Output { json };

    match command {
        Command::Products => {
            let items = app.catalog().items(ItemKind::Product);
            output.items(out, &items)
        }
        Command::Services => {
            let items = app.catalog().items(ItemKind::Service);
            output.items(out, &items)
        }
        Command::Stores => {
            let items = app.catalog().items(ItemKind::Store);
            output.items(out, &items)
        }
        Command::Explore {
            kind,
            category,
            query,
        } => {
            let mut search = CatalogQuery::for_kind(kind);
            search.category = category;
            search.text = query;
            let items = app.explore(&search);
            if items.is_empty() && !json {
                writeln!(out, "No {kind}s match.")?;
                return Ok(());
            }
            output.items(out, &items)
        }
        Command::Store { id } => {
            let details = app.store_details(&id)?;
            if json {
                return output.write_json(out, &details);
            }
            let store = details.store;
            writeln!(out, "{} ({:.1})", store.name, store.rating)?;
            writeln!(out, "{}", store.address)?;
            writeln!(out, "{}", store.phone)?;
            writeln!(out, "{}", store.description)?;
            writeln!(out)?;
            output.offerings(out, &details.offerings)
        }
        Command::Buy { product_id } => {
            let order = app.buy_product(&product_id)?;
            output.confirmation(out, &order)
        }
        Command::Book { service_id } => {
            let order = app.book_service(&service_id)?;
            output.confirmation(out, &order)
        }
        Command::Orders => {
            let orders = app.orders();
            if json {
                return output.write_json(out, &orders);
            }
            if orders.is_empty() {
                writeln!(out, "No orders yet.")?;
            }
            for order in &orders {
                writeln!(
                    out,
                    "{}  {}  {:<14}  {}  {}  {}",
                    order.id(),
                    order.confirmation_code(),
                    order.status().as_str(),
                    order.date().format("%Y-%m-%d %H:%M"),
                    order.item_price(),
                    order.item_name(),
                )?;
            }
            Ok(())
        }
        Command::Order { id } => {
            let order = app.order_confirmation(&OrderId::new(id))?;
            output.confirmation(out, &order)
        }
        Command::Recommend {
            vehicle,
            past_purchases,
        } => {
            let picks = app.recommend(vehicle.trim(), &past_purchases)?;
            output.offerings(out, &picks)
        }
    }
}

struct Output {
    json: bool,
}

impl Output {
    fn write_json<W: Write, T: Serialize + ?Sized>(&self, out: &mut W, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
        Ok(())
    }

    fn items<W: Write>(&self, out: &mut W, items: &[CatalogItem]) -> Result<()> {
        if self.json {
            return self.write_json(out, items);
        }
        for item in items {
            match item.as_offering() {
                Some(offering) => writeln!(out, "{}", offering_line(&offering))?,
                None => writeln!(
                    out,
                    "{:<4} {:<28} {:.1}  {}",
                    item.id(),
                    item.name(),
                    item.rating(),
                    item.location(),
                )?,
            }
        }
        Ok(())
    }

    fn offerings<W: Write>(&self, out: &mut W, offerings: &[Offering]) -> Result<()> {
        if self.json {
            return self.write_json(out, offerings);
        }
        for offering in offerings {
            writeln!(out, "{}", offering_line(offering))?;
        }
        Ok(())
    }

    fn confirmation<W: Write>(&self, out: &mut W, order: &Order) -> Result<()> {
        if self.json {
            return self.write_json(out, order);
        }
        writeln!(out, "Order {}", order.id())?;
        writeln!(out, "Confirmation code: {}", order.confirmation_code())?;
        writeln!(out, "Status: {}", order.status())?;
        writeln!(
            out,
            "{} ({}) - {}",
            order.item_name(),
            order.item_type(),
            order.item_price()
        )?;
        writeln!(
            out,
            "Pick up at {}, {}",
            order.store_name(),
            order.store_location()
        )?;
        writeln!(out, "Placed {}", order.date().to_rfc3339())?;
        Ok(())
    }
}

fn offering_line(offering: &Offering) -> String {
    format!(
        "{:<4} {:<28} {:<14} {:>10}  {}, {}",
        offering.id(),
        offering.name(),
        offering.category(),
        offering.price().to_string(),
        offering.seller_name(),
        offering.location(),
    )
}
