//! Boutique CLI - Command-line view layer for the cart engine.
//!
//! # Usage
//!
//! ```bash
//! # Add an item (price is the display text, parsed leniently)
//! boutique add --name "Shirt" --price "1000 DA" --size M --color Red
//!
//! # Render the cart
//! boutique list
//!
//! # Adjust a line by id (ids are shown by `list`)
//! boutique set-quantity <id> 3
//! boutique increase <id>
//! boutique decrease <id>
//! boutique remove <id>
//!
//! # The navbar badge: empty output when the cart is empty
//! boutique count
//!
//! # Empty the cart
//! boutique clear
//! ```
//!
//! The cart is persisted under `BOUTIQUE_CART_DIR` (default `.boutique`)
//! and survives across invocations, like a browser cart survives reloads.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Printing the rendered cart is this binary's purpose.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use boutique_cart::{CartController, FileStorage, NewLineItem};
use boutique_core::LineItemId;

mod config;
mod render;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "boutique")]
#[command(author, version, about = "Boutique shopping cart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an item to the cart (merges with a matching name/size/color line)
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Price display text, e.g. "1500 DA"
        #[arg(short, long)]
        price: String,

        /// Product image reference
        #[arg(long)]
        image: Option<String>,

        /// Selected size (defaults to "One Size")
        #[arg(short, long)]
        size: Option<String>,

        /// Selected color
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Render the cart contents and total
    List,
    /// Remove a line from the cart
    Remove {
        /// Line item id (shown by `list`)
        id: LineItemId,
    },
    /// Set a line's quantity (clamped to at least 1)
    SetQuantity {
        /// Line item id (shown by `list`)
        id: LineItemId,

        /// New quantity
        quantity: i64,
    },
    /// Raise a line's quantity by one
    Increase {
        /// Line item id (shown by `list`)
        id: LineItemId,
    },
    /// Lower a line's quantity by one (never below 1)
    Decrease {
        /// Line item id (shown by `list`)
        id: LineItemId,
    },
    /// Empty the cart
    Clear,
    /// Print the item count badge (blank when the cart is empty)
    Count,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;
    let storage = FileStorage::new(config.cart_dir);
    let mut cart = CartController::new(storage);

    match cli.command {
        Commands::Add {
            name,
            price,
            image,
            size,
            color,
        } => {
            cart.add_item(NewLineItem::new(name.as_str(), price, image, size, color));
            println!("Added \"{name}\" to cart");
        }
        Commands::List => {
            print!("{}", render::render_cart(cart.items(), &cart.totals()));
        }
        Commands::Remove { id } => {
            cart.remove_item(id);
        }
        Commands::SetQuantity { id, quantity } => {
            cart.set_quantity(id, quantity);
        }
        Commands::Increase { id } => {
            cart.increment(id);
        }
        Commands::Decrease { id } => {
            cart.decrement(id);
        }
        Commands::Clear => {
            cart.clear();
            println!("Cart cleared");
        }
        Commands::Count => {
            let badge = render::render_count(cart.totals().total_items);
            if !badge.is_empty() {
                println!("{badge}");
            }
        }
    }
    Ok(())
}
