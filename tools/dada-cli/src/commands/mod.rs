//! CLI command implementations.

pub mod account;
pub mod catalog;
pub mod checkout;
pub mod config;

use clap::{Args, Subcommand};
use dada_auth::Role;
use dada_commerce::checkout::{OrderStatus, ShippingType};
use dada_commerce::search::SortOption;

use checkout::ItemSpec;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: Option<CatalogCommand>,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products.
    List(ListArgs),
    /// Show details for a product.
    Show {
        /// Product ID.
        id: String,
    },
    /// List categories.
    Categories,
}

/// Filters and paging for `catalog list`.
#[derive(Args, Default)]
pub struct ListArgs {
    /// Only products in this category.
    #[arg(long)]
    pub category: Option<String>,

    /// Only discounted products.
    #[arg(long)]
    pub on_sale: bool,

    /// Only products in stock.
    #[arg(long)]
    pub in_stock: bool,

    /// Match product names in either language.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order (featured, price_asc, price_desc, name_asc).
    #[arg(long, default_value = "featured")]
    pub sort: SortOption,

    /// Page number (1-indexed).
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Products per page.
    #[arg(long, default_value = "24")]
    pub per_page: i64,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Item to order as `product[:flavor[:size]]`; repeat for more.
    #[arg(short, long = "item", required = true)]
    pub items: Vec<ItemSpec>,

    /// Customer full name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Customer phone number.
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Wilaya code, e.g. 16.
    #[arg(long, default_value = "")]
    pub wilaya: String,

    /// Commune name.
    #[arg(long, default_value = "")]
    pub commune: String,

    /// Delivery type (home or office).
    #[arg(long, default_value = "home")]
    pub shipping: ShippingType,

    /// Move the placed order to this status.
    #[arg(long)]
    pub status: Option<OrderStatus>,
}

/// Arguments for the account command.
#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Subcommand)]
pub enum AccountCommand {
    /// Register a new account.
    Signup {
        /// Full name.
        #[arg(long)]
        name: String,
        /// Username.
        #[arg(long)]
        username: String,
        /// Email address.
        #[arg(long)]
        email: String,
        /// Password (at least 4 characters).
        #[arg(long)]
        password: String,
    },
    /// Sign in by username or email.
    Login {
        /// Username or email.
        user: String,
        /// Password.
        #[arg(short, long)]
        password: String,
    },
    /// Sign out.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Manage users (admin only).
    Users {
        #[command(subcommand)]
        command: Option<UsersCommand>,
    },
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List users.
    List,
    /// Change a user's role.
    SetRole {
        /// User ID.
        id: String,
        /// New role (user or admin).
        role: Role,
    },
    /// Delete a user.
    Delete {
        /// User ID.
        id: String,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
