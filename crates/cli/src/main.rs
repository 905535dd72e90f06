//! OCM CLI - catalog setup tools for the commerce platform.
//!
//! # Usage
//!
//! ```bash
//! # Materialize the bundled women's category hierarchy
//! ocm-cli categories create
//!
//! # Materialize a hierarchy from a YAML file
//! ocm-cli categories create --file categories.yaml
//!
//! # Create the apparel product type schema
//! ocm-cli product-types shirt
//!
//! # Seed the sample catalog
//! ocm-cli products seed --product-type-id 3e3f5ac3-6cb4-4b93-a259-82422706df61
//!
//! # Look up a published product by SKU
//! ocm-cli products sku women-tops-001-s-red
//! ```
//!
//! # Commands
//!
//! - `categories` - Create category trees, look up categories
//! - `product-types` - Create material and shirt product types
//! - `products` - Create test products, seed the catalog, queries
//!
//! Credentials come from `CTP_*` environment variables or a `.env` file.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ocm-cli")]
#[command(author, version, about = "OCM catalog CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create and inspect categories
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Create product types
    ProductTypes {
        #[command(subcommand)]
        action: ProductTypeAction,
    },
    /// Create and query products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// Materialize a category hierarchy (parents before children)
    Create {
        /// YAML file with a list of root categories (default: bundled women's tree)
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Create the development test category
    CreateTest,
    /// List categories
    List,
    /// Show one category
    Get {
        /// Category key
        #[arg(short, long, conflicts_with = "id", required_unless_present = "id")]
        key: Option<String>,

        /// Category ID
        #[arg(short, long)]
        id: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProductTypeAction {
    /// Create the outer fabric, lining, and filling material types
    Materials,
    /// Create the benefits and material types plus the shirt product type
    Shirt,
}

#[derive(Subcommand)]
enum ProductAction {
    /// Seed sample products into the women's categories
    Seed {
        /// Product type for the created products
        #[arg(short, long)]
        product_type_id: String,

        /// YAML file with product templates (default: bundled sample catalog)
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Create the development test product
    CreateTest {
        /// Product type for the created product
        #[arg(short, long)]
        product_type_id: String,

        /// Style code (product key)
        #[arg(short, long, default_value = "test-shirt")]
        style_code: String,

        /// Product name
        #[arg(short, long, default_value = "Test shirt")]
        name: String,

        /// Brand attribute
        #[arg(short, long, default_value = "Test Brand")]
        brand: String,
    },
    /// Find a published product by variant SKU
    Sku {
        /// Variant SKU
        sku: String,
    },
    /// Get a published product by style code
    Style {
        /// Style code (product key)
        style_code: String,
    },
    /// List published products
    Published,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ocm_cli=info,ocm_catalog_admin=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Categories { action } => match action {
            CategoryAction::Create { file } => {
                commands::categories::create(file.as_deref()).await?;
            }
            CategoryAction::CreateTest => commands::categories::create_test().await?,
            CategoryAction::List => commands::categories::list().await?,
            CategoryAction::Get { key, id } => {
                commands::categories::get(key.as_deref(), id.as_deref()).await?;
            }
        },
        Commands::ProductTypes { action } => match action {
            ProductTypeAction::Materials => commands::product_types::materials().await?,
            ProductTypeAction::Shirt => commands::product_types::shirt().await?,
        },
        Commands::Products { action } => match action {
            ProductAction::Seed {
                product_type_id,
                file,
            } => commands::products::seed(&product_type_id, file.as_deref()).await?,
            ProductAction::CreateTest {
                product_type_id,
                style_code,
                name,
                brand,
            } => {
                commands::products::create_test(&product_type_id, &style_code, &name, &brand)
                    .await?;
            }
            ProductAction::Sku { sku } => commands::products::by_sku(&sku).await?,
            ProductAction::Style { style_code } => {
                commands::products::by_style(&style_code).await?;
            }
            ProductAction::Published => commands::products::published().await?,
        },
    }
    Ok(())
}
