//! `inventory-cli`: terminal front end for the Smart Inventory server.
//!
//! # Usage
//!
//! ```bash
//! # Render the product table
//! inventory-cli list
//!
//! # Delete product 7 (asks for confirmation, then prints the refreshed table)
//! inventory-cli delete 7
//!
//! # Products expiring soon in one category
//! inventory-cli expiring --category Dairy
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;
    use std::time::Duration;

    use anyhow::{Context, Result, bail};
    use clap::{Parser, Subcommand};

    use smart_inventory_client::api::{HttpProductApi, ProductApi};
    use smart_inventory_client::config::ClientConfig;
    use smart_inventory_client::{DeleteStatus, HtmlBuffer, ProductListView, TerminalPrompt};
    use smart_inventory_products::{NewProduct, Product, ProductId};

    #[derive(Parser)]
    #[command(name = "inventory-cli")]
    #[command(author, version, about = "Smart Inventory client")]
    struct Cli {
        /// Server root URL [default: $INVENTORY_API_URL or http://localhost:8080]
        #[arg(long, global = true)]
        api_url: Option<String>,

        /// Request timeout in seconds [default: $INVENTORY_API_TIMEOUT_SECS or 10]
        #[arg(long, global = true)]
        timeout: Option<u64>,

        #[command(subcommand)]
        command: Commands,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// Render the product table
        List {
            /// Write the table to a file instead of stdout
            #[arg(short, long)]
            out: Option<PathBuf>,
        },
        /// Delete one product, then show the refreshed table
        Delete {
            id: ProductId,

            /// Skip the confirmation question
            #[arg(short, long)]
            yes: bool,
        },
        /// Add a product
        Add {
            #[arg(short, long)]
            name: String,

            /// Left to the server when omitted
            #[arg(short, long)]
            category: Option<String>,

            #[arg(short, long)]
            quantity: i64,

            #[arg(short, long)]
            price: f64,

            /// yyyy-mm-dd
            #[arg(long)]
            manufacture_date: String,

            /// yyyy-mm-dd
            #[arg(long)]
            expiry_date: String,

            #[arg(short, long, default_value = "")]
            supplier: String,
        },
        /// List products expiring within the server's alert window
        Expiring {
            /// Category filter ("All" for every category)
            #[arg(short, long)]
            category: Option<String>,
        },
        /// Show quantity and value totals per category
        Dashboard,
        /// Ask the server to write its inventory report
        Report,
    }

    pub async fn run() -> Result<()> {
        smart_inventory_observability::init();

        let cli = Cli::parse();
        let base = ClientConfig::from_env().context("invalid API URL in environment")?;
        let config = resolve_config(base, cli.api_url.as_deref(), cli.timeout)?;
        let api = HttpProductApi::new(&config).context("failed to build HTTP client")?;

        tracing::info!(api_url = %config.api_url, "client configured");

        match cli.command {
            Commands::List { out } => list(api, out).await,
            Commands::Delete { id, yes } => delete(api, id, yes).await,
            Commands::Add {
                name,
                category,
                quantity,
                price,
                manufacture_date,
                expiry_date,
                supplier,
            } => {
                let product = NewProduct {
                    product_name: name,
                    category,
                    quantity,
                    price,
                    manufacture_date,
                    expiry_date,
                    supplier,
                };
                add(&api, &product).await
            }
            Commands::Expiring { category } => expiring(&api, category.as_deref()).await,
            Commands::Dashboard => dashboard(&api).await,
            Commands::Report => report(&api).await,
        }
    }

    /// Command-line flags win over the environment-derived `base`.
    fn resolve_config(
        base: ClientConfig,
        api_url: Option<&str>,
        timeout: Option<u64>,
    ) -> Result<ClientConfig> {
        let mut config = match api_url {
            Some(url) => ClientConfig::new(url)
                .with_context(|| format!("invalid API URL {url}"))?
                .with_timeout(base.timeout),
            None => base,
        };
        if let Some(secs) = timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    async fn list(api: HttpProductApi, out: Option<PathBuf>) -> Result<()> {
        let mut view = ProductListView::new(api, HtmlBuffer::new(), TerminalPrompt::stdio(false));
        view.load_products().await.context("failed to load products")?;

        let html = view.container().as_str();
        match out {
            Some(path) => std::fs::write(&path, html)
                .with_context(|| format!("failed to write {}", path.display()))?,
            None => println!("{html}"),
        }
        Ok(())
    }

    async fn delete(api: HttpProductApi, id: ProductId, yes: bool) -> Result<()> {
        let mut view = ProductListView::new(api, HtmlBuffer::new(), TerminalPrompt::stdio(yes));

        match view.delete_product(id).await.with_context(|| format!("failed to delete product {id}"))? {
            DeleteStatus::Deleted => println!("{}", view.container().as_str()),
            DeleteStatus::Cancelled => {}
            DeleteStatus::Rejected(message) => bail!("server refused to delete product {id}: {message}"),
        }
        Ok(())
    }

    async fn add(api: &HttpProductApi, product: &NewProduct) -> Result<()> {
        let response = api.add_product(product).await.context("failed to add product")?;
        match response.into_result() {
            Ok(Some(category)) => println!("Product added (category: {category})"),
            Ok(None) => println!("Product added"),
            Err(message) => bail!("server refused to add product: {message}"),
        }
        Ok(())
    }

    async fn expiring(api: &HttpProductApi, category: Option<&str>) -> Result<()> {
        let products = api
            .expiry_alerts(category)
            .await
            .context("failed to fetch expiry alerts")?;

        if products.is_empty() {
            println!("No products expiring soon");
        }
        for product in &products {
            println!("{}", expiry_line(product));
        }
        Ok(())
    }

    async fn dashboard(api: &HttpProductApi) -> Result<()> {
        let summaries = api.dashboard().await.context("failed to fetch dashboard data")?;

        println!("{:<20} | {:>8} | {:>12}", "Category", "Quantity", "Value");
        for summary in &summaries {
            println!(
                "{:<20} | {:>8} | {:>12.2}",
                summary.category, summary.quantity, summary.value
            );
        }
        Ok(())
    }

    async fn report(api: &HttpProductApi) -> Result<()> {
        let response = api.generate_report().await.context("failed to request report")?;
        match response.into_result() {
            Ok(message) => println!("{message}"),
            Err(message) => bail!("report generation failed: {message}"),
        }
        Ok(())
    }

    pub(crate) fn expiry_line(product: &Product) -> String {
        format!(
            "{:<20} | {:<10} | Qty: {:<5} | Exp: {}",
            product.name, product.category, product.quantity, product.expiry_date
        )
    }

}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    cli::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
