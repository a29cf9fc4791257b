use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use catalog_repository::opensearch::DEFAULT_INDEX_NAME;
use catalog_repository::{IndexConfig, OpenSearchClient};
use catalog_seed::dataset::DEFAULT_DATASET_FILE;
use catalog_seed::generators::{DEFAULT_PRODUCT_COUNT, DEFAULT_STORE_COUNT};
use catalog_seed::loaders::DEFAULT_BATCH_SIZE;
use catalog_seed::{read_dataset, write_dataset, BulkLoader, CatalogGenerator};

#[derive(Parser)]
#[command(name = "catalog-seed")]
#[command(about = "Generate sample catalog data and bulk-load it into the search index", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sample catalog file
    Generate {
        /// Number of products (SKUs) to generate
        #[arg(long, default_value_t = DEFAULT_PRODUCT_COUNT)]
        count: usize,

        /// Number of stores every product is listed in
        #[arg(long, default_value_t = DEFAULT_STORE_COUNT)]
        stores: usize,

        /// Output file
        #[arg(long, default_value = DEFAULT_DATASET_FILE)]
        output: PathBuf,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Bulk-load a catalog file into the search index
    Upload {
        /// Input file
        #[arg(long, default_value = DEFAULT_DATASET_FILE)]
        input: PathBuf,

        /// OpenSearch URL
        #[arg(long, env = "OPENSEARCH_URL", default_value = "http://localhost:9200")]
        opensearch_url: String,

        /// Index name
        #[arg(long, env = "CATALOG_INDEX", default_value = DEFAULT_INDEX_NAME)]
        index: String,

        /// Products per bulk request
        #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: usize,
    },
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            count,
            stores,
            output,
            seed,
        } => generate(count, stores, &output, seed),
        Commands::Upload {
            input,
            opensearch_url,
            index,
            batch_size,
        } => upload(&input, &opensearch_url, &index, batch_size).await,
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        for cause in e.chain().skip(1) {
            error!("  Caused by: {}", cause);
        }
        std::process::exit(1);
    }
}

fn generate(count: usize, stores: usize, output: &Path, seed: Option<u64>) -> Result<()> {
    let mut generator = CatalogGenerator::new(stores, seed);
    let products = generator.generate(count);

    write_dataset(output, &products)
        .with_context(|| format!("Failed to write sample data to {}", output.display()))?;

    info!(
        "Sample data for {} SKUs across {} stores has been saved to {}",
        count,
        stores,
        output.display()
    );
    Ok(())
}

async fn upload(input: &Path, opensearch_url: &str, index: &str, batch_size: usize) -> Result<()> {
    let products = read_dataset(input)
        .with_context(|| format!("Failed to read sample data from {}", input.display()))?;
    info!(count = products.len(), input = %input.display(), "Loaded sample data");

    let client = OpenSearchClient::new(opensearch_url, IndexConfig::new(index))
        .await
        .with_context(|| format!("Invalid OpenSearch URL: {}", opensearch_url))?;

    let loader = BulkLoader::with_batch_size(Arc::new(client), batch_size);
    let summary = loader
        .load(&products)
        .await
        .context("Bulk upload failed")?;

    if !summary.is_success() {
        for reason in summary.errors.iter().take(5) {
            warn!(reason = %reason, "Item rejected");
        }
        bail!(
            "Some errors occurred during bulk upload: {} of {} products failed",
            summary.failed,
            summary.total
        );
    }

    info!(indexed = summary.succeeded, "Bulk upload completed successfully");
    Ok(())
}
