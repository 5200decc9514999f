use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use webflow_client::{ClientOptions, WebflowClient};

#[derive(Debug, Parser)]
#[command(
    name = "webflow-cli",
    version,
    about = "Small CLI for reading Webflow CMS content"
)]
struct Cli {
    /// API token sent as a bearer credential.
    #[arg(long, env = "WEBFLOW_API_TOKEN", hide_env_values = true)]
    token: String,

    /// Base URL for the API. Defaults to the public Webflow host.
    #[arg(long, env = "WEBFLOW_BASE_URL")]
    base_url: Option<String>,

    /// Items per page for `items`.
    #[arg(long)]
    page_size: Option<u32>,

    /// Per-request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Emit compact JSON instead of pretty-printed output.
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List sites available to the token.
    Sites,
    /// Show one site.
    Site {
        site_id: String,
    },
    /// List the collections of a site.
    Collections {
        site_id: String,
    },
    /// Show one collection with its field schema.
    Collection {
        collection_id: String,
    },
    /// Fetch one page of collection items.
    Items {
        collection_id: String,

        /// Zero-based page index.
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
}

/// Entry point for the CLI.
///
/// Builds a client from flags and environment, runs one subcommand and prints
/// its JSON result.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let options = ClientOptions {
        base_url: cli.base_url.clone(),
        timeout: cli.timeout_secs.map(Duration::from_secs),
        page_size: cli.page_size,
    };
    let client =
        WebflowClient::with_options(&cli.token, options).context("failed to create client")?;

    let output = match &cli.command {
        Command::Sites => to_json(&client.sites().context("failed to list sites")?)?,
        Command::Site { site_id } => to_json(
            &client
                .site(site_id)
                .with_context(|| format!("failed to fetch site '{site_id}'"))?,
        )?,
        Command::Collections { site_id } => to_json(
            &client
                .collections(site_id)
                .with_context(|| format!("failed to list collections of site '{site_id}'"))?,
        )?,
        Command::Collection { collection_id } => to_json(
            &client
                .collection(collection_id)
                .with_context(|| format!("failed to fetch collection '{collection_id}'"))?,
        )?,
        Command::Items {
            collection_id,
            page,
        } => {
            let items = client
                .paginate_items::<Value>(collection_id, *page)
                .with_context(|| {
                    format!("failed to fetch page {page} of collection '{collection_id}'")
                })?;
            let has_next_page = items.has_next_page();
            let mut value = to_json(&items)?;
            if let Value::Object(map) = &mut value {
                map.insert("hasNextPage".to_owned(), Value::Bool(has_next_page));
            }
            value
        }
    };

    print_json(&output, cli.compact).context("failed to print JSON output")?;
    Ok(())
}

/// Sends logs to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn to_json(value: &impl Serialize) -> Result<Value> {
    serde_json::to_value(value).context("failed to convert response to JSON")
}

/// Prints a JSON value either compact or pretty-formatted.
fn print_json(value: &Value, compact: bool) -> Result<()> {
    if compact {
        println!(
            "{}",
            serde_json::to_string(value).context("Failed to render JSON")?
        );
    } else {
        println!(
            "{}",
            serde_json::to_string_pretty(value).context("Failed to render JSON")?
        );
    }
    Ok(())
}
