//! Blog Reader - terminal front end for a static blog content store
//!
//! Lists the posts in the manifest and prints individual posts. The
//! content store location comes from `BLOG_BASE_URL` or `--base-url`.

mod error;
mod render;

use blog_content_client::{BlogService, ContentStore, HttpContentStore, StoreConfig};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};
use uuid::Uuid;

use crate::error::{ReaderError, Result};
use crate::render::{render_listing, render_metadata, render_post};

/// Log filter used when `RUST_LOG` is unset or unparseable
const DEFAULT_LOG_DIRECTIVES: &str = "blog_reader=info,blog_content_client=warn";

#[derive(Debug, Parser)]
#[command(name = "blog-reader", version, about = "Read posts from a static blog content store")]
struct Cli {
    /// Base address of the content store (overrides BLOG_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every post in the manifest
    List,
    /// Show the metadata of one post
    Show {
        id: Uuid,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one post
    Read { id: Uuid },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for content
    let env_filter = build_env_filter(std::env::var("RUST_LOG").ok().as_deref());

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    };

    let mut config = StoreConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    info!(base_url = %config.base_url, timeout_secs = config.timeout.as_secs(), "Using content store");

    let store = HttpContentStore::from_config(&config)?;
    let blog = BlogService::new(store);

    let output = run(&blog, cli.command).await?;
    print!("{}", output);

    Ok(())
}

/// `RUST_LOG` wins when it parses; otherwise the default directives apply
fn build_env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVES))
}

async fn run<S: ContentStore>(blog: &BlogService<S>, command: Command) -> Result<String> {
    match command {
        Command::List => {
            let entries = blog.list_all_metadata().await?;
            debug!(count = entries.len(), "Listing posts");
            Ok(render_listing(&entries))
        }
        Command::Show { id, json } => {
            let meta = blog
                .get_metadata_by_id(id)
                .await?
                .ok_or(ReaderError::NotFound(id))?;
            if json {
                Ok(format!("{}\n", serde_json::to_string_pretty(&meta)?))
            } else {
                Ok(render_metadata(&meta))
            }
        }
        Command::Read { id } => {
            let post = blog
                .get_post_by_id(id)
                .await
                .ok_or(ReaderError::NotFound(id))?;
            Ok(render_post(&post))
        }
    }
}
