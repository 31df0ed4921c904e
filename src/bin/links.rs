//! Command-line companion for gallery-links.
//!
//! Resolves gallery URLs without running the HTTP service and applies the
//! formatter to link lists read from stdin or a file.
//!
//! # Usage
//!
//! ```bash
//! # Inspect how a URL is classified
//! cargo run --bin links -- classify https://imgur.com/a/drawing-strangers-AGCGQ
//!
//! # Resolve a gallery (needs IMGUR_CLIENT_ID)
//! cargo run --bin links -- resolve https://imgur.com/a/AGCGQ --format bbcode
//!
//! # Reformat, toggle, shuffle or preview a saved list
//! cargo run --bin links -- format --to markdown --input links.txt
//! pbpaste | cargo run --bin links -- toggle
//! ```
//!
//! # Environment Variables
//!
//! - `IMGUR_CLIENT_ID` (required for `resolve`)
//! - `IMGUR_API_BASE`, `UPSTREAM_TIMEOUT_SECONDS`, `UPSTREAM_CONNECT_TIMEOUT_SECONDS` (optional)

use gallery_links::application::services::ResolverService;
use gallery_links::config::Config;
use gallery_links::domain::ResolveError;
use gallery_links::domain::entities::MediaKind;
use gallery_links::infrastructure::ImgurClient;
use gallery_links::utils::formatter::{self, TargetFormat};
use gallery_links::utils::link_classifier::classify;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

/// Resolve imgur galleries and reshape link lists.
#[derive(Parser)]
#[command(name = "links")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resource id and kind a URL classifies as
    Classify {
        /// Gallery or image URL
        url: String,
    },

    /// Resolve a gallery URL into direct links
    Resolve {
        /// Gallery or image URL
        url: String,

        /// Output convention (default: plain)
        #[arg(short, long, value_enum)]
        format: Option<TargetFormat>,
    },

    /// Remove [IMG], <img> and Markdown markup, leaving bare URLs
    Strip(InputArgs),

    /// Wrap every line in [IMG] tags, or unwrap lines already wrapped
    Toggle(InputArgs),

    /// Shuffle the lines
    Shuffle(InputArgs),

    /// Convert every URL to another convention
    Format {
        /// Target convention
        #[arg(short, long, value_enum)]
        to: TargetFormat,

        #[command(flatten)]
        input: InputArgs,
    },

    /// List URLs tagged as image or video
    Preview(InputArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Read the link list from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { url } => handle_classify(&url),
        Commands::Resolve { url, format } => handle_resolve(&url, format).await?,
        Commands::Strip(input) => println!("{}", formatter::strip_markup(&read_input(&input)?)),
        Commands::Toggle(input) => {
            println!("{}", formatter::toggle_tag_wrap(&read_input(&input)?))
        }
        Commands::Shuffle(input) => println!("{}", formatter::shuffle(&read_input(&input)?)),
        Commands::Format { to, input } => {
            println!("{}", formatter::reformat(&read_input(&input)?, to))
        }
        Commands::Preview(input) => handle_preview(&read_input(&input)?),
    }

    Ok(())
}

/// Reads the link list from `--input` or stdin, dropping one trailing newline.
fn read_input(args: &InputArgs) -> Result<String> {
    let mut text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }

    Ok(text)
}

fn handle_classify(url: &str) {
    match classify(url) {
        Some(link) => {
            println!("{} {}", "Kind:".bold(), link.kind.to_string().cyan());
            println!("{} {}", "Id:  ".bold(), link.resource_id.as_str().green());
        }
        None => println!("{}", "Not a recognized imgur URL".yellow()),
    }
}

/// Resolves `url` against the configured media host and prints the links.
async fn handle_resolve(url: &str, format: Option<TargetFormat>) -> Result<()> {
    let config = Config::from_env()?;
    config.validate()?;

    let client = ImgurClient::from_config(&config).context("Failed to build imgur client")?;
    let resolver = ResolverService::new(Arc::new(client));

    match resolver.resolve(url).await {
        Ok(links) => {
            eprintln!("{}", format!("✓ {} link(s)", links.len()).green());
            let text = links.joined();
            match format {
                Some(target) => println!("{}", formatter::reformat(&text, target)),
                None => println!("{text}"),
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), describe(&e).red());
            anyhow::bail!("resolution failed: {}", e.kind())
        }
    }
}

fn describe(e: &ResolveError) -> String {
    match e {
        ResolveError::InvalidUrl => "Not a recognized imgur gallery or image URL".to_string(),
        ResolveError::UpstreamRateLimited => {
            "imgur is rate limiting requests, try again later".to_string()
        }
        other => other.to_string(),
    }
}

fn handle_preview(text: &str) {
    for item in formatter::parse_media_urls(text) {
        let tag = match item.kind {
            MediaKind::Image => "image".blue(),
            MediaKind::Video => "video".magenta(),
        };
        println!("[{tag}] {}", item.url);
    }
}
