//! Defines the command-line interface for the application.

use clap::Parser;
use devto_publish::transport::DEFAULT_ENDPOINT;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "devto-publish",
    version,
    about = "Publish a Markdown file with a metadata header to DEV.to."
)]
pub struct Cli {
    /// The Markdown file to publish. Use '-' to read from stdin.
    #[arg(short, long, value_name = "FILE_PATH")]
    pub file: Option<PathBuf>,

    /// DEV.to API key. Not needed with --dry-run.
    #[arg(long, env = "DEVTO_API_KEY", hide_env_values = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Publish immediately, overriding `published: false` in the header.
    #[arg(long)]
    pub publish: bool,

    /// Send only the title, published flag and body.
    #[arg(long)]
    pub minimal: bool,

    /// Comma-separated headers to omit: Cover,Tags,Description,CanonicalUrl,Series.
    #[arg(long, value_name = "LABELS", default_value = "")]
    pub remove_headers: String,

    /// Print the JSON payload instead of sending it.
    #[arg(long)]
    pub dry_run: bool,

    /// Article creation endpoint.
    #[arg(long, env = "DEVTO_API_URL", default_value = DEFAULT_ENDPOINT, value_name = "URL")]
    pub endpoint: String,

    /// Print the interpreted header fields as JSON on stderr.
    #[arg(long)]
    pub show_metadata: bool,
}
