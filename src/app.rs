use crate::cli::Cli;
use anyhow::{anyhow, Context};
use clap::Parser;
use devto_publish::error::{PublishError, TransportError};
use devto_publish::transport::{HttpTransport, Transport};
use devto_publish::{frontmatter, metadata, payload, PublishOptions, RemovalSet};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

const API_KEY_ENV: &str = "DEVTO_API_KEY";

/// Why a run stopped, and therefore which exit code it reports.
#[derive(Debug)]
enum Failure {
    /// Missing input or key, unreadable file, or a document that cannot be assembled.
    Input(anyhow::Error),
    /// The API could not be reached or rejected the request.
    Transport {
        error: TransportError,
        payload: String,
    },
}

impl Failure {
    fn exit_code(&self) -> u8 {
        match self {
            Failure::Input(_) => 1,
            Failure::Transport { .. } => 2,
        }
    }

    fn report(&self) {
        match self {
            Failure::Input(err) => eprintln!("Error: {err:#}"),
            Failure::Transport { error, payload } => {
                eprintln!("API error: {error}");
                eprintln!("Request payload:");
                eprintln!("{payload}");
            }
        }
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Failure::Input(err)
    }
}

impl From<PublishError> for Failure {
    fn from(err: PublishError) -> Self {
        Failure::Input(err.into())
    }
}

impl From<io::Error> for Failure {
    fn from(err: io::Error) -> Self {
        Failure::Input(err.into())
    }
}

pub fn run() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match execute(cli, &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            failure.report();
            ExitCode::from(failure.exit_code())
        }
    }
}

fn execute(cli: Cli, out: &mut impl Write) -> Result<(), Failure> {
    let Cli {
        file,
        api_key,
        publish,
        minimal,
        remove_headers,
        dry_run,
        endpoint,
        show_metadata,
    } = cli;

    let file = file.ok_or_else(|| anyhow!("No input file provided. Pass --file <FILE_PATH>."))?;

    let api_key = resolve_api_key(api_key);
    if api_key.is_none() && !dry_run {
        return Err(anyhow!(
            "DEVTO_API_KEY not provided. Set --api-key or DEVTO_API_KEY env var."
        )
        .into());
    }

    let raw = read_input(&file)?;

    let document = frontmatter::split(&raw)?;
    let meta = metadata::interpret(&document.metadata);

    if show_metadata {
        let rendered = serde_json::to_string_pretty(&meta)
            .with_context(|| "Failed to render interpreted metadata")?;
        eprintln!("{rendered}");
    }

    let options = PublishOptions {
        force_publish: publish,
        minimal,
        removals: RemovalSet::parse_csv(&remove_headers),
    };
    let request = payload::assemble(&meta, &document.body, &options)?;
    let json = request.to_json()?;

    let Some(api_key) = api_key.filter(|_| !dry_run) else {
        writeln!(out, "{json}")?;
        return Ok(());
    };

    let transport = HttpTransport::new(endpoint, api_key).map_err(|error| Failure::Transport {
        error,
        payload: json.clone(),
    })?;

    submit_payload(&transport, json, out)
}

/// A blank `--api-key` falls back to `DEVTO_API_KEY` instead of masking it.
fn resolve_api_key(flag: Option<String>) -> Option<String> {
    flag.filter(|key| !key.trim().is_empty()).or_else(|| {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
    })
}

fn submit_payload(
    transport: &dyn Transport,
    json: String,
    out: &mut impl Write,
) -> Result<(), Failure> {
    match transport.submit(&json) {
        Ok(response) => {
            writeln!(out, "{response}")?;
            Ok(())
        }
        Err(error) => Err(Failure::Transport {
            error,
            payload: json,
        }),
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .with_context(|| "Failed to read document from stdin")?;
        return Ok(buf);
    }

    if !path.is_file() {
        return Err(anyhow!("File not found: {}", path.display()));
    }

    fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}
