//! CLI for MRI Guard image validation.
//!
//! Reads an image file, encodes it as a base64 data URL, asks the vision
//! provider whether it is a brain MRI, and prints the verdict as JSON.
//!
//! Exit codes: 0 when the image is accepted, 1 when rejected (including
//! service and transport failures, which always reject), 2 on usage or
//! configuration errors.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mriguard_core::ValidationResult;
use mriguard_runtime::{CompletionConfig, MistralProvider, MriValidator};

#[derive(Parser)]
#[command(name = "mriguard", about = "Validate that an image is a brain MRI scan", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate an image file against the vision provider
    Validate {
        /// Path to the image file
        image: PathBuf,

        /// Override the multimodal model identifier
        #[arg(long)]
        model: Option<String>,

        /// Override the chat completion endpoint URL
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(result) => {
            if result.is_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<ValidationResult> {
    match cli.command {
        Command::Validate {
            image,
            model,
            endpoint,
        } => {
            let payload = encode_image(&image)?;
            tracing::debug!(path = %image.display(), "validating image");

            let mut provider =
                MistralProvider::from_env().context("failed to configure Mistral provider")?;
            if let Some(model) = model {
                provider = provider.with_config(CompletionConfig::with_model(model));
            }
            if let Some(endpoint) = endpoint {
                provider = provider.with_endpoint(endpoint);
            }

            let validator = MriValidator::new(Arc::new(provider));
            let result = validator.validate(&payload).await;

            println!(
                "{}",
                serde_json::to_string_pretty(&result).context("failed to serialize result")?
            );
            Ok(result)
        }
    }
}

/// Read an image file and encode it as a base64 data URL.
fn encode_image(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read image file '{}'", path.display()))?;
    Ok(format!("data:{};base64,{}", mime_for(path), STANDARD.encode(bytes)))
}

/// Guess the media type from the file extension.
fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        // MRI exports in practice are PNG; use it as the fallback too.
        _ => "image/png",
    }
}
