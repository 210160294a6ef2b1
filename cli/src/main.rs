//! Qrglyph CLI - Styled QR code rendering.

mod commands;
mod ui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use qrglyph_core::OutputFormat;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrglyph")]
#[command(about = "Render stylable QR codes as vector graphics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one payload to a file
    Render {
        /// Text to encode
        payload: String,
        /// Style configuration JSON file
        #[arg(short, long)]
        style: Option<PathBuf>,
        /// SVG logo to embed at the center
        #[arg(short, long)]
        logo: Option<String>,
        /// Output format
        #[arg(short, long, default_value = "svg")]
        format: OutputFormat,
        /// Output path; defaults to qr.<ext>
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Raster output size in pixels
        #[arg(long, default_value_t = 1024)]
        size: u32,
        /// JPEG quality (1-100)
        #[arg(long, default_value_t = 90)]
        quality: u8,
        /// Print a terminal preview of the raw symbol
        #[arg(long)]
        preview: bool,
    },
    /// Render a batch list into a zip archive
    Batch {
        /// JSON file with an array of {"payload", "name"} objects
        list: PathBuf,
        /// Output formats to include, repeatable
        #[arg(short, long, required = true)]
        format: Vec<OutputFormat>,
        /// Style configuration JSON file
        #[arg(short, long)]
        style: Option<PathBuf>,
        /// SVG logo to embed at the center
        #[arg(short, long)]
        logo: Option<String>,
        /// Output archive path
        #[arg(short, long, default_value = "qr-bundle.zip")]
        out: PathBuf,
        /// Raster output size in pixels
        #[arg(long, default_value_t = 1024)]
        size: u32,
        /// JPEG quality (1-100)
        #[arg(long, default_value_t = 90)]
        quality: u8,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("qrglyph=info".parse()?)
                .add_directive("qrglyph_core=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            payload,
            style,
            logo,
            format,
            out,
            size,
            quality,
            preview,
        } => {
            commands::render(
                payload,
                style,
                logo,
                format,
                out,
                size,
                quality,
                preview,
            )
            .await?
        }
        Commands::Batch {
            list,
            format,
            style,
            logo,
            out,
            size,
            quality,
        } => commands::batch(list, format, style, logo, out, size, quality).await?,
    }

    Ok(())
}
