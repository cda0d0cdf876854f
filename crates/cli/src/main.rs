//! Layer tree CLI - inspect how values enter the layer tree.
//!
//! Runs image payloads, data URIs and rectangles through the value model
//! and prints what comes out as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use layer_tree::{Image, ImageFormat, Rect};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Layer tree CLI - inspect layer tree values
#[derive(Parser)]
#[command(name = "layer-tree")]
#[command(about = "Inspect layer tree values produced from SVG input")]
struct Cli {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an image from an encoded file
    Image {
        /// Format identifier, e.g. image/png
        #[arg(short, long)]
        mime: String,
        /// File holding the encoded payload
        path: PathBuf,
    },

    /// Build an image from a base64 data URI
    DataUri {
        /// The URI, e.g. data:image/png;base64,...
        uri: String,
    },

    /// Show a rectangle with its derived edges
    #[command(allow_negative_numbers = true)]
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// Summary of an accepted image. The payload itself is not echoed.
#[derive(Debug, PartialEq, Serialize)]
struct ImageReport {
    format: ImageFormat,
    mime_type: &'static str,
    extension: &'static str,
    len: usize,
}

impl From<&Image> for ImageReport {
    fn from(image: &Image) -> Self {
        let format = image.format();
        Self {
            format,
            mime_type: format.mime_type(),
            extension: format.extension(),
            len: image.data().len(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
struct RectReport {
    #[serde(flatten)]
    rect: Rect,
    max_x: f32,
    max_y: f32,
}

impl From<Rect> for RectReport {
    fn from(rect: Rect) -> Self {
        Self {
            rect,
            max_x: rect.max_x(),
            max_y: rect.max_y(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Image { mime, path } => serde_json::to_value(inspect_file(&mime, &path)?)?,
        Commands::DataUri { uri } => serde_json::to_value(inspect_data_uri(&uri)?)?,
        Commands::Rect {
            x,
            y,
            width,
            height,
        } => serde_json::to_value(RectReport::from(Rect::new(x, y, width, height)))?,
    };

    if cli.pretty {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output);
    }
    Ok(())
}

/// Read a file and run it through the image constructor.
fn inspect_file(mime: &str, path: &Path) -> Result<ImageReport> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    log::debug!("read {} bytes from {}", data.len(), path.display());

    let image = Image::try_new(mime, data)
        .with_context(|| format!("{} is not a usable image", path.display()))?;
    Ok(ImageReport::from(&image))
}

fn inspect_data_uri(uri: &str) -> Result<ImageReport> {
    let image = Image::from_data_uri(uri).ok_or_else(|| {
        anyhow::anyhow!(
            "Not a base64 data URI for a PNG or JPEG payload (RUST_LOG=debug for details)"
        )
    })?;
    Ok(ImageReport::from(&image))
}
