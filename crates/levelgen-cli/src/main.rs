//! `gen-levels-json` -- write the tile compiler manifest for a level directory.
//!
//! ```text
//! gen-levels-json <input-dir> <output-dir> <json-file>
//! ```
//!
//! Silent on success. Set `RUST_LOG=info` (or `debug`) to see what was
//! written.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use levelgen_manifest::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "gen-levels-json")]
#[command(about = "Generate the image-to-tile manifest for a directory of numbered level PNGs")]
#[command(version)]
struct Cli {
    /// Directory containing `<id>.png` level images and `pix-to-tile.png`.
    #[arg(value_name = "INPUT_DIR")]
    input_dir: String,

    /// Directory prefix for the generated `<id>.c` files.
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: String,

    /// Manifest file to create or overwrite.
    #[arg(value_name = "JSON_FILE")]
    json_file: String,

    /// Order of levels in the manifest.
    #[arg(long, value_enum, default_value_t = Order::Numeric)]
    order: Order,

    /// Write indented JSON instead of one level per line.
    #[arg(long)]
    pretty: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Order {
    /// Sort levels by numeric id.
    Numeric,
    /// Keep the order the filesystem lists files in.
    Listing,
}

impl From<Order> for EntryOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Numeric => EntryOrder::Numeric,
            Order::Listing => EntryOrder::Listing,
        }
    }
}

impl Cli {
    fn generator_config(&self) -> GeneratorConfig {
        let mut config =
            GeneratorConfig::new(&*self.input_dir, &*self.output_dir, &self.json_file);
        config.order = self.order.into();
        if self.pretty {
            config.layout = ManifestLayout::Pretty;
        }
        config
    }
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    let config = cli.generator_config();
    ManifestGenerator::new(config)
        .run()
        .with_context(|| format!("generating level manifest '{}'", cli.json_file))?;

    Ok(())
}
