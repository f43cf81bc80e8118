use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use tessera_bins::ThresholdStrategy;
use tessera_cli::args::{parse_margin, parse_pair};
use tessera_cli::loader::load_records;
use tessera_cli::report::{HistogramOptions, HistogramReport, Scatter};
use tessera_common::{Dimensions, FieldAccessor, Margin};

/// Tessera CLI for computing histogram bins and Voronoi hit-test cells
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bin a numeric field and print the bins as JSON
    Histogram {
        /// Path to the data file (.csv, .tsv or .json)
        file_path: PathBuf,

        /// Field to bin
        #[arg(short, long)]
        field: String,

        /// Target bin count (defaults to Sturges' formula)
        #[arg(short, long)]
        thresholds: Option<usize>,

        /// Use round bin boundaries that extend the domain
        #[arg(long)]
        nice: bool,

        /// Explicit domain as MIN,MAX (defaults to the data extent)
        #[arg(long, value_parser = parse_pair)]
        domain: Option<(f64, f64)>,
    },

    /// Project two fields into a chart area and print the Voronoi cells as JSON
    Voronoi {
        /// Path to the data file (.csv, .tsv or .json)
        file_path: PathBuf,

        /// Field for the horizontal axis
        #[arg(long)]
        x: String,

        /// Field for the vertical axis
        #[arg(long)]
        y: String,

        /// Chart width in pixels
        #[arg(long, default_value_t = 600.0)]
        width: f64,

        /// Chart height in pixels
        #[arg(long, default_value_t = 600.0)]
        height: f64,

        /// Chart margins in pixels, as M or TOP,RIGHT,BOTTOM,LEFT
        #[arg(long, value_parser = parse_margin, default_value = "50")]
        margin: Margin,

        /// Print only the record under X,Y (pixels within the bounded area)
        #[arg(long, value_parser = parse_pair)]
        locate: Option<(f64, f64)>,
    },
}

fn main() -> Result<()> {
    // Setup logger
    env_logger::init();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Histogram {
            file_path,
            field,
            thresholds,
            nice,
            domain,
        } => {
            let records = load_records(&file_path)?;
            let options = HistogramOptions {
                thresholds,
                strategy: if nice {
                    ThresholdStrategy::NiceBoundaries
                } else {
                    ThresholdStrategy::ExactCount
                },
                domain,
            };
            let report = HistogramReport::build(&records, &field, &options)
                .with_context(|| format!("binning field '{field}'"))?;
            info!("{} bins over {:?}", report.bins.len(), report.domain);
            serde_json::to_string_pretty(&report)?
        }
        Commands::Voronoi {
            file_path,
            x,
            y,
            width,
            height,
            margin,
            locate,
        } => {
            let records = load_records(&file_path)?;
            let dimensions = Dimensions::new(width, height, margin);
            let scatter = Scatter::build(
                &records,
                &FieldAccessor::new(x),
                &FieldAccessor::new(y),
                &dimensions,
            )?;

            match locate {
                Some((px, py)) => {
                    let located = scatter.locate(&records, px, py);
                    serde_json::to_string_pretty(&located)?
                }
                None => serde_json::to_string_pretty(&scatter.report())?,
            }
        }
    };

    println!("{output}");
    Ok(())
}
