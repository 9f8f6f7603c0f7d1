use crate::core::{LayerSpec, SourceKind};
use crate::utils::validation::Validate;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "report-courier")]
#[command(about = "Layered report composition and unified order delivery")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compose a report from a source and a sequence of layers
    Report {
        #[arg(long, default_value = "sales", value_parser = parse_source)]
        source: SourceKind,

        /// Layer to wrap around the report, applied in the order given:
        /// `date:<start>..<end>`, `sort:<key>`, `csv`, `pdf`
        #[arg(long = "layer", value_parser = parse_layer)]
        layers: Vec<LayerSpec>,

        /// Print the output after every composition step
        #[arg(long)]
        steps: bool,

        /// Print the result as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Deliver orders through one backend and print their status
    Deliver {
        /// Backend selector: Internal, ExternalA or ExternalB
        #[arg(long)]
        service: String,

        #[arg(required = true)]
        order_ids: Vec<String>,
    },

    /// Run the report and deliveries described in a TOML file
    Run {
        #[arg(short, long, default_value = "courier.toml")]
        config: String,
    },

    /// Run the built-in report and delivery walkthrough
    Demo,
}

fn parse_source(value: &str) -> Result<SourceKind, String> {
    value.parse::<SourceKind>().map_err(|e| e.to_string())
}

pub fn parse_layer(value: &str) -> Result<LayerSpec, String> {
    let layer = parse_layer_syntax(value)?;
    layer.validate().map_err(|e| e.to_string())?;
    Ok(layer)
}

fn parse_layer_syntax(value: &str) -> Result<LayerSpec, String> {
    let (kind, argument) = match value.split_once(':') {
        Some((kind, argument)) => (kind, Some(argument)),
        None => (value, None),
    };

    match (kind.trim().to_ascii_lowercase().as_str(), argument) {
        ("csv", None) => Ok(LayerSpec::Csv),
        ("pdf", None) => Ok(LayerSpec::Pdf),
        ("sort", Some(key)) => Ok(LayerSpec::Sort {
            key: key.to_string(),
        }),
        ("date", Some(range)) => {
            let (start, end) = range
                .split_once("..")
                .ok_or_else(|| format!("Date range '{}' must look like <start>..<end>", range))?;
            Ok(LayerSpec::DateRange {
                start: parse_date(start)?,
                end: parse_date(end)?,
            })
        }
        _ => Err(format!(
            "Unknown layer '{}'. Expected date:<start>..<end>, sort:<key>, csv or pdf",
            value
        )),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}': {}", value, e))
}
