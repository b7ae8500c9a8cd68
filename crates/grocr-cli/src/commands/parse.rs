//! Parse command - turn an OCR text dump into structured items.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::info;

use grocr_core::models::ParsedItem;
use grocr_core::Pipeline;

use super::config::load_config;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file with one receipt line per row (stdin when omitted)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Skip the model tier and use only the rule-based parser
    #[arg(long)]
    heuristic_only: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text table
    Text,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let lines = read_lines(args.input.as_deref())?;
    info!("Read {} receipt lines", lines.len());

    let pipeline = if args.heuristic_only {
        Pipeline::heuristic_only()
    } else {
        Pipeline::new(&config)
    };

    let items = pipeline.parse_receipt_lines(&lines).await;

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&items)?,
        OutputFormat::Text => format_text(&items),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {} items written to {}",
            style("Done:").green(),
            items.len(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    info!("Parsed in {} ms", start.elapsed().as_millis());

    if items.is_empty() {
        eprintln!("{}", style("No items detected").yellow());
    }

    Ok(())
}

fn read_lines(input: Option<&std::path::Path>) -> anyhow::Result<Vec<String>> {
    let text = match input {
        Some(path) if path.as_os_str() != "-" => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            fs::read_to_string(path)?
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    Ok(text.lines().map(|l| l.to_string()).collect())
}

fn format_text(items: &[ParsedItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!("{:<40} {:>8} {}\n", item.name, item.quantity, item.unit));
    }
    out
}
