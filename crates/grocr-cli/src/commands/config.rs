//! Config command - manage configuration.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use grocr_core::models::PipelineConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the configuration file path
    Path,
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = load_config(config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCommand::Init { force } => {
            let path = resolve_path(config_path);
            if path.exists() && !force {
                anyhow::bail!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            PipelineConfig::default().save(&path)?;
            println!("{} {}", style("Created").green(), path.display());
            Ok(())
        }
        ConfigCommand::Path => {
            println!("{}", resolve_path(config_path).display());
            Ok(())
        }
    }
}

/// Load the pipeline config: explicit path, then the default location,
/// then built-in defaults when neither file exists.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PipelineConfig> {
    if let Some(path) = config_path {
        return Ok(PipelineConfig::from_file(std::path::Path::new(path))?);
    }

    let default = default_path();
    if default.exists() {
        return Ok(PipelineConfig::from_file(&default)?);
    }

    Ok(PipelineConfig::default())
}

fn resolve_path(config_path: Option<&str>) -> PathBuf {
    config_path.map(PathBuf::from).unwrap_or_else(default_path)
}

fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("grocr")
        .join("config.json")
}
