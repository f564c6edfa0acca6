//! Flow plugin runner
//!
//! Command-line stand-in for the flow engine: lists the plugins, prints
//! their schemas, and runs one against engine-shaped JSON arguments.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flow_stream_plugins::config::{AppConfig, LoggingConfig};
use flow_stream_plugins::config_file::{generate_default_config, ConfigFile};
use flow_stream_plugins::host::MemoryJobLog;
use flow_stream_plugins::plugins::{all_plugins, find_plugin};
use flow_stream_plugins::{PluginArgs, PluginError, PluginOutput, Result};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "flow-plugins";

const DEFAULT_CONFIG_PATH: &str = "flow-plugins.toml";

#[derive(Parser, Debug)]
#[command(name = "flow-plugins")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List plugin ids and names
    List,

    /// Print a plugin's schema as JSON
    Details {
        /// Plugin id
        id: String,
    },

    /// Run a plugin against engine-shaped arguments
    Run {
        /// Plugin id
        id: String,

        /// JSON file with `inputs`, `inputFileObj` and `variables`
        #[arg(short, long)]
        args: PathBuf,
    },

    /// Write a default configuration file
    InitConfig {
        /// Destination path
        path: PathBuf,
    },
}

/// What `run` prints: the plugin output plus the collected job log
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunReport {
    #[serde(flatten)]
    output: PluginOutput,
    job_log: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_warning) = load_config(&cli.config);
    init_logging(&config.logging);
    if let Some(warning) = config_warning {
        tracing::warn!("{}", warning);
    }
    tracing::debug!("{} v{} configuration: {:?}", APP_NAME, VERSION, config);

    match cli.command {
        Command::List => {
            for plugin in all_plugins(config.renamer.grammar) {
                println!("{}\t{}", plugin.id(), plugin.details().name);
            }
        }
        Command::Details { id } => {
            let plugin = find_plugin(&id, config.renamer.grammar)
                .ok_or(PluginError::UnknownPlugin(id))?;
            println!("{}", serde_json::to_string_pretty(&plugin.details())?);
        }
        Command::Run { id, args } => {
            let report = run_plugin(&config, &id, &args)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::InitConfig { path } => {
            generate_default_config(&path)?;
            tracing::info!("Wrote default configuration to {}", path.display());
        }
    }

    Ok(())
}

fn run_plugin(config: &AppConfig, id: &str, args_path: &Path) -> Result<RunReport> {
    let plugin = find_plugin(id, config.renamer.grammar)
        .ok_or_else(|| PluginError::UnknownPlugin(id.to_string()))?;

    let content = std::fs::read_to_string(args_path)?;
    let args: PluginArgs = serde_json::from_str(&content)?;

    let mut log = MemoryJobLog::traced();
    let output = plugin.run(args, &config.default_loader(), &mut log);
    tracing::info!("{} routed to output {}", id, output.output_number);

    Ok(RunReport {
        output,
        job_log: log.into_lines(),
    })
}

/// Load the configuration file if it exists.
///
/// A file that fails to load is not fatal: the defaults are used and the
/// returned warning is logged once logging is up.
fn load_config(path: &Path) -> (AppConfig, Option<String>) {
    if !path.exists() {
        return (AppConfig::default(), None);
    }
    match ConfigFile::from_file(path).and_then(|cf| cf.validate().map(|_| cf)) {
        Ok(cf) => (cf.into_app_config(), None),
        Err(e) => (
            AppConfig::default(),
            Some(format!(
                "Failed to load config file {}: {}. Using defaults.",
                path.display(),
                e
            )),
        ),
    }
}

/// Initialize logging with tracing
fn init_logging(logging: &LoggingConfig) {
    let json = logging.is_json();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| logging.filter().into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}
