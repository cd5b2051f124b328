use anyhow::{Context, Result};
use cardlens_core::StatementData;
use cardlens_ingest::{parse_statement_pdf, parse_statement_text};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::fs;
use std::path::{Path, PathBuf};

mod config;
mod display;
mod input;

const PARSE_FAILED: &str =
    "Failed to parse the PDF. Please ensure it is a valid credit card statement.";

#[derive(Parser, Debug)]
#[command(
    name = "cardlens",
    version,
    about = "Extract due dates, totals and transactions from Indian credit-card statement PDFs"
)]
struct Cli {
    /// Config file (default: $CARDLENS_CONFIG or ~/.cardlens/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a statement PDF and print the extracted fields
    Parse {
        /// Path to the statement PDF
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Run the extractors on statement text that was already pulled out of a PDF
    ParseText {
        /// Path to a plain-text file
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Create or inspect the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Print a human-readable summary instead of JSON
    #[arg(long)]
    summary: bool,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config (never overwrites)
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config_path = config::config_path(cli.config.as_deref())?;

    match cli.command {
        Command::Parse { file, output } => {
            let cfg = config::load_config(&config_path)?;
            let bytes = input::read_statement(&file, &cfg.input)?;
            let data = parse_statement_pdf(bytes.as_slice()).context(PARSE_FAILED)?;
            print_statement(&data, &output, cfg.output.pretty)?;
        }

        Command::ParseText { file, output } => {
            let cfg = config::load_config(&config_path)?;
            let text =
                fs::read_to_string(&file).with_context(|| format!("read {}", file.display()))?;
            let data = parse_statement_text(&text);
            print_statement(&data, &output, cfg.output.pretty)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => init_config(&config_path)?,
            ConfigCommand::Show => {
                let cfg = config::load_config(&config_path)?;
                println!("# {}", config_path.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn print_statement(data: &StatementData, output: &OutputArgs, pretty: bool) -> Result<()> {
    if output.summary {
        print!("{}", display::render_summary(data)?);
        return Ok(());
    }

    let value = serde_json::Value::Object(data.to_map()?);
    let json = if pretty && !output.compact {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{json}");
    Ok(())
}

fn init_config(path: &Path) -> Result<()> {
    if config::write_default_config(path)? {
        println!("Wrote {}", path.display());
    } else {
        println!("Config already exists: {}", path.display());
    }
    Ok(())
}
