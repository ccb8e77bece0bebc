use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spendflow_core::{classify_with_score, list_categories};
use spendflow_finance::{AnalysisError, Analyzer};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod config;
mod output;
mod state;

use config::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "spendflow", version, about = "Categorize pasted bank statements and chart where the money went")]
struct Cli {
    /// Log parser and classifier decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze statement text from a file or stdin
    Analyze {
        /// Statement text file (reads stdin when omitted)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format (defaults to the config file setting)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Also write the categorized transactions to this CSV file
        #[arg(long)]
        export_csv: Option<PathBuf>,
    },

    /// List categories and their keywords
    Categories {
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show which keyword decides the category of a description
    Explain { description: String },

    /// Print version and available commands
    Info,

    /// Manage ~/.spendflow/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            match err.downcast_ref::<AnalysisError>() {
                Some(e) if e.is_client_error() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Analyze {
            file,
            format,
            export_csv,
        } => {
            let cfg = config::load_config()?;
            let raw = read_statement(file.as_ref())?;
            let analyzer = Analyzer::with_options(cfg.parser.to_options())?;
            let result = analyzer.analyze(&raw)?;

            if let Some(path) = &export_csv {
                output::write_transactions_csv(path, &result.transactions)?;
                tracing::info!(path = %path.display(), "exported transactions");
            }

            match format.unwrap_or(cfg.output.format) {
                OutputFormat::Json => println!("{}", output::to_json(&result, cfg.output.pretty)?),
                OutputFormat::Table => print!("{}", output::analysis_table(&result)),
            }
        }

        Command::Categories { format } => {
            let cfg = config::load_config()?;
            let listing = list_categories();
            match format.unwrap_or(cfg.output.format) {
                OutputFormat::Json => println!(
                    "{}",
                    output::to_json(
                        &output::CategoriesResponse {
                            categories: &listing
                        },
                        cfg.output.pretty
                    )?
                ),
                OutputFormat::Table => print!("{}", output::categories_table(&listing)),
            }
        }

        Command::Explain { description } => {
            let c = classify_with_score(&description);
            println!("category: {}", c.category);
            println!("keyword:  {}", c.keyword.unwrap_or("(none)"));
            println!("score:    {}", c.score);
        }

        Command::Info => {
            println!("Bank Statement Analyzer");
            println!(
                "spendflow {} ({})",
                env!("CARGO_PKG_VERSION"),
                env!("SPENDFLOW_BUILD_SHA")
            );
            println!("\nCommands:");
            println!("  analyze      Analyze a bank statement");
            println!("  categories   Get available categories");
            println!("  explain      Show how a description is categorized");
            println!("  config       Manage settings");
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn read_statement(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display())),
        None => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("read statement from stdin")?;
            Ok(s)
        }
    }
}
