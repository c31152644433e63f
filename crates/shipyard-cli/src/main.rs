// Rust guideline compliant 2026-10-12

//! Shipyard CLI Application
//!
//! Command-line interface for the Shipyard ship catalog.

use anyhow::Context;
use clap::Parser;
use shipyard_app::RepoContext;
use shipyard_cli::commands::{self, FilterArgs, ShipFieldArgs};
use shipyard_cli::{create_formatter, logging, OutputFormatter};
use shipyard_core::Config;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "shipyard",
    version,
    about = "Shipyard: a catalog of spaceships with filtering, sorting and ratings",
    after_help = "Examples:\n  shipyard init\n  shipyard create --name Daedalus --planet Jupiter --ship-type transport --prod-date 32503680000000 --speed 0.3 --crew-size 120\n  shipyard list --ship-type military --min-speed 0.5 --order rating --page-size 10\n  shipyard count --planet mars\n  shipyard update 3 --speed 0.55\n  shipyard delete 3\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Repository root, defaults to the current directory
    #[arg(long, global = true)]
    repo: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for shipyard_core::OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => Self::Json,
            FormatArg::Table => Self::Table,
            FormatArg::Plain => Self::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new Shipyard repository
    Init,

    /// List ships
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Sort by field (id, speed, date, rating)
        #[arg(long)]
        order: Option<String>,

        /// Zero-based page number
        #[arg(long, allow_negative_numbers = true)]
        page_number: Option<i64>,

        /// Ships per page
        #[arg(long, allow_negative_numbers = true)]
        page_size: Option<i64>,
    },

    /// Count ships matching a filter
    Count {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show details of a ship
    Show {
        /// Ship ID
        id: u64,
    },

    /// Create a new ship
    Create {
        #[command(flatten)]
        fields: ShipFieldArgs,
    },

    /// Update a ship
    Update {
        /// Ship ID
        id: u64,

        #[command(flatten)]
        fields: ShipFieldArgs,
    },

    /// Delete a ship
    Delete {
        /// Ship ID
        id: u64,
    },
}

impl Cli {
    fn requested_format(&self) -> Option<shipyard_core::OutputFormat> {
        match self.format {
            Some(format) => Some(format.into()),
            None if self.json => Some(shipyard_core::OutputFormat::Json),
            None => None,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let fallback = cli.requested_format().unwrap_or_default();

    let (context, config) = match load_settings(cli.repo.as_deref()) {
        Ok(settings) => settings,
        Err(error) => return report(&error, fallback),
    };

    let format = cli.requested_format().unwrap_or(config.output_format);
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    if let Err(error) = logging::init_tracing(level, cli.log_json) {
        return report(&anyhow::Error::from(error), format);
    }

    let formatter = create_formatter(format);
    match dispatch(cli.command, &context, &config, formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(&error, format),
    }
}

/// Resolves the repository root and loads its configuration.
///
/// A repository that is not yet initialized still yields defaults plus
/// environment overrides, so that `init` and error reporting work.
fn load_settings(repo: Option<&Path>) -> anyhow::Result<(RepoContext, Config)> {
    let root = match repo {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };
    let context = RepoContext::at(&root);
    let config = context.load_config()?;
    Ok((context, config))
}

fn dispatch(
    command: Commands,
    context: &RepoContext,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> anyhow::Result<()> {
    match command {
        Commands::Init => commands::init::execute(context, formatter),
        Commands::List {
            filter,
            order,
            page_number,
            page_size,
        } => commands::list::execute(
            context,
            config,
            &filter,
            order.as_deref(),
            page_number,
            page_size,
            formatter,
        ),
        Commands::Count { filter } => commands::count::execute(context, config, &filter, formatter),
        Commands::Show { id } => commands::show::execute(context, config, id, formatter),
        Commands::Create { fields } => commands::create::execute(context, config, fields, formatter),
        Commands::Update { id, fields } => {
            commands::update::execute(context, config, id, fields, formatter)
        }
        Commands::Delete { id } => commands::delete::execute(context, config, id, formatter),
    }
}

/// Prints an error in the active format and returns a failing exit code.
///
/// JSON envelopes go to stdout so that scripted callers read one stream.
fn report(error: &anyhow::Error, format: shipyard_core::OutputFormat) -> ExitCode {
    tracing::debug!(error = %format!("{error:#}"), "command failed");
    let message = create_formatter(format).format_error(error);
    if format == shipyard_core::OutputFormat::Json {
        println!("{message}");
    } else {
        eprintln!("{message}");
    }
    ExitCode::FAILURE
}
