//! The command line interface for the program.
use crate::log;
use crate::output::create_output_directory;
use crate::pipeline;
use crate::settings::Settings;
use crate::summary::Summary;
use crate::variant::Variant;
use ::log::info;
use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};

pub mod settings;
use settings::SettingsSubcommands;

/// The command line interface for the program.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Option<Commands>,
    /// Flag to provide the CLI docs as markdown
    #[arg(long, hide = true)]
    markdown_help: bool,
}

/// Options for the run command
#[derive(Args)]
pub struct RunOpts {
    /// Directory for output files (defaults to `results_dir` in the settings file)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Solve both models and write a report on the results.
    Run {
        /// Other run options
        #[command(flatten)]
        opts: RunOpts,
    },
    /// Summarise an existing solver output file.
    Parse {
        /// Path to the solver output.
        file: PathBuf,
        /// The model variant which produced the output.
        #[arg(short, long, value_enum, default_value = "max")]
        variant: Variant,
    },
    /// Manage the program settings file.
    Settings {
        /// The subcommands for managing the settings file.
        #[command(subcommand)]
        subcommand: SettingsSubcommands,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Run { opts } => handle_run_command(&opts, None).map(|_| ()),
            Self::Parse { file, variant } => handle_parse_command(&file, variant, None),
            Self::Settings { subcommand } => subcommand.execute(),
        }
    }
}

/// Parse CLI arguments and run the requested command
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Invoked as: `$ shift-report --markdown-help`
    if cli.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return Ok(());
    }

    let Some(command) = cli.command else {
        let help_str = Cli::command().render_long_help().to_string();
        println!("{help_str}");
        return Ok(());
    };

    command.execute()
}

/// Load program settings, if not provided
fn load_settings(settings: Option<Settings>) -> Result<Settings> {
    match settings {
        Some(settings) => Ok(settings),
        None => Settings::load().context("Failed to load settings."),
    }
}

/// Handle the `run` command.
///
/// # Returns
///
/// The path to the report.
pub fn handle_run_command(opts: &RunOpts, settings: Option<Settings>) -> Result<PathBuf> {
    let settings = load_settings(settings)?;
    let output_dir = opts.output_dir.as_deref().unwrap_or(&settings.results_dir);

    // Log files are written to the output directory, so it has to exist first
    create_output_directory(output_dir)?;
    log::init(&settings.log_level, Some(output_dir)).context("Failed to initialise logging.")?;
    info!("Output folder: {}", output_dir.display());

    pipeline::run(&settings, output_dir)
}

/// Handle the `parse` command.
pub fn handle_parse_command(
    file_path: &Path,
    variant: Variant,
    settings: Option<Settings>,
) -> Result<()> {
    let settings = load_settings(settings)?;

    // We won't save log files when only parsing
    log::init(&settings.log_level, None).context("Failed to initialise logging.")?;

    let summary = Summary::from_path(file_path, variant)?;
    print!("{summary}");

    Ok(())
}
