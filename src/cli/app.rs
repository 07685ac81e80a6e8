//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, Workspace};
use intake::config::IntakeConfig;
use intake::output::OutputMode;

/// intake - Patent-disclosure intake
#[derive(Parser, Debug)]
#[command(
    name = "intake",
    version,
    about = "Patent-disclosure intake",
    long_about = "Record who contributed what to an invention and prepare a patent application.\n\n\
                  Contributions and contributors are edited in a draft, saved to local\n\
                  storage, and can be sent with an application form to generate a report."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding local storage (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Edit the contributions list
    Contribution {
        #[command(subcommand)]
        action: ContributionAction,
    },

    /// Edit the contributors list
    Contributor {
        #[command(subcommand)]
        action: ContributorAction,
    },

    /// Show the draft and when it was last saved
    Status,

    /// Save the draft to local storage
    Save,

    /// Replace the draft with the saved contributor analysis
    Load,

    /// Discard the draft
    Reset,

    /// Print the report prompt for an application form
    Prompt {
        /// Application form (TOML)
        #[arg(short, long)]
        form: PathBuf,
    },

    /// Submit an application form and print the generated report
    #[cfg(feature = "llm")]
    Report {
        /// Application form (TOML)
        #[arg(short, long)]
        form: PathBuf,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ContributionAction {
    /// Add a contribution
    Add {
        /// Description (empty if omitted)
        description: Option<String>,
    },

    /// Change a contribution's description
    Edit {
        /// Contribution number (starting at 1)
        number: usize,

        /// New description
        description: String,
    },

    /// Remove a contribution
    Remove {
        /// Contribution number (starting at 1)
        number: usize,
    },

    /// List contributions
    List,
}

#[derive(Subcommand, Debug)]
pub enum ContributorAction {
    /// Add a contributor
    Add {
        /// Name
        #[arg(short, long)]
        name: Option<String>,

        /// Area of expertise
        #[arg(short, long)]
        expertise: Option<String>,

        /// What they contributed
        #[arg(short, long)]
        contribution: Option<String>,
    },

    /// Change one field of a contributor
    Edit {
        /// Contributor number (starting at 1)
        number: usize,

        /// Field: name, expertise, contribution
        field: String,

        /// New value
        value: String,
    },

    /// Remove a contributor
    Remove {
        /// Contributor number (starting at 1)
        number: usize,
    },

    /// List contributors
    List,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut config = IntakeConfig::load();
    if let Some(dir) = cli.storage_dir {
        config.storage.dir = Some(dir);
    }
    let workspace = Workspace::new(config);

    match cli.command {
        Some(Command::Contribution { action }) => {
            commands::contribution(&workspace, action, output_mode)
        },
        Some(Command::Contributor { action }) => {
            commands::contributor(&workspace, action, output_mode)
        },
        Some(Command::Status) => commands::status(&workspace, output_mode),
        Some(Command::Save) => commands::save(&workspace, output_mode),
        Some(Command::Load) => commands::load(&workspace, output_mode),
        Some(Command::Reset) => commands::reset(&workspace, output_mode),
        Some(Command::Prompt { form }) => commands::prompt(&workspace, &form, output_mode),
        #[cfg(feature = "llm")]
        Some(Command::Report { form }) => commands::report(&workspace, &form, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("intake v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("intake v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'intake --help' for usage");
                println!("Run 'intake contribution add \"...\"' to get started");
            }
            Ok(())
        },
    }
}
