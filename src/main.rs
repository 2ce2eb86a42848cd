//! tagline CLI - print colorized, tagged status messages

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tagline::commands::emit::{EmitKind, EmitOptions};
use tagline::{Reporter, Settings, log_debug};

#[derive(Parser)]
#[command(name = "tagline")]
#[command(author, version, about = "Colorized, tagged status messages for terminal tools", long_about = None)]
struct Cli {
    /// Verbose diagnostics on stderr (can be used multiple times: -v, -vv, -vvv)
    /// -v: INFO, -vv: DEBUG, -vvv: TRACE
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Read settings from this file instead of the standard locations
    #[arg(long = "config", global = true, value_name = "PATH")]
    config_file: Option<PathBuf>,

    /// Accent color for normal messages (hex, e.g. #9900FF)
    #[arg(long, global = true, env = "TAGLINE_ACCENT_COLOR")]
    accent_color: Option<String>,

    /// Display name used as the tag for normal, success and info messages
    #[arg(long, global = true, env = "TAGLINE_NAME")]
    name: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a message under the accent-colored tag
    Normal {
        message: String,

        /// Value handed back by the reporter and echoed on its own line
        #[arg(long)]
        value: Option<String>,
    },

    /// Print a warning
    Warning {
        message: String,

        #[arg(long)]
        value: Option<String>,
    },

    /// Print an error (a missing message prints the fallback notice first)
    Error {
        message: Option<String>,

        #[arg(long)]
        value: Option<String>,
    },

    /// Print a success message
    Success {
        message: String,

        #[arg(long)]
        value: Option<String>,
    },

    /// Print an informational message
    Info {
        message: String,

        #[arg(long)]
        value: Option<String>,
    },

    /// Validate the configured colors
    Check,

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print an example config file
    Example,

    /// Write a default config file
    Init {
        /// Target path (default: ~/.config/tagline/config.toml)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tagline::utils::logger::init(cli.verbose);

    let settings = match &cli.config_file {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::load(),
    }
    .with_overrides(cli.accent_color, cli.name, cli.no_color);
    settings.apply_colors();
    log_debug!("Effective settings: {:?}", settings);

    match cli.command {
        Commands::Normal { message, value } => {
            handle_emit(&settings, EmitKind::Normal, Some(message), value)
        }
        Commands::Warning { message, value } => {
            handle_emit(&settings, EmitKind::Warning, Some(message), value)
        }
        Commands::Error { message, value } => {
            handle_emit(&settings, EmitKind::Error, message, value)
        }
        Commands::Success { message, value } => {
            handle_emit(&settings, EmitKind::Success, Some(message), value)
        }
        Commands::Info { message, value } => {
            handle_emit(&settings, EmitKind::Info, Some(message), value)
        }
        Commands::Check => handle_check_command(&settings),
        Commands::Config { command } => handle_config_command(command),
        Commands::Completion { shell } => handle_completion_command(shell),
        Commands::Version => handle_version_command(),
    }
}

fn handle_emit(
    settings: &Settings,
    kind: EmitKind,
    message: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let mut reporter = Reporter::from_settings(settings, io::stdout());

    match tagline::commands::emit::emit(&mut reporter, kind, EmitOptions { message, value }) {
        Ok(Some(resolved)) => {
            println!("{}", resolved);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) if e.is_fatal() => {
            e.display();
            e.exit()
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_check_command(settings: &Settings) -> Result<()> {
    let mut reporter = Reporter::from_settings(settings, io::stdout());

    if let Err(e) = tagline::commands::check::check(&mut reporter) {
        tagline::log_error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn handle_config_command(command: ConfigCommands) -> Result<()> {
    use tagline::commands::config;

    match command {
        ConfigCommands::Example => config::example(),
        ConfigCommands::Init { path, force } => {
            let path = path.unwrap_or_else(config::default_init_path);
            config::init(&path, force)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

fn handle_completion_command(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "tagline", &mut io::stdout());
    Ok(())
}

fn handle_version_command() -> Result<()> {
    println!("tagline {}", env!("CARGO_PKG_VERSION"));
    println!("Colorized, tagged status messages for terminal tools");
    Ok(())
}
