//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the sprig tool.

mod call;
mod config;
mod creds;
mod endpoints;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use directories::BaseDirs;
use sprig_core::ColorMode;

/// Top-level CLI command for the sprig tool
#[derive(Parser)]
#[command(name = "sprig")]
#[command(display_name = "🌱 Sprig")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "A thin, schema-validated client for the Jira REST API")]
#[command(
  long_about = "Sprig calls Jira REST endpoints one request at a time.\n\n\
        Parameters are checked against each endpoint's schema before anything\n\
        is sent, defaults are filled in, and the raw response is printed."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the sprig tool
#[derive(Subcommand)]
pub enum Commands {
  /// Call a Jira endpoint
  #[command(long_about = "Validate parameters for an endpoint and send a single request.\n\n\
            Path identifiers (issue keys, comment ids, property keys) are given in\n\
            order as positional arguments. Parameters are given as key=value pairs;\n\
            values are read as JSON when they parse, otherwise as plain strings.")]
  Call(call::CallArgs),

  /// Show or change sprig configuration
  #[command(long_about = "Show or change the settings stored in jira.toml.\n\n\
            The Jira host may also be supplied through the JIRA_HOST environment\n\
            variable, which takes precedence over the configured value.")]
  #[command(arg_required_else_help = true)]
  Config(config::ConfigArgs),

  /// Credential management
  #[command(long_about = "Check the credentials sprig will use for the Jira host.\n\n\
            Credentials are read from your .netrc file: the entry for the Jira host,\n\
            then 'atlassian.net', then the 'default' entry.")]
  #[command(arg_required_else_help = true)]
  Creds(creds::CredsArgs),

  /// List the known endpoints and their parameters
  #[command(alias = "ls")]
  Endpoints(endpoints::EndpointsArgs),
}

/// Handle the parsed command line
pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  match cli.command {
    Commands::Call(call) => call::handle_call_command(call),
    Commands::Config(config) => config::handle_config_command(config),
    Commands::Creds(creds) => creds::handle_creds_command(creds),
    Commands::Endpoints(endpoints) => endpoints::handle_endpoints_command(&endpoints),
  }
}

/// The user's home directory, where `.netrc` lives
fn home_dir() -> Result<PathBuf> {
  let base_dirs = BaseDirs::new().context("Failed to determine home directory")?;
  Ok(base_dirs.home_dir().to_path_buf())
}
