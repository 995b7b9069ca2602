//! # Config Command
//!
//! Shows and edits `jira.toml`.

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use sprig_core::output::format_path;
use sprig_core::url::{ENV_JIRA_HOST, ensure_url_scheme};
use sprig_core::{JiraConfig, get_config_dirs, print_info, print_success};

/// Command for showing or changing configuration
#[derive(Args)]
pub struct ConfigArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: ConfigSubcommands,
}

/// Subcommands for the config command
#[derive(Subcommand)]
pub enum ConfigSubcommands {
  /// Show the current configuration
  Show,

  /// Change one or more settings
  #[command(arg_required_else_help = true)]
  Set(SetArgs),
}

/// Settings accepted by `config set`
#[derive(Args)]
pub struct SetArgs {
  /// Jira host, e.g. your-domain.atlassian.net
  #[arg(long)]
  pub host: Option<String>,

  /// REST API version used in request paths
  #[arg(long, value_parser = clap::value_parser!(u8).range(2..=3))]
  pub api_version: Option<u8>,

  /// Request timeout in seconds (0 disables the timeout)
  #[arg(long, value_name = "SECONDS")]
  pub timeout: Option<u64>,
}

/// Handle config subcommands
pub(crate) fn handle_config_command(args: ConfigArgs) -> Result<()> {
  match args.subcommand {
    ConfigSubcommands::Show => handle_show_command(),
    ConfigSubcommands::Set(set) => handle_set_command(set),
  }
}

fn handle_show_command() -> Result<()> {
  let config_dirs = get_config_dirs()?;
  let config = config_dirs.load_jira_config()?;

  println!(
    "Config file: {}",
    format_path(&config_dirs.jira_config_path().display().to_string())
  );
  println!("{}", describe(&config));

  if let Ok(host) = std::env::var(ENV_JIRA_HOST)
    && !host.trim().is_empty()
  {
    print_info(&format!("{ENV_JIRA_HOST} is set and overrides the configured host: {host}"));
  }

  Ok(())
}

fn handle_set_command(args: SetArgs) -> Result<()> {
  let config_dirs = get_config_dirs()?;
  let mut config = config_dirs.load_jira_config()?;
  apply(&mut config, args)?;
  config_dirs.save_jira_config(&config)?;

  print_success(&format!(
    "Saved {}",
    format_path(&config_dirs.jira_config_path().display().to_string())
  ));
  println!("{}", describe(&config));
  Ok(())
}

fn apply(config: &mut JiraConfig, args: SetArgs) -> Result<()> {
  if args.host.is_none() && args.api_version.is_none() && args.timeout.is_none() {
    bail!("Nothing to set. Pass --host, --api-version or --timeout.");
  }

  if let Some(host) = args.host {
    ensure_url_scheme(&host)?;
    config.host = Some(host.trim().to_string());
  }
  if let Some(api_version) = args.api_version {
    config.api_version = api_version;
  }
  if let Some(timeout) = args.timeout {
    config.timeout_secs = timeout;
  }
  Ok(())
}

fn describe(config: &JiraConfig) -> String {
  let timeout = match config.timeout_secs {
    0 => "disabled".to_string(),
    secs => format!("{secs}s"),
  };
  format!(
    "  host:        {}\n  api_version: {}\n  timeout:     {timeout}",
    config.host.as_deref().unwrap_or("(not set)"),
    config.api_version
  )
}
