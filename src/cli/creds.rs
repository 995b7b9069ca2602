//! # Credentials Command
//!
//! Checks that `.netrc` holds usable credentials for the Jira host.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};
use sprig_core::creds::ATLASSIAN_FALLBACK_MACHINE;
use sprig_core::creds::netrc::{get_netrc_path, normalize_host};
use sprig_core::get_config_dirs;
use sprig_core::output::{format_command, format_path, print_error, print_info, print_success, print_warning};
use sprig_jira::auth::{check_jira_credentials, get_jira_host};

/// Command for credential management
#[derive(Args)]
pub struct CredsArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: CredsSubcommands,
}

/// Subcommands for the creds command
#[derive(Subcommand)]
pub enum CredsSubcommands {
  /// Check if credentials are properly configured
  #[command(long_about = "Checks that your .netrc file contains credentials for the Jira host.\n\n\
            The file's permissions are checked as well, since it holds your API token.")]
  Check,
}

/// Handle credentials subcommands
pub(crate) fn handle_creds_command(args: CredsArgs) -> Result<()> {
  match args.subcommand {
    CredsSubcommands::Check => handle_check_command(&super::home_dir()?),
  }
}

fn handle_check_command(home: &Path) -> Result<()> {
  let netrc_path = get_netrc_path(home);

  if !netrc_path.exists() {
    print_error("No .netrc file found.");
    println!(
      "Create a .netrc file at {} with your credentials.",
      format_path(&netrc_path.display().to_string())
    );
    print_netrc_example("your-domain.atlassian.net");
    return Ok(());
  }

  check_permissions(&netrc_path)?;

  let config = get_config_dirs()?.load_jira_config()?;
  let jira_host = match get_jira_host(&config) {
    Ok(host) => host,
    Err(e) => {
      print_warning(&format!("{e}"));
      print_netrc_example("your-domain.atlassian.net");
      return Ok(());
    }
  };
  let machine = normalize_host(&jira_host);

  match check_jira_credentials(home, &jira_host) {
    Ok(true) => print_success(&format!("Jira credentials found for {machine}.")),
    Ok(false) => {
      print_warning(&format!("No Jira credentials found for {machine}."));
      println!(
        "Add credentials for machine '{machine}' or '{ATLASSIAN_FALLBACK_MACHINE}' to your .netrc file."
      );
      print_netrc_example(&machine);
    }
    Err(e) => print_error(&format!("Error checking Jira credentials: {e}")),
  }

  Ok(())
}

#[cfg(unix)]
fn check_permissions(netrc_path: &Path) -> Result<()> {
  use std::os::unix::fs::PermissionsExt;

  let mode = std::fs::metadata(netrc_path)?.permissions().mode();
  if mode & 0o077 != 0 {
    print_warning("Your .netrc file has insecure permissions.");
    println!(
      "For security, change permissions to 600: {}",
      format_command(&format!("chmod 600 {}", netrc_path.display()))
    );
  } else {
    print_success(".netrc file has secure permissions.");
  }
  Ok(())
}

#[cfg(not(unix))]
fn check_permissions(_netrc_path: &Path) -> Result<()> {
  Ok(())
}

fn print_netrc_example(machine: &str) {
  print_info("Example .netrc format:");
  println!("```");
  println!("machine {machine}");
  println!("  login your-email@example.com");
  println!("  password your-api-token");
  println!("```");
}
