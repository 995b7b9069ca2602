//! # Output Formatting
//!
//! Provides formatted output functions with colors, emojis, and consistent
//! styling for user-facing messages and terminal output.

use owo_colors::{OwoColorize, Stream, Style};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  Never,
}

impl ColorMode {
  /// Install the mode as the process-wide owo-colors override
  pub fn apply(self) {
    match self {
      ColorMode::Always => owo_colors::set_override(true),
      ColorMode::Never => owo_colors::set_override(false),
      ColorMode::Auto => owo_colors::unset_override(),
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", paint(&check, Stream::Stdout, Style::new().green().bold()), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", paint(&cross, Stream::Stderr, Style::new().red().bold()), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", paint(&warning, Stream::Stdout, Style::new().yellow().bold()), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{} {}", paint(&info, Stream::Stdout, Style::new().blue().bold()), message);
}

/// Format a file system path
pub fn format_path(path: &str) -> String {
  paint(path, Stream::Stdout, Style::new().bright_green())
}

/// Format a command or command example
pub fn format_command(cmd: &str) -> String {
  paint(cmd, Stream::Stdout, Style::new().purple())
}

/// Format an HTTP verb, colored by whether it changes server state
pub fn format_method(method: &str) -> String {
  let style = match method {
    "GET" => Style::new().green(),
    "POST" | "PUT" => Style::new().yellow(),
    "DELETE" => Style::new().red(),
    _ => Style::new(),
  };
  paint(method, Stream::Stdout, style)
}

/// Dim secondary text such as annotations
pub fn format_dimmed(text: &str) -> String {
  paint(text, Stream::Stdout, Style::new().dimmed())
}

/// Apply `style` only when `stream` supports colors under the active
/// [`ColorMode`]
fn paint(text: &str, stream: Stream, style: Style) -> String {
  text.if_supports_color(stream, |t| t.style(style)).to_string()
}
