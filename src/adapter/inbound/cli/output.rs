//! Astral-style CLI output formatting.
//!
//! Provides consistent terminal output with support for JSON mode (for
//! scripting), quiet mode, and verbosity levels. In JSON mode only explicit
//! [`json_output`] payloads reach stdout, so a command's JSON document can be
//! piped without filtering.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream, Style};
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
}

impl OutputConfig {
    /// Create a new output configuration.
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

/// Global output configuration singleton.
static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Check if human-readable output should be skipped.
fn human_output_suppressed(config: OutputConfig) -> bool {
    config.json || config.quiet
}

/// Style `text` for stdout, honouring the color override.
fn paint(text: &str, style: Style) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.style(style))
        .to_string()
}

/// Style `text` for stderr, honouring the color override.
fn paint_err(text: &str, style: Style) -> String {
    text.if_supports_color(Stream::Stderr, |t| t.style(style))
        .to_string()
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

/// Force colors on or off; `None` restores terminal detection.
pub fn set_color(forced: Option<bool>) {
    match forced {
        Some(enabled) => owo_colors::set_override(enabled),
        None => owo_colors::unset_override(),
    }
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Return whether quiet mode is enabled.
#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

/// Return the global verbosity level from `-v` flags.
#[must_use]
pub fn verbosity() -> u8 {
    read_config().verbose
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    if human_output_suppressed(read_config()) {
        return;
    }

    println!(
        "{} {}",
        paint("rightsize", Style::new().bold()),
        paint(version, Style::new().dimmed())
    );
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    if human_output_suppressed(read_config()) {
        return;
    }

    let label = format!("{label:<12}");
    println!("  {} {}", paint(&label, Style::new().dimmed()), value);
}

/// Print a success line.
pub fn success(message: &str) {
    if human_output_suppressed(read_config()) {
        return;
    }

    println!("  {} {}", paint("✓", Style::new().green()), message);
}

/// Print a warning line.
///
/// Shown in quiet mode; routed to stderr in JSON mode.
pub fn warning(message: &str) {
    if read_config().json {
        eprintln!("{}", json!({ "type": "warning", "message": message }));
        return;
    }

    println!("  {} {}", paint("⚠", Style::new().yellow()), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if read_config().json {
        eprintln!("{}", json!({ "type": "error", "message": message }));
        return;
    }

    eprintln!("  {} {}", paint_err("×", Style::new().red()), message);
}

/// Print a section header.
pub fn section(title: &str) {
    if human_output_suppressed(read_config()) {
        return;
    }

    println!();
    println!("{}", paint(title, Style::new().bold()));
}

/// Print a note.
pub fn note(message: &str) {
    if human_output_suppressed(read_config()) {
        return;
    }

    println!("  {}", paint(message, Style::new().dimmed()));
}

/// Print a hint with "hint:" prefix.
pub fn hint(message: &str) {
    if human_output_suppressed(read_config()) {
        return;
    }

    println!(
        "  {}: {}",
        paint("hint", Style::new().cyan().dimmed()),
        paint(message, Style::new().dimmed())
    );
}

/// Print multiple lines of content, each indented.
pub fn lines(content: &str) {
    if human_output_suppressed(read_config()) {
        return;
    }

    for line in content.lines() {
        println!("  {line}");
    }
}

/// Emit a JSON value directly on stdout.
pub fn json_output(value: &serde_json::Value) {
    println!("{value}");
}

/// Format a positive value in green.
#[must_use]
pub fn positive(value: impl Display) -> String {
    paint(&value.to_string(), Style::new().green())
}

/// Format a negative value in red.
#[must_use]
pub fn negative(value: impl Display) -> String {
    paint(&value.to_string(), Style::new().red())
}

/// Format a dimmed value.
#[must_use]
pub fn muted(value: impl Display) -> String {
    paint(&value.to_string(), Style::new().dimmed())
}

/// Braille spinner animation frames.
const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Create and start a progress spinner.
///
/// Returns a hidden progress bar in JSON or quiet mode.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    if human_output_suppressed(read_config()) {
        let pb = indicatif::ProgressBar::hidden();
        pb.set_message(message.to_string());
        return pb;
    }

    let pb = indicatif::ProgressBar::new_spinner();
    if let Ok(style) = indicatif::ProgressStyle::default_spinner()
        .tick_strings(BRAILLE_SPINNER)
        .template("  {spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Finish a spinner with a success checkmark.
pub fn spinner_success(pb: &indicatif::ProgressBar, message: &str) {
    if human_output_suppressed(read_config()) {
        pb.finish_and_clear();
        return;
    }

    pb.finish_with_message(format!("{} {}", paint("✓", Style::new().green()), message));
}

/// Finish a spinner with a failure mark.
pub fn spinner_fail(pb: &indicatif::ProgressBar, message: &str) {
    if human_output_suppressed(read_config()) {
        pb.finish_and_clear();
        return;
    }

    pb.finish_with_message(format!("{} {}", paint("×", Style::new().red()), message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_config_new() {
        let config = OutputConfig::new(true, false, 2);
        assert!(config.json);
        assert!(!config.quiet);
        assert_eq!(config.verbose, 2);
    }

    #[test]
    fn json_and_quiet_suppress_human_output() {
        assert!(human_output_suppressed(OutputConfig::new(true, false, 0)));
        assert!(human_output_suppressed(OutputConfig::new(false, true, 0)));
        assert!(!human_output_suppressed(OutputConfig::default()));
    }

    #[test]
    fn disabled_colors_leave_text_plain() {
        set_color(Some(false));
        assert_eq!(positive(3), "3");
        assert_eq!(muted("x"), "x");
        set_color(None);
    }
}
