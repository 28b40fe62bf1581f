/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Completion marker color: green when completed, grey otherwise.
pub fn color_for_completed(is_completed: bool) -> &'static str {
    if is_completed { GREEN } else { GREY }
}

/// Colorize the completion marker of a list row.
pub fn colorize_marker(marker: &str, is_completed: bool) -> String {
    format!("{}{}{}", color_for_completed(is_completed), marker, RESET)
}
