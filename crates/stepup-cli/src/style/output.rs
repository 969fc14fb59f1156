//! Output helper functions for consistent styled messages.

use super::colors::SemanticStyle;

/// Prints an error message with an X mark.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".error(), msg);
}

/// Prints a section header.
pub fn print_header(title: &str) {
    println!("{}", title.header());
}

/// Prints a labeled key-value pair with proper indentation.
pub fn print_labeled(key: &str, value: &str) {
    println!("  {}: {}", key.muted(), value);
}

/// Prints an empty line for spacing.
pub fn print_spacer() {
    println!();
}
