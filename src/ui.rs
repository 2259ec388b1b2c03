//! Pure formatting functions for terminal output.
//!
//! Messages are one-liners; error vs. notice vs. success paths stay visually
//! distinct.

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display the proposed version change.
///
/// # Arguments
/// * `old_version` - The currently persisted version
/// * `new_version` - The computed next version
pub fn display_version_change(old_version: &str, new_version: &str) {
    println!("\n\x1b[1mProposed Version Change:\x1b[0m");
    println!("  From: \x1b[31m{}\x1b[0m", old_version);
    println!("  To:   \x1b[32m{}\x1b[0m", new_version);
}
