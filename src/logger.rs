//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for diagnostics with a colored `[module]` prefix (stderr)
//! - `debug!` macro for diagnostics shown only in verbose mode
//! - [`saved`] for the plain confirmation lines on stdout
//!
//! Stdout is reserved for the confirmation lines so it stays machine-readable.
//!
//! # Example
//!
//! ```ignore
//! log!("error"; "cannot open {}", path.display());
//! debug!("cutout"; "{} of {} pixels kept", kept, total);
//! logger::saved("Clean PNG", &settings.cutout);
//! ```

use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr, stdout},
    path::Path,
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown in verbose mode)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module, &module.to_ascii_lowercase());

    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "error" => prefix.bright_red().bold().to_string(),
        "proof" => prefix.bright_blue().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Confirmation Lines
// ============================================================================

/// Format the confirmation line for a written artifact.
fn saved_line(label: &str, path: &Path) -> String {
    format!("{label} saved to: {}", path.display())
}

/// Print `<label> saved to: <path>` on stdout, uncolored.
pub fn saved(label: &str, path: &Path) {
    let mut stdout = stdout().lock();
    writeln!(stdout, "{}", saved_line(label, path)).ok();
    stdout.flush().ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_line_format() {
        assert_eq!(
            saved_line("Clean PNG", Path::new("celebrate_final_clean.png")),
            "Clean PNG saved to: celebrate_final_clean.png"
        );
        assert_eq!(
            saved_line("Proof image", Path::new("celebrate_proof_preview.png")),
            "Proof image saved to: celebrate_proof_preview.png"
        );
    }

    #[test]
    fn test_prefix_contains_module_name() {
        let prefix = colorize_prefix("Error", "error");
        assert!(prefix.contains("[Error]"));
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
