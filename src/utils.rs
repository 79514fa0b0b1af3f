//! Utility functions for user interaction and common operations.

/// Format the pre-deletion announcement with the full selected file list
pub fn format_selection_message(names: &[String]) -> String {
    let mut message = format!(
        "\nThe following {} file(s) will be permanently deleted:\n",
        names.len()
    );
    for name in names {
        message.push_str(&format!("  - {name}\n"));
    }
    message
}
