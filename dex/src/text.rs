//! Display helpers

use crate::error::MAX_ERROR_LEN;

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cut a message down to [`MAX_ERROR_LEN`] characters for display
pub fn truncate_message(message: &str) -> String {
    message.chars().take(MAX_ERROR_LEN).collect()
}
