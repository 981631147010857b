// Output formatting — terminal display and report generation.

pub mod markdown;
pub mod terminal;

/// Truncate to at most `max_chars` characters, appending "..." when cut.
///
/// Counts characters rather than slicing bytes, so multi-byte input (emoji,
/// CJK, accented text) can never cause a slice panic.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars).collect();
    format!("{kept}...")
}
