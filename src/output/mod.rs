// Output formatting — terminal display and report files.

pub mod report;
pub mod terminal;

/// Shorten a path-like string to at most `max_chars` characters by keeping
/// the tail, with a "..." prefix when shortened.
///
/// Counts characters, not bytes, so multi-byte names never split a UTF-8
/// boundary. The head is dropped because long document ids (paths) differ
/// mostly at the end.
pub fn tail_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let keep = max_chars.saturating_sub(3);
        let tail: String = text.chars().skip(char_count - keep).collect();
        format!("...{tail}")
    }
}
