// Text normalization — the first stage of the profiling pipeline.
//
// Every alphanumeric character is uppercased; everything else (punctuation,
// whitespace, control characters) collapses to a single space. Token
// boundaries survive as runs of spaces, so the profiler can split on
// whitespace without ever seeing punctuation.

/// Normalize raw text into canonical-case form.
///
/// Alphanumeric characters come through uppercased; every other character
/// becomes one space. For ASCII input the output length equals the input
/// length. Uppercasing is Unicode-aware, so the handful of characters with
/// multi-character uppercase forms (ß → SS) can lengthen non-ASCII text.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(' ');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folds_and_blanks_punctuation() {
        assert_eq!(normalize("AbC123!"), "ABC123 ");
    }

    #[test]
    fn test_length_preserved_for_ascii() {
        let input = "It was the best of times, it was the worst of times.";
        assert_eq!(normalize(input).len(), input.len());
    }

    #[test]
    fn test_every_non_alphanumeric_becomes_a_space() {
        assert_eq!(normalize("a-b_c.d"), "A B C D");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_unicode_letters_are_uppercased() {
        assert_eq!(normalize("café"), "CAFÉ");
    }
}
