//! Text pre-processing.
//!
//! Two distinct concerns with different contracts:
//! - [`sanitize_text`] rewrites the text that gets *rendered*. Optional,
//!   controlled by `Config::sanitize_text`.
//! - [`filename_for`] produces the attachment filename used in the
//!   `Content-Disposition` header. Always applied; a header must never carry
//!   quotes, control bytes, or separators regardless of the toggle.

/// Replace path-separator characters with `_` in the decoded text.
pub fn sanitize_text(raw: &str) -> String {
    raw.replace(['/', '\\'], "_")
}

/// Map `text` to a header-safe attachment filename (without extension).
///
/// Quotes, control characters, path separators, and non-ASCII bytes are all
/// replaced with `_`; HTTP header values are ASCII-only.
pub fn filename_for(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_graphic() || c == ' ' {
                match c {
                    '"' | '/' | '\\' => '_',
                    other => other,
                }
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello", "hello")]
    #[case("a/b", "a_b")]
    #[case("a\\b", "a_b")]
    #[case("/leading", "_leading")]
    #[case("no separators here", "no separators here")]
    fn sanitize_replaces_path_separators(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_text(input), expected);
    }

    #[rstest]
    #[case("hello", "hello")]
    #[case("with space", "with space")]
    #[case("quo\"te", "quo_te")]
    #[case("new\nline", "new_line")]
    #[case("tab\there", "tab_here")]
    #[case("a/b\\c", "a_b_c")]
    #[case("naïve", "na_ve")]
    fn filename_is_header_safe(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(filename_for(input), expected);
    }

    #[test]
    fn filename_output_is_always_ascii_printable() {
        let name = filename_for("☃ weird \u{7f} input\r\n");
        assert!(name
            .chars()
            .all(|c| c.is_ascii_graphic() || c == ' '));
    }
}
