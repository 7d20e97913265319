//! Rules-text normalization ahead of regex matching.
//!
//! Service descriptions arrive with typographic quotes and embedded HTML-ish
//! markup. Downstream patterns match ASCII literals, so apostrophes are
//! normalized first; markup is left alone and the patterns tolerate it.

/// Replace typographic apostrophes with ASCII so literal-string matches
/// ("it can't take a reaction") line up with the source text.
pub fn normalize_apostrophes(text: &str) -> String {
    text.replace(['\u{2019}', '\u{2018}'], "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curly_apostrophes_become_ascii() {
        assert_eq!(
            normalize_apostrophes("it can\u{2019}t take a reaction"),
            "it can't take a reaction"
        );
    }

    #[test]
    fn ascii_text_passes_through() {
        assert_eq!(normalize_apostrophes("plain text"), "plain text");
    }
}
