//! URL Encoding

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped when encoding a URI component.
///
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped, so spaces become `%20` rather
/// than `+`.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a value for use as a query parameter or path segment.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(encode_component("a b,c&d=e/f?"), "a%20b%2Cc%26d%3De%2Ff%3F");
    }

    #[test]
    fn keeps_unreserved_marks() {
        assert_eq!(encode_component("I'm-here_(ok)!~*."), "I'm-here_(ok)!~*.");
    }

    #[test]
    fn encodes_non_ascii_as_utf8() {
        assert_eq!(encode_component("₹"), "%E2%82%B9");
    }
}
