//! Markup detection
//!
//! Decides whether a string handed to the query constructor is a markup
//! fragment or a selector.

/// Check whether `text` looks like markup rather than a selector
///
/// Strings that start with `<` and end with `>` are markup. Otherwise the
/// text is markup if some `<...>` span (at least one character inside) is
/// preceded only by characters other than `#` and `<`.
pub fn is_html(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() >= 3 && bytes[0] == b'<' && bytes[bytes.len() - 1] == b'>' {
        return true;
    }

    // An id selector can never be markup
    let Some(open) = text.find(['<', '#']) else {
        return false;
    };
    if bytes[open] != b'<' {
        return false;
    }
    text.rfind('>').is_some_and(|close| close > open + 1)
}
