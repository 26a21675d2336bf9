use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Use LeftmostLongest to ensure longer entities are matched first (e.g., &amp; instead of &lt;)
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("static entity patterns are valid")
});

/// Unescape XML special characters.
///
/// Replaces the five standard XML entities with their corresponding characters.
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use formfields::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;"); // &amp; is matched first
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;"); // unknown entity
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

/// Resolve the name of a general or character reference (the text between
/// `&` and `;`) to the character it stands for.
///
/// # Examples
///
/// ```
/// use formfields::common::xml::resolve_entity;
/// assert_eq!(resolve_entity(b"amp"), Some('&'));
/// assert_eq!(resolve_entity(b"#x41"), Some('A'));
/// assert_eq!(resolve_entity(b"#66"), Some('B'));
/// assert_eq!(resolve_entity(b"nbsp"), None);
/// assert_eq!(resolve_entity(b"#x+41"), None);
/// assert_eq!(resolve_entity(b"#+66"), None);
/// ```
pub fn resolve_entity(name: &[u8]) -> Option<char> {
    match name {
        b"amp" => Some('&'),
        b"lt" => Some('<'),
        b"gt" => Some('>'),
        b"quot" => Some('"'),
        b"apos" => Some('\''),
        [b'#', b'x' | b'X', hex @ ..] if hex.iter().all(u8::is_ascii_hexdigit) => {
            let hex = std::str::from_utf8(hex).ok()?;
            u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
        },
        [b'#', dec @ ..] if dec.iter().all(u8::is_ascii_digit) => {
            atoi_simd::parse::<u32>(dec).ok().and_then(char::from_u32)
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_entity_rejects_signs_and_garbage() {
        assert_eq!(resolve_entity(b"#x+41"), None);
        assert_eq!(resolve_entity(b"#x-41"), None);
        assert_eq!(resolve_entity(b"#+66"), None);
        assert_eq!(resolve_entity(b"#x"), None);
        assert_eq!(resolve_entity(b"#"), None);
        assert_eq!(resolve_entity(b"#xD800"), None);
        assert_eq!(resolve_entity(b"#x1F600"), Some('\u{1F600}'));
        assert_eq!(resolve_entity(b"#38"), Some('&'));
    }
}
