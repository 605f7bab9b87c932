
/// Entities that an ampersand may already introduce. These are left alone
/// so that markup which was escaped once does not get escaped again.
const KNOWN_ENTITIES: [&str; 5] = ["amp;", "gt;", "lt;", "quot;", "nbsp;"];

/// Escapes text content.
///
/// # Example
///
///     use htmlfrag::escape_text;
///
///     assert_eq!(escape_text("a < b &amp; c"), "a &lt; b &amp; c");
pub fn escape_text(value: &str) -> String {
    escape(value, false)
}

/// Escapes an attribute value, which is always written inside double quotes.
pub fn escape_attribute(value: &str) -> String {
    escape(value, true)
}

fn escape(value: &str, attr_mode: bool) -> String {
    let mut escaped = String::with_capacity(value.len());

    for (i, c) in value.char_indices() {
        match c {
            '&' if starts_with_entity(&value[i + 1..]) => escaped.push('&'),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            '"' if attr_mode => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }

    escaped
}

fn starts_with_entity(rest: &str) -> bool {
    KNOWN_ENTITIES.iter().any(|entity| {
        rest.get(..entity.len())
            .map_or(false, |head| head.eq_ignore_ascii_case(entity))
    })
}
