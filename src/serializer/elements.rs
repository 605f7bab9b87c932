
/// Elements that never have content or an end tag.
pub fn is_void(name: &str) -> bool {
    matches!(name,
             "area" | "base" | "basefont" | "bgsound" | "br" | "col" | "command" | "embed" |
             "frame" | "hr" | "img" | "input" | "keygen" | "link" | "meta" | "param" |
             "source" | "track" | "wbr")
}

/// Elements whose text children are written out unescaped.
pub fn is_raw_text(name: &str) -> bool {
    matches!(name,
             "style" | "script" | "xmp" | "iframe" | "noembed" | "noframes" | "noscript" |
             "plaintext")
}

/// Elements whose content starts with a line feed.
pub fn starts_with_newline(name: &str) -> bool {
    matches!(name, "pre" | "textarea" | "listing")
}
