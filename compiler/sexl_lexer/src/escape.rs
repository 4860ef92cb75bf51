//! String literal unescaping.
//!
//! Only two escapes are resolved: `\"` → `"` and `\\` → `\`. Any other
//! backslash sequence (`\n`, `\t`, `\u`, …) is kept verbatim, backslash
//! included.

/// Resolve the escapes in a string literal's content (between the quotes).
pub(crate) fn unescape_string(content: &str) -> String {
    if !content.contains('\\') {
        return content.to_string();
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}
