/// What: Escape text for safe insertion into HTML content or attribute values.
///
/// Inputs:
/// - `s`: Untrusted text.
///
/// Output:
/// - Text with `&`, `<`, `>`, `"` and `'` replaced by entities.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
