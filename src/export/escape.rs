//! Pure escaping utilities shared by the exporters.

use std::borrow::Cow;

/// Escape text for inclusion in HTML or Markdown.
///
/// # Examples
///
/// ```
/// use highlight_hop::export::escape_html;
///
/// assert_eq!(escape_html("<b>\"it's\"</b>"), "&lt;b&gt;&quot;it&#039;s&quot;&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render one CSV field.
///
/// Fields containing a comma, a double quote or a newline are wrapped in
/// double quotes, with quotes doubled and newlines written as the two
/// characters `\n`. Other fields are returned unchanged.
///
/// # Examples
///
/// ```
/// use highlight_hop::export::escape_csv_field;
///
/// assert_eq!(escape_csv_field("plain"), "plain");
/// assert_eq!(escape_csv_field("a, b"), "\"a, b\"");
/// assert_eq!(escape_csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
/// ```
pub fn escape_csv_field(field: &str) -> Cow<'_, str> {
    if !field.contains([',', '"', '\n']) {
        return Cow::Borrowed(field);
    }

    let mut result = String::with_capacity(field.len() + 2);
    result.push('"');
    for c in field.chars() {
        match c {
            '"' => result.push_str("\"\""),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }
    result.push('"');
    Cow::Owned(result)
}
