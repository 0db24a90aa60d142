//! Small helpers shared by every view

/// Escape text for use in element content and quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Render a line of inline error text, or nothing
pub fn field_error(message: Option<&str>) -> String {
    match message {
        Some(message) => format!(r#"<p class="field-error">{}</p>"#, escape(message)),
        None => String::new(),
    }
}
