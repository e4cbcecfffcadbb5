// src/core/html.rs
// Low-level HTML emit helpers. Deliberately naive: no attribute escaping,
// no entity encoding. Matches the legacy table generator byte for byte.

/// `<td>inner</td>`
pub fn td(inner: &str) -> String {
    join!("<td>", inner, "</td>")
}

/// `<td colspan="N">inner</td>`
pub fn td_span(span: usize, inner: &str) -> String {
    format!("<td colspan=\"{span}\">{inner}</td>")
}

/// `<img src="..."/>` with a relative path.
pub fn img(src: &str) -> String {
    join!("<img src=\"", src, "\"/>")
}

/// Remove all `<...>` tags, keeping inner text. Used to pull cell text
/// back out of rendered rows in tests and diagnostics.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
