// src/core/sanitize.rs

/// Remove every comma from a pattern name. This is the only transform
/// applied before the name lands in an image path; spaces and anything
/// else pass through untouched.
pub fn strip_commas(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch != ',' { out.push(ch); }
    }
    out
}

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}
