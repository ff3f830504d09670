//! POSIX shell escaping for command arguments.

/// Escape `input` so a POSIX shell reads it back as one word.
///
/// Characters outside `[A-Za-z0-9_\-.,:+/@]` get a backslash, newlines are
/// wrapped in single quotes and the empty string becomes `''`.
pub fn shell_escape(input: &str) -> String {
    if input.is_empty() {
        return "''".to_string();
    }

    let mut escaped = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        match c {
            '\n' => escaped.push_str("'\n'"),
            c if is_safe(c) => escaped.push(c),
            c => {
                escaped.push('\\');
                escaped.push(c);
            }
        }
    }
    escaped
}

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ',' | ':' | '+' | '/' | '@')
}
