const INDENT_UNIT: &str = "  ";

/// Uppercase the first character of `text` (e.g. `getUser` -> `GetUser`).
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Prefix `text` with `depth` levels of two-space indentation.
pub(crate) fn indent(text: &str, depth: usize) -> String {
    format!("{}{text}", INDENT_UNIT.repeat(depth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_lowercase_first_char() {
        assert_eq!(capitalize("getUser"), "GetUser");
    }

    #[test]
    fn capitalize_already_capitalized() {
        assert_eq!(capitalize("GetUser"), "GetUser");
    }

    #[test]
    fn capitalize_empty_string() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn indent_depths() {
        assert_eq!(indent("x", 0), "x");
        assert_eq!(indent("x", 1), "  x");
        assert_eq!(indent("x", 3), "      x");
    }
}
