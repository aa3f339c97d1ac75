//! Shared utility functions for code generation.

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

/// Names a generated identifier must not take: Python keywords, plus the
/// modules, helpers and context parameter used by the generated source.
const RESERVED: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "false", "finally", "for", "from", "global", "if", "import", "in", "is",
    "lambda", "none", "nonlocal", "not", "or", "pass", "raise", "return", "true", "try", "while",
    "with", "yield", "click", "logging", "ctx", "set_context_obj", "get_logger",
];

/// Convert a schema name into a source identifier.
///
/// Snake-cases the name, replaces anything that is not alphanumeric or an
/// underscore, and prefixes an underscore when the result would start
/// with a digit (e.g., "data-center" -> "data_center", "2fa" -> "_2fa").
/// Reserved names get a trailing underscore ("class" -> "class_").
pub fn to_identifier(name: &str) -> String {
    let snake: String = to_snake_case(name)
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    match snake.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{}", snake),
        None => "_".to_string(),
        _ if RESERVED.contains(&snake.as_str()) => format!("{}_", snake),
        _ => snake,
    }
}
