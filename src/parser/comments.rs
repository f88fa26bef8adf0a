//! Comment removal, the pre-lexing pass.

/// Truncates each line at its first `#`. Runs before the lexer, so a `#`
/// inside a string literal also starts a comment; that is the documented
/// behavior of the language.
pub fn strip_comments(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| match line.find('#') {
            Some(position) => line[..position].to_string(),
            None => line.clone(),
        })
        .collect()
}
