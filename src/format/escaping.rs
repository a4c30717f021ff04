use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern for identifiers that can appear unquoted in rendered SQL text.
static UNQUOTED_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Keywords that must be quoted when used as identifiers.
static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ALL", "AND", "ANY", "AS", "ASC", "BETWEEN", "BY", "CASE", "CAST",
        "CREATE", "CROSS", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE",
        "END", "EXISTS", "FALSE", "FROM", "FULL", "GROUP", "HAVING", "IN",
        "INNER", "INSERT", "INTO", "IS", "JOIN", "LEFT", "LIKE", "LIMIT",
        "NOT", "NULL", "OFFSET", "ON", "OR", "ORDER", "OUTER", "RIGHT",
        "SELECT", "SET", "TABLE", "THEN", "TRUE", "UNION", "UPDATE",
        "VALUES", "WHEN", "WHERE", "WITH",
    ]
    .into_iter()
    .collect()
});

/// Check whether a word matches the unquoted identifier pattern.
pub fn is_valid_identifier(word: &str) -> bool {
    UNQUOTED_IDENTIFIER.is_match(word)
}

/// Check whether a word is a reserved SQL keyword, ignoring case.
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word.to_ascii_uppercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("column"));
        assert!(is_valid_identifier("column_01"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("C"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("9column"));
        assert!(!is_valid_identifier("has space"));
        assert!(!is_valid_identifier("has-dash"));
        assert!(!is_valid_identifier("dotted.name"));
    }

    #[test]
    fn test_reserved_words_ignore_case() {
        assert!(is_reserved_word("SELECT"));
        assert!(is_reserved_word("select"));
        assert!(is_reserved_word("From"));
        assert!(!is_reserved_word("orders"));
    }
}
