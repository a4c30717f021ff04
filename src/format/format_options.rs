use std::borrow::Cow;

use crate::format::{is_reserved_word, is_valid_identifier};

/// Formatting policy applied when schema objects are rendered to text.
///
/// The policy is a single predicate deciding whether a word must be escaped.
/// Escaping itself is always the same: the word is wrapped in backticks and
/// embedded backticks are doubled. Schema types never quote on their own;
/// they hand every identifier through `escape`.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    should_escape: fn(&str) -> bool,
}

impl FormatOptions {
    /// Policy that performs no escaping at all.
    pub fn none() -> FormatOptions {
        FormatOptions { should_escape: |_| false }
    }

    /// Policy driven by a caller-supplied predicate.
    pub fn of(should_escape: fn(&str) -> bool) -> FormatOptions {
        FormatOptions { should_escape }
    }

    /// Policy that escapes reserved words and anything that is not a plain
    /// unquoted identifier.
    pub fn sql_safe() -> FormatOptions {
        FormatOptions::of(|word| is_reserved_word(word) || !is_valid_identifier(word))
    }

    pub fn should_escape(&self, word: &str) -> bool {
        (self.should_escape)(word)
    }

    /// Render a single identifier under this policy.
    pub fn escape<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if (self.should_escape)(word) {
            Cow::Owned(format!("`{}`", word.replace('`', "``")))
        } else {
            Cow::Borrowed(word)
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_never_escapes() {
        let options = FormatOptions::none();

        assert_eq!(options.escape("select"), "select");
        assert_eq!(options.escape("has space"), "has space");
        assert_eq!(options.escape(""), "");
    }

    #[test]
    fn test_sql_safe_escapes_reserved_words() {
        let options = FormatOptions::sql_safe();

        assert_eq!(options.escape("select"), "`select`");
        assert_eq!(options.escape("FROM"), "`FROM`");
        assert_eq!(options.escape("orders"), "orders");
    }

    #[test]
    fn test_sql_safe_escapes_invalid_identifiers() {
        let options = FormatOptions::sql_safe();

        assert_eq!(options.escape("9column"), "`9column`");
        assert_eq!(options.escape("has space"), "`has space`");
        assert_eq!(options.escape(""), "``");
    }

    #[test]
    fn test_escape_doubles_embedded_backticks() {
        let options = FormatOptions::sql_safe();

        assert_eq!(options.escape("we`ird"), "`we``ird`");
    }

    #[test]
    fn test_custom_predicate() {
        let options = FormatOptions::of(|word| word == "id");

        assert_eq!(options.escape("id"), "`id`");
        assert_eq!(options.escape("name"), "name");
    }
}
