//! Command line cursor.
//!
//! Commands arrive as one line of text: a verb token followed by
//! verb-specific argument tokens and optional trailing free-form text. The
//! cursor peels whitespace-delimited tokens off the front and leaves the
//! trailing text untouched for whoever parses it.

/// A cursor over the unconsumed part of a command line.
#[derive(Clone, Copy, Debug)]
pub struct LineCursor<'a> {
    rest: &'a str,
}

impl<'a> LineCursor<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Take the next whitespace-delimited token, or `None` when the line is
    /// exhausted.
    pub fn next_token(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start();
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }
        let end = trimmed
            .find(|c: char| c.is_whitespace())
            .unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(end);
        self.rest = rest;
        Some(token)
    }

    /// Like [`next_token`], but a missing token is the empty string.
    ///
    /// [`next_token`]: LineCursor::next_token
    pub fn token_or_empty(&mut self) -> &'a str {
        self.next_token().unwrap_or("")
    }

    /// The unconsumed remainder of the line, leading whitespace included.
    pub fn rest(&self) -> &'a str {
        self.rest
    }

    /// Read a `Key=value` boolean flag from the unconsumed text.
    ///
    /// The key is matched case-insensitively. `true`, `yes`, `on` and `1`
    /// (any case) read as true; any other value reads as false. Returns
    /// `None` when the flag is absent.
    pub fn bool_flag(&self, key: &str) -> Option<bool> {
        for token in self.rest.split_whitespace() {
            let Some((name, value)) = token.split_once('=') else { continue };
            if name.eq_ignore_ascii_case(key) {
                return Some(
                    value.eq_ignore_ascii_case("true")
                        || value.eq_ignore_ascii_case("yes")
                        || value.eq_ignore_ascii_case("on")
                        || value == "1",
                );
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_and_rest() {
        let mut cursor = LineCursor::new("  AddObject /assets/cube Chair T=(1 2 3)");
        assert_eq!(cursor.next_token(), Some("AddObject"));
        assert_eq!(cursor.next_token(), Some("/assets/cube"));
        assert_eq!(cursor.next_token(), Some("Chair"));
        assert_eq!(cursor.rest(), " T=(1 2 3)");
    }

    #[test]
    fn test_exhausted_line_yields_none() {
        let mut cursor = LineCursor::new("  Verb  ");
        assert_eq!(cursor.next_token(), Some("Verb"));
        assert_eq!(cursor.next_token(), None);
        assert_eq!(cursor.token_or_empty(), "");
    }

    #[test]
    fn test_bool_flag_values() {
        let cursor = LineCursor::new("EditIfExists=False Other=1");
        assert_eq!(cursor.bool_flag("EditIfExists"), Some(false));
        assert_eq!(cursor.bool_flag("editifexists"), Some(false));
        assert_eq!(cursor.bool_flag("Other"), Some(true));
        assert_eq!(cursor.bool_flag("Missing"), None);
    }

    #[test]
    fn test_bool_flag_ignores_transform_groups() {
        let cursor = LineCursor::new("T=(1 2 3) EditIfExists=true");
        assert_eq!(cursor.bool_flag("EditIfExists"), Some(true));
    }
}
