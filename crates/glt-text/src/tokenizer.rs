//! The single-separator-aware token cursor.

/// An iterator over the tokens of a string, split on a separator set.
///
/// Matches the permissive tokenizer the original tool layered its split
/// routines on:
///
/// - With a non-empty separator set, each token is the prefix up to the
///   first separator character, and the cursor advances past that
///   separator. Consecutive separators yield empty tokens, and a
///   separator as the final character yields a trailing empty token —
///   `"a:"` tokenizes to `["a", ""]`.
/// - With no separator found before end-of-string, the remainder is the
///   final token and the cursor is exhausted.
/// - With an empty separator set, exactly one character is consumed per
///   token.
/// - The empty string yields one empty token, then exhaustion.
///
/// A yielded token never contains a separator character.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    rest: Option<&'a str>,
    separators: &'a str,
}

impl<'a> Tokenizer<'a> {
    /// Start a cursor over `input` with the given separator set.
    pub fn new(input: &'a str, separators: &'a str) -> Self {
        Self {
            rest: Some(input),
            separators,
        }
    }

    /// Consume and return the next token, or `None` once exhausted.
    pub fn next_token(&mut self) -> Option<&'a str> {
        let s = self.rest.take()?;

        if self.separators.is_empty() {
            // Single-character stepping.
            let end = match s.chars().next() {
                Some(c) => c.len_utf8(),
                None => return Some(""),
            };
            let remainder = &s[end..];
            if !remainder.is_empty() {
                self.rest = Some(remainder);
            }
            return Some(&s[..end]);
        }

        match s.char_indices().find(|(_, c)| self.separators.contains(*c)) {
            Some((pos, sep)) => {
                // Everything past the separator stays pending, even if
                // empty — a trailing separator means a trailing empty
                // token.
                self.rest = Some(&s[pos + sep.len_utf8()..]);
                Some(&s[..pos])
            }
            None => Some(s),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn collect(input: &str, seps: &str) -> Vec<String> {
        Tokenizer::new(input, seps).map(str::to_owned).collect()
    }

    #[test]
    fn basic_split() {
        assert_eq!(collect("a,b,c", ","), ["a", "b", "c"]);
    }

    #[test]
    fn consecutive_separators_yield_empty_tokens() {
        assert_eq!(collect("a::b", ":"), ["a", "", "b"]);
    }

    #[test]
    fn trailing_separator_yields_trailing_empty_token() {
        assert_eq!(collect("a:", ":"), ["a", ""]);
    }

    #[test]
    fn leading_separator_yields_leading_empty_token() {
        assert_eq!(collect(":a", ":"), ["", "a"]);
    }

    #[test]
    fn no_separator_returns_whole_input() {
        assert_eq!(collect("abc", ","), ["abc"]);
    }

    #[test]
    fn empty_input_yields_one_empty_token() {
        assert_eq!(collect("", ","), [""]);
        assert_eq!(collect("", ""), [""]);
    }

    #[test]
    fn multiple_separator_characters() {
        assert_eq!(collect("a,b;c", ",;"), ["a", "b", "c"]);
    }

    #[test]
    fn empty_separator_set_steps_single_characters() {
        assert_eq!(collect("abc", ""), ["a", "b", "c"]);
    }

    #[test]
    fn empty_separator_set_respects_char_boundaries() {
        assert_eq!(collect("aé", ""), ["a", "é"]);
    }

    #[test]
    fn next_token_exhausts() {
        let mut cursor = Tokenizer::new("a", ",");
        assert_eq!(cursor.next_token(), Some("a"));
        assert_eq!(cursor.next_token(), None);
        assert_eq!(cursor.next_token(), None);
    }

    proptest! {
        #[test]
        fn tokens_never_contain_separators(input in ".*") {
            for token in Tokenizer::new(&input, ",;") {
                prop_assert!(!token.contains(',') && !token.contains(';'));
            }
        }

        #[test]
        fn tokens_rejoin_to_input_for_single_separator(
            parts in prop::collection::vec("[a-z]{0,4}", 1..6),
        ) {
            let input = parts.join(",");
            let tokens: Vec<&str> = Tokenizer::new(&input, ",").collect();
            prop_assert_eq!(tokens.join(","), input);
        }
    }
}
