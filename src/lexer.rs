use std::iter::Peekable;
use std::str::Chars;

/// Splits a line into lowercase ASCII-alphabetic tokens.
///
/// Every character that is neither an ASCII letter nor a space is deleted
/// before splitting, so `"whale's"` becomes `whales` and `"a\tb"` becomes
/// `ab`. Runs of spaces separate tokens and never yield an empty token.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.chars().peekable(),
        }
    }

    fn next_token(&mut self) -> Option<String> {
        loop {
            self.skip_spaces();
            self.chars.peek()?;
            let mut word = String::new();
            for c in self.chars.by_ref() {
                if c == ' ' {
                    break;
                }
                if c.is_ascii_alphabetic() {
                    word.push(c.to_ascii_lowercase());
                }
            }
            // a run of deleted characters between spaces
            if !word.is_empty() {
                return Some(word);
            }
        }
    }

    fn skip_spaces(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == ' ' {
                self.chars.next();
            } else {
                break;
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

pub fn tokenize(line: &str) -> Vec<String> {
    Lexer::new(line).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strips_punctuation_without_splitting() {
        assert_eq!(
            tokenize("The Whale's song, the WHALE!"),
            vec!["the", "whales", "song", "the", "whale"]
        );
    }

    #[test]
    fn blank_lines_have_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("     ").is_empty());
        assert!(tokenize(" ,;: !! ").is_empty());
    }

    #[test]
    fn leading_and_trailing_spaces_are_ignored() {
        assert_eq!(tokenize("  cat   dog  "), vec!["cat", "dog"]);
    }

    #[test]
    fn non_space_whitespace_is_deleted() {
        assert_eq!(tokenize("cat\tdog fish\r"), vec!["catdog", "fish"]);
    }

    #[test]
    fn digits_and_non_ascii_letters_are_deleted() {
        assert_eq!(tokenize("r2d2 café 42"), vec!["rd", "caf"]);
    }

    #[test]
    fn punctuation_between_spaces_is_not_a_token() {
        assert_eq!(tokenize("a - b"), vec!["a", "b"]);
    }
}
