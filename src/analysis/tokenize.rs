/// Lazy iterator over the word tokens of a lower-cased piece of text.
///
/// The whole text is lower-cased up front; a token is then a maximal run of
/// word characters (alphanumerics and `_`) in that lower-cased text.
/// Clone the iterator to walk the same text again from the current position.
#[derive(Debug, Clone, Default)]
pub struct Tokens {
    text: String,
    pos: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl Iterator for Tokens {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let rest = &self.text[self.pos..];
        let start = rest.find(is_word_char)?;
        let tail = &rest[start..];
        let len = tail.find(|c: char| !is_word_char(c)).unwrap_or(tail.len());
        let word = tail[..len].to_string();
        self.pos += start + len;
        Some(word)
    }
}

/// Split `text` into lower-case word tokens, left to right.
///
/// Accepts `&str` or `Option<&str>`; `None` yields nothing.
pub fn tokenize<'a>(text: impl Into<Option<&'a str>>) -> Tokens {
    Tokens {
        text: text.into().map(str::to_lowercase).unwrap_or_default(),
        pos: 0,
    }
}
