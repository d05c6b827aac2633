//! Word segmentation for identifier-like strings.
//!
//! Input is scanned once, byte by byte. Runs of ASCII letters and digits are
//! candidate words; everything else (whitespace, `-`, `_`, punctuation,
//! non-ASCII) separates them. Inside a run a new word starts at:
//!
//! - a lowercase letter followed by an uppercase one (`fooBar` -> `foo|Bar`)
//! - an uppercase letter followed by an uppercase-lowercase pair
//!   (`HTMLParser` -> `HTML|Parser`)
//! - a letter/digit transition in either direction (`v2Config` -> `v|2|Config`)

use std::{fmt, iter::FusedIterator, ops::Deref, ops::Range};

/// A single word produced by [`tokenize`].
///
/// Borrows from the input and remembers where it was found. The text is never
/// empty and only contains ASCII letters and digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    text: &'a str,
    start: usize,
}

impl<'a> Token<'a> {
    /// The word itself.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte range of this word in the original input.
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }
}

impl Deref for Token<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        self.text
    }
}

impl AsRef<str> for Token<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

/// Lazy iterator over the words of a string. Created by [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.input.as_bytes();

        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_alphanumeric() {
            self.pos += 1;
        }
        if self.pos == bytes.len() {
            return None;
        }

        let start = self.pos;
        self.pos += 1;
        while self.pos < bytes.len()
            && bytes[self.pos].is_ascii_alphanumeric()
            && !is_boundary(bytes, self.pos)
        {
            self.pos += 1;
        }

        // Both ends sit next to ASCII bytes, so the slice is on char boundaries.
        Some(Token {
            text: &self.input[start..self.pos],
            start,
        })
    }
}

impl FusedIterator for Tokens<'_> {}

/// Whether a new word starts at `i`, given that `i - 1` and `i` are both
/// alphanumeric.
fn is_boundary(bytes: &[u8], i: usize) -> bool {
    let prev = bytes[i - 1];
    let cur = bytes[i];

    if prev.is_ascii_lowercase() && cur.is_ascii_uppercase() {
        return true;
    }
    if prev.is_ascii_uppercase()
        && cur.is_ascii_uppercase()
        && bytes.get(i + 1).is_some_and(u8::is_ascii_lowercase)
    {
        return true;
    }
    prev.is_ascii_digit() != cur.is_ascii_digit()
}

/// Iterate over the words of `input` without allocating.
pub fn tokens(input: &str) -> Tokens<'_> {
    Tokens { input, pos: 0 }
}

/// Split `input` into words.
///
/// Separator-only or empty input gives an empty vector.
///
/// ```
/// let words: Vec<_> = quire_text::tokenize("HTMLParser")
///     .iter()
///     .map(|t| t.as_str())
///     .collect();
/// assert_eq!(words, ["HTML", "Parser"]);
/// ```
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    tokens(input).collect()
}
