//! Case styles built on word segmentation.

use std::{fmt, str::FromStr};

use crate::token::{Token, tokens};

/// A named way of joining words back into a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    /// `foo-bar`
    Kebab,
    /// `foo_bar`
    Snake,
    /// `FOO_BAR`
    Scream,
    /// `fooBar`
    Camel,
    /// `FooBar`
    Pascal,
    /// `Foo bar` (first character only, no segmentation)
    Capitalize,
    /// `foo-bar`, restricted to `[a-z0-9-]`
    Slug,
}

impl CaseStyle {
    /// Every style, in registration order.
    pub const ALL: [CaseStyle; 7] = [
        CaseStyle::Kebab,
        CaseStyle::Snake,
        CaseStyle::Scream,
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Capitalize,
        CaseStyle::Slug,
    ];

    /// The lower-case name used in templates and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            CaseStyle::Kebab => "kebab",
            CaseStyle::Snake => "snake",
            CaseStyle::Scream => "scream",
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Capitalize => "capitalize",
            CaseStyle::Slug => "slug",
        }
    }

    /// Render `input` in this style.
    pub fn render(self, input: &str) -> String {
        match self {
            CaseStyle::Kebab => to_kebab_case(input),
            CaseStyle::Snake => to_snake_case(input),
            CaseStyle::Scream => to_scream_case(input),
            CaseStyle::Camel => to_camel_case(input),
            CaseStyle::Pascal => to_pascal_case(input),
            CaseStyle::Capitalize => capitalize(input),
            CaseStyle::Slug => slug(input),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown case style name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown case style '{name}' (expected one of: kebab, snake, scream, camel, pascal, capitalize, slug)")]
pub struct ParseCaseStyleError {
    name: String,
}

impl FromStr for CaseStyle {
    type Err = ParseCaseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| ParseCaseStyleError {
                name: s.to_string(),
            })
    }
}

/// Render `input` in `style`. Shorthand for [`CaseStyle::render`].
pub fn render(style: CaseStyle, input: &str) -> String {
    style.render(input)
}

fn join_mapped(input: &str, sep: &str, f: impl Fn(&Token<'_>) -> String) -> String {
    tokens(input).map(|t| f(&t)).collect::<Vec<_>>().join(sep)
}

/// Upper-case the first character, keep the rest as written.
fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert to kebab-case (e.g., "HelloWorld" -> "hello-world")
pub fn to_kebab_case(input: &str) -> String {
    join_mapped(input, "-", |t| t.to_ascii_lowercase())
}

/// Convert to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(input: &str) -> String {
    join_mapped(input, "_", |t| t.to_ascii_lowercase())
}

/// Convert to SCREAMING_SNAKE_CASE (e.g., "helloWorld" -> "HELLO_WORLD")
pub fn to_scream_case(input: &str) -> String {
    join_mapped(input, "_", |t| t.to_ascii_uppercase())
}

/// Convert to camelCase (e.g., "hello_world" -> "helloWorld")
///
/// Only the first character of each later word is touched, so acronyms
/// survive: `"html_HTTPServer"` becomes `"htmlHTTPServer"`.
pub fn to_camel_case(input: &str) -> String {
    let mut words = tokens(input);
    let Some(first) = words.next() else {
        return String::new();
    };
    let mut result = first.to_ascii_lowercase();
    for word in words {
        result.push_str(&upper_first(&word));
    }
    result
}

/// Convert to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(input: &str) -> String {
    tokens(input).map(|t| upper_first(&t)).collect()
}

/// Upper-case the first character of the trimmed input if it is lower-case.
///
/// No segmentation happens; separators and the rest of the string are kept.
pub fn capitalize(input: &str) -> String {
    let trimmed = input.trim();
    match trimmed.chars().next() {
        Some(c) if c.is_lowercase() => upper_first(trimmed),
        _ => trimmed.to_string(),
    }
}

/// Convert to a URL slug (e.g., "Foo Bar!!" -> "foo-bar")
pub fn slug(input: &str) -> String {
    tokens(input)
        .map(|t| {
            t.chars()
                .map(|c| c.to_ascii_lowercase())
                .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
