//! Text transformation engine for quire.
//!
//! This crate turns identifier-like strings into words and back:
//!
//! - [`tokenize`] splits `"HTMLParser v2"` into `["HTML", "Parser", "v", "2"]`
//! - [`CaseStyle`] joins those words as kebab, snake, camel, ... case
//! - [`pluralize`] / [`singularize`] apply English suffix rules
//!
//! Every function here is total: any string in, a string out.

mod case;
mod inflect;
mod token;

// Case styles
pub use case::{
    CaseStyle, ParseCaseStyleError, capitalize, render, slug, to_camel_case, to_kebab_case,
    to_pascal_case, to_scream_case, to_snake_case,
};
// Inflection
pub use inflect::{pluralize, singularize};
// Word segmentation
pub use token::{Token, Tokens, tokenize, tokens};
