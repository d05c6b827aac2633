//! English noun inflection by suffix rules.
//!
//! Rules are tried in order and the first match wins. This is a heuristic for
//! regular nouns; irregular plurals (`child` / `children`) and Latin forms
//! (`analysis`) come out wrong and stay that way, since templates may rely on
//! the current output.

const VOWELS: &str = "aeiouAEIOU";

/// Pluralize a singular noun.
///
/// 1. consonant + `y` -> `ies` (`city` -> `cities`)
/// 2. `s`, `sh`, `ch` -> `+es` (`bus` -> `buses`)
/// 3. anything else -> `+s`
pub fn pluralize(word: &str) -> String {
    let mut chars = word.chars().rev();
    let last = chars.next();
    let before_last = chars.next();

    if let (Some('y' | 'Y'), Some(prev)) = (last, before_last)
        && !VOWELS.contains(prev)
    {
        return format!("{}ies", &word[..word.len() - 1]);
    }

    if word.ends_with('s') || word.ends_with("sh") || word.ends_with("ch") {
        format!("{}es", word)
    } else {
        format!("{}s", word)
    }
}

/// Singularize a plural noun.
///
/// 1. `ies` -> `y` (`cities` -> `city`)
/// 2. `es` -> drop (`buses` -> `bus`)
/// 3. `s` -> drop, unless the word is just `s`
/// 4. anything else is returned unchanged
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        format!("{}y", stem)
    } else if let Some(stem) = word.strip_suffix("es") {
        stem.to_string()
    } else if word.ends_with('s') && word.chars().nth(1).is_some() {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}
