//! Filters: operations applied to a piped input value.
//!
//! Every filter is total. A `Null` input passes through the text filters
//! untouched, so `{{ maybe_name | pascal }}` can be written without a guard.

use quire_text::{CaseStyle, pluralize, singularize};

use crate::{
    datetime::{self, DEFAULT_DATE_PATTERN},
    value::{NamedArgs, Value, arg, display_string, string_arg},
};

/// Separator used by `join` when none is given.
pub const DEFAULT_JOIN_SEPARATOR: &str = ",";

/// A registered filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// `kebab`, `snake`, `scream`, `camel`, `pascal`, `capitalize`, `slug`
    Case(CaseStyle),
    Lower,
    Upper,
    Plural,
    Singular,
    /// `default(value=...)`
    Default,
    /// `join(sep=",")`
    Join,
    /// `date(pattern="yyyy-MM-dd")`
    Date,
}

impl Filter {
    /// Every filter, in registration order.
    pub const ALL: [Filter; 14] = [
        Filter::Case(CaseStyle::Kebab),
        Filter::Case(CaseStyle::Snake),
        Filter::Case(CaseStyle::Scream),
        Filter::Case(CaseStyle::Camel),
        Filter::Case(CaseStyle::Pascal),
        Filter::Case(CaseStyle::Capitalize),
        Filter::Lower,
        Filter::Upper,
        Filter::Case(CaseStyle::Slug),
        Filter::Plural,
        Filter::Singular,
        Filter::Default,
        Filter::Join,
        Filter::Date,
    ];

    /// The name templates use to call this filter.
    pub fn name(self) -> &'static str {
        match self {
            Filter::Case(style) => style.name(),
            Filter::Lower => "lower",
            Filter::Upper => "upper",
            Filter::Plural => "plural",
            Filter::Singular => "singular",
            Filter::Default => "default",
            Filter::Join => "join",
            Filter::Date => "date",
        }
    }

    /// Keyword arguments this filter accepts, in positional order.
    pub fn argument_names(self) -> &'static [&'static str] {
        match self {
            Filter::Default => &["value"],
            Filter::Join => &["sep"],
            Filter::Date => &["pattern"],
            _ => &[],
        }
    }

    /// Apply the filter to `input`.
    pub fn apply(self, input: &Value, args: &NamedArgs) -> Value {
        match self {
            Filter::Case(style) => map_text(input, |s| style.render(s)),
            Filter::Lower => map_text(input, str::to_lowercase),
            Filter::Upper => map_text(input, str::to_uppercase),
            Filter::Plural => map_text(input, pluralize),
            Filter::Singular => map_text(input, singularize),
            Filter::Default => default(input, args),
            Filter::Join => join(input, &string_arg(args, "sep", DEFAULT_JOIN_SEPARATOR)),
            Filter::Date => {
                datetime::format_value(input, &string_arg(args, "pattern", DEFAULT_DATE_PATTERN))
            }
        }
    }
}

fn map_text(input: &Value, f: impl FnOnce(&str) -> String) -> Value {
    match input {
        Value::Null => Value::Null,
        Value::String(s) => Value::String(f(s)),
        other => Value::String(f(&display_string(other))),
    }
}

fn default(input: &Value, args: &NamedArgs) -> Value {
    if input.is_null() {
        arg(args, "value").cloned().unwrap_or(Value::Null)
    } else {
        input.clone()
    }
}

fn join(input: &Value, sep: &str) -> Value {
    match input {
        Value::Null => Value::Null,
        Value::Array(items) => Value::String(
            items
                .iter()
                .map(display_string)
                .collect::<Vec<_>>()
                .join(sep),
        ),
        other => Value::String(display_string(other)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn no_args() -> NamedArgs {
        NamedArgs::new()
    }

    fn args(pairs: &[(&str, Value)]) -> NamedArgs {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_case_filters() {
        let cases = [
            (CaseStyle::Kebab, "Foo Bar", "foo-bar"),
            (CaseStyle::Snake, "Foo Bar", "foo_bar"),
            (CaseStyle::Scream, "Foo Bar", "FOO_BAR"),
            (CaseStyle::Camel, "foo bar", "fooBar"),
            (CaseStyle::Pascal, "foo bar", "FooBar"),
            (CaseStyle::Capitalize, "hello", "Hello"),
            (CaseStyle::Slug, "Foo Bar!!", "foo-bar"),
        ];
        for (style, input, expected) in cases {
            assert_eq!(
                Filter::Case(style).apply(&json!(input), &no_args()),
                json!(expected),
                "{style}"
            );
        }
    }

    #[test]
    fn test_text_filters_pass_null_through() {
        for filter in Filter::ALL {
            if matches!(filter, Filter::Default | Filter::Date) {
                continue;
            }
            assert_eq!(filter.apply(&Value::Null, &no_args()), Value::Null, "{filter:?}");
        }
    }

    #[test]
    fn test_text_filters_use_string_form() {
        assert_eq!(Filter::Plural.apply(&json!(42), &no_args()), json!("42s"));
        assert_eq!(
            Filter::Upper.apply(&json!(true), &no_args()),
            json!("TRUE")
        );
        assert_eq!(
            Filter::Case(CaseStyle::Snake).apply(&json!(["a", "b"]), &no_args()),
            json!("a_b")
        );
    }

    #[test]
    fn test_lower_upper() {
        assert_eq!(Filter::Lower.apply(&json!("HeLLo"), &no_args()), json!("hello"));
        assert_eq!(Filter::Upper.apply(&json!("HeLLo"), &no_args()), json!("HELLO"));
    }

    #[test]
    fn test_inflection_filters() {
        assert_eq!(Filter::Plural.apply(&json!("city"), &no_args()), json!("cities"));
        assert_eq!(Filter::Singular.apply(&json!("cities"), &no_args()), json!("city"));
    }

    #[test]
    fn test_default() {
        let fallback = args(&[("value", json!("fallback"))]);
        assert_eq!(Filter::Default.apply(&Value::Null, &fallback), json!("fallback"));
        assert_eq!(Filter::Default.apply(&json!("set"), &fallback), json!("set"));
        // Falsy values are still present
        assert_eq!(Filter::Default.apply(&json!(""), &fallback), json!(""));
        assert_eq!(Filter::Default.apply(&json!(0), &fallback), json!(0));
        assert_eq!(Filter::Default.apply(&Value::Null, &no_args()), Value::Null);
    }

    #[test]
    fn test_join() {
        let values = json!(["a", "b", "c"]);
        assert_eq!(Filter::Join.apply(&values, &no_args()), json!("a,b,c"));
        assert_eq!(
            Filter::Join.apply(&values, &args(&[("sep", json!("_"))])),
            json!("a_b_c")
        );
        assert_eq!(
            Filter::Join.apply(&json!([1, null, true]), &args(&[("sep", json!(" "))])),
            json!("1 null true")
        );
        assert_eq!(Filter::Join.apply(&json!([]), &no_args()), json!(""));
    }

    #[test]
    fn test_join_non_collection() {
        assert_eq!(Filter::Join.apply(&json!("abc"), &no_args()), json!("abc"));
        assert_eq!(Filter::Join.apply(&json!(7), &no_args()), json!("7"));
        assert_eq!(
            Filter::Join.apply(&json!({"k": 1}), &no_args()),
            json!(r#"{"k":1}"#)
        );
    }

    #[test]
    fn test_date() {
        let input = json!("2024-01-15T10:30:00");
        assert_eq!(Filter::Date.apply(&input, &no_args()), json!("2024-01-15"));
        assert_eq!(
            Filter::Date.apply(&input, &args(&[("pattern", json!("dd.MM.yyyy HH:mm"))])),
            json!("15.01.2024 10:30")
        );
    }

    #[test]
    fn test_names_and_arguments() {
        let names: Vec<_> = Filter::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            [
                "kebab", "snake", "scream", "camel", "pascal", "capitalize", "lower", "upper",
                "slug", "plural", "singular", "default", "join", "date",
            ]
        );
        assert_eq!(Filter::Join.argument_names(), ["sep"]);
        assert!(Filter::Case(CaseStyle::Kebab).argument_names().is_empty());
    }
}
