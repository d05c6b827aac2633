//! Values passed between templates and operations.

use indexmap::IndexMap;

/// A template value. `Null` stands for "absent".
pub type Value = serde_json::Value;

/// Keyword arguments of a single call site, in the order they were written.
pub type NamedArgs = IndexMap<String, Value>;

/// The string form of a value, as operations see it.
///
/// Strings are used as-is; everything else uses its JSON text, so `Null`
/// becomes `"null"` and `[1, 2]` becomes `"[1,2]"`.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Look up an argument, treating an explicit `Null` like a missing one.
pub(crate) fn arg<'a>(args: &'a NamedArgs, name: &str) -> Option<&'a Value> {
    args.get(name).filter(|value| !value.is_null())
}

/// String form of an argument, or `default` when it is missing.
pub(crate) fn string_arg(args: &NamedArgs, name: &str, default: &str) -> String {
    arg(args, name).map_or_else(|| default.to_string(), display_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_display_string() {
        assert_eq!(display_string(&json!("plain")), "plain");
        assert_eq!(display_string(&json!(42)), "42");
        assert_eq!(display_string(&json!(1.5)), "1.5");
        assert_eq!(display_string(&json!(true)), "true");
        assert_eq!(display_string(&Value::Null), "null");
        assert_eq!(display_string(&json!(["a", 1])), r#"["a",1]"#);
    }

    #[test]
    fn test_string_arg_defaults() {
        let mut args = NamedArgs::new();
        assert_eq!(string_arg(&args, "sep", ","), ",");

        args.insert("sep".to_string(), Value::Null);
        assert_eq!(string_arg(&args, "sep", ","), ",");

        args.insert("sep".to_string(), json!(" | "));
        assert_eq!(string_arg(&args, "sep", ","), " | ");

        args.insert("sep".to_string(), json!(0));
        assert_eq!(string_arg(&args, "sep", ","), "0");
    }
}
