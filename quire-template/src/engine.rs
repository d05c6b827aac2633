//! minijinja integration.
//!
//! Template parsing and evaluation belong to minijinja. This module only
//! registers every [`Operation`] under its name and converts values at the
//! boundary:
//!
//! ```
//! let out = quire_template::render_str(
//!     "{{ 'hello world' | kebab }} {{ 'user_name' | camel }} {{ 'test' | plural }}",
//!     serde_json::json!({}),
//! )
//! .unwrap();
//! assert_eq!(out, "hello-world userName tests");
//! ```
//!
//! Arguments bind to [`Operation::argument_names`], positionally in that
//! order or by keyword, so `join('_')` and `join(sep='_')` are the same call.
//! Extra positionals, unknown keywords and a name given both ways are render
//! errors.
//!
//! An absent input stays absent through a filter, and `none` renders as
//! nothing, so `{{ missing | pascal }}` writes an empty string.

use minijinja::{
    AutoEscape, Environment, ErrorKind, Output, State,
    value::{Kwargs, Rest, Value as JinjaValue},
};
use serde::Serialize;

use crate::{
    Result,
    registry::{Operation, Registry},
    value::{NamedArgs, Value},
};

type JinjaResult<T> = std::result::Result<T, minijinja::Error>;

/// Renders templates with every quire operation available.
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            env: environment(),
        }
    }

    /// Render an inline template.
    pub fn render_str<S: Serialize>(&self, source: &str, context: S) -> Result<String> {
        Ok(self.env.render_str(source, context)?)
    }

    /// Render an inline template, using `name` in error messages.
    pub fn render_named_str<S: Serialize>(
        &self,
        name: &str,
        source: &str,
        context: S,
    ) -> Result<String> {
        Ok(self.env.render_named_str(name, source, context)?)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render an inline template with a fresh [`Renderer`].
pub fn render_str<S: Serialize>(source: &str, context: S) -> Result<String> {
    Renderer::new().render_str(source, context)
}

/// A minijinja environment with all operations registered.
///
/// Output is never auto-escaped, whatever the template's extension, and
/// trailing newlines are kept so generated files end the way their
/// templates do.
pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env.set_formatter(format_value);
    register(&mut env);
    env
}

fn format_value(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &JinjaValue,
) -> JinjaResult<()> {
    if value.is_none() {
        return Ok(());
    }
    minijinja::escape_formatter(out, state, value)
}

/// Register every operation on `env`, replacing built-ins with the same name.
pub fn register(env: &mut Environment<'_>) {
    for op in Registry::global().iter() {
        match op {
            Operation::Filter(filter) => env.add_filter(
                filter.name(),
                move |input: JinjaValue,
                      positional: Rest<JinjaValue>,
                      kwargs: Kwargs|
                      -> JinjaResult<JinjaValue> {
                    let args = bind_args(op, &positional, &kwargs)?;
                    if input.is_undefined() {
                        let out = filter.apply(&Value::Null, &args);
                        return Ok(if out.is_null() {
                            JinjaValue::UNDEFINED
                        } else {
                            to_jinja(&out)
                        });
                    }
                    Ok(to_jinja(&filter.apply(&from_jinja(&input)?, &args)))
                },
            ),
            Operation::Function(function) => env.add_function(
                function.name(),
                move |positional: Rest<JinjaValue>, kwargs: Kwargs| -> JinjaResult<JinjaValue> {
                    let args = bind_args(op, &positional, &kwargs)?;
                    Ok(to_jinja(&function.call(&args)))
                },
            ),
        }
    }
}

/// Bind positional then keyword arguments onto the operation's argument names.
fn bind_args(
    op: Operation,
    positional: &[JinjaValue],
    kwargs: &Kwargs,
) -> JinjaResult<NamedArgs> {
    let names = op.argument_names();
    if positional.len() > names.len() {
        return Err(minijinja::Error::new(
            ErrorKind::TooManyArguments,
            format!(
                "`{}` takes at most {} positional argument(s)",
                op.name(),
                names.len()
            ),
        ));
    }

    let mut args = NamedArgs::new();
    for (&name, value) in names.iter().zip(positional) {
        if kwargs.has(name) {
            return Err(minijinja::Error::new(
                ErrorKind::InvalidOperation,
                format!("`{}` got argument `{name}` both by position and by keyword", op.name()),
            ));
        }
        args.insert(name.to_string(), from_jinja(value)?);
    }
    for &name in &names[positional.len()..] {
        if let Some(value) = kwargs.get::<Option<JinjaValue>>(name)? {
            args.insert(name.to_string(), from_jinja(&value)?);
        }
    }
    kwargs.assert_all_used()?;
    Ok(args)
}

fn from_jinja(value: &JinjaValue) -> JinjaResult<Value> {
    serde_json::to_value(value).map_err(|err| {
        minijinja::Error::new(
            ErrorKind::InvalidOperation,
            "value cannot be passed to a quire operation",
        )
        .with_source(err)
    })
}

fn to_jinja(value: &Value) -> JinjaValue {
    JinjaValue::from_serialize(value)
}
