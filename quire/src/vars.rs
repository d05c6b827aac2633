//! Template variables from a TOML file and `--set` pairs.

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use quire_template::Value;
use thiserror::Error;

/// Result type for variable loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(quire::vars::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse variables file")]
    #[diagnostic(code(quire::vars::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid variable assignment '{assignment}'")]
    #[diagnostic(
        code(quire::vars::assignment),
        help("use KEY=VALUE, e.g. --set entity=order_item")
    )]
    InvalidAssignment { assignment: String },
}

/// Variables available to a template, in definition order.
#[derive(Debug, Default)]
pub struct Vars {
    values: serde_json::Map<String, Value>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load variables from a TOML file.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse variables from TOML source. `filename` is only used in errors.
    pub fn parse(content: &str, filename: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content).map_err(|source| {
            let span = source.span().map(SourceSpan::from);
            Box::new(Error::Parse {
                src: NamedSource::new(filename, content.to_string()),
                span,
                source,
            })
        })?;

        let values = table
            .into_iter()
            .map(|(key, value)| (key, toml_to_value(value)))
            .collect();
        Ok(Self { values })
    }

    /// Apply a `KEY=VALUE` assignment. The value is always a string.
    pub fn set(&mut self, assignment: &str) -> Result<()> {
        let invalid = || {
            Box::new(Error::InvalidAssignment {
                assignment: assignment.to_string(),
            })
        };
        let (key, value) = assignment.split_once('=').ok_or_else(invalid)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(invalid());
        }
        self.values
            .insert(key.to_string(), Value::String(value.to_string()));
        Ok(())
    }

    /// Consume into a template context object.
    pub fn into_context(self) -> Value {
        Value::Object(self.values)
    }
}

/// Convert a TOML value; datetimes become their RFC 3339 text so the `date`
/// filter can read them back.
fn toml_to_value(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Value::from(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_value).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_value(value)))
                .collect(),
        ),
    }
}
