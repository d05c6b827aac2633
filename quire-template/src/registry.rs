//! Name -> operation lookup for template evaluators.
//!
//! The table is built on first use and never changes afterwards, so it can
//! be shared freely between threads.
//!
//! # Example
//!
//! ```
//! use quire_template::{NamedArgs, Value, resolve};
//!
//! let kebab = resolve("kebab").unwrap();
//! let out = kebab.invoke(&Value::from("HelloWorld"), &NamedArgs::new());
//! assert_eq!(out, Value::from("hello-world"));
//!
//! assert!(resolve("Kebab").is_none());
//! ```

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::{
    filters::Filter,
    functions::Function,
    value::{NamedArgs, Value},
};

/// A callable entry in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Takes a piped input plus keyword arguments.
    Filter(Filter),
    /// Takes keyword arguments only.
    Function(Function),
}

impl Operation {
    /// Registered name.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Filter(filter) => filter.name(),
            Operation::Function(function) => function.name(),
        }
    }

    /// Accepted keyword arguments, in positional order.
    pub fn argument_names(self) -> &'static [&'static str] {
        match self {
            Operation::Filter(filter) => filter.argument_names(),
            Operation::Function(function) => function.argument_names(),
        }
    }

    /// Whether this is a filter.
    pub fn is_filter(self) -> bool {
        matches!(self, Operation::Filter(_))
    }

    /// Run the operation. Functions ignore `input`.
    pub fn invoke(self, input: &Value, args: &NamedArgs) -> Value {
        match self {
            Operation::Filter(filter) => filter.apply(input, args),
            Operation::Function(function) => function.call(args),
        }
    }
}

/// The table of every operation, keyed by name.
#[derive(Debug)]
pub struct Registry {
    operations: IndexMap<&'static str, Operation>,
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::build);

impl Registry {
    fn build() -> Self {
        let operations = Filter::ALL
            .into_iter()
            .map(Operation::Filter)
            .chain(Function::ALL.into_iter().map(Operation::Function))
            .map(|op| (op.name(), op))
            .collect();
        Self { operations }
    }

    /// The process-wide registry.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Look up an operation by its exact, case-sensitive name.
    pub fn resolve(&self, name: &str) -> Option<Operation> {
        self.operations.get(name).copied()
    }

    /// All operations in registration order: filters first, then functions.
    pub fn iter(&self) -> impl Iterator<Item = Operation> + '_ {
        self.operations.values().copied()
    }

    /// Registered filters in order.
    pub fn filters(&self) -> impl Iterator<Item = Filter> + '_ {
        self.iter().filter_map(|op| match op {
            Operation::Filter(filter) => Some(filter),
            Operation::Function(_) => None,
        })
    }

    /// Registered functions in order.
    pub fn functions(&self) -> impl Iterator<Item = Function> + '_ {
        self.iter().filter_map(|op| match op {
            Operation::Function(function) => Some(function),
            Operation::Filter(_) => None,
        })
    }
}

/// Look up an operation in the global registry.
pub fn resolve(name: &str) -> Option<Operation> {
    Registry::global().resolve(name)
}
