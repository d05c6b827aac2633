//! Functions: operations called with keyword arguments only.

use uuid::Uuid;

use crate::{
    datetime::{self, DEFAULT_NOW_PATTERN},
    value::{NamedArgs, Value, string_arg},
};

/// A registered function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// `now(pattern="yyyy-MM-dd HH:mm")`
    Now,
    /// `uuid()`
    Uuid,
}

impl Function {
    /// Every function, in registration order.
    pub const ALL: [Function; 2] = [Function::Now, Function::Uuid];

    pub fn name(self) -> &'static str {
        match self {
            Function::Now => "now",
            Function::Uuid => "uuid",
        }
    }

    pub fn argument_names(self) -> &'static [&'static str] {
        match self {
            Function::Now => &["pattern"],
            Function::Uuid => &[],
        }
    }

    pub fn call(self, args: &NamedArgs) -> Value {
        match self {
            Function::Now => Value::String(datetime::now(&string_arg(
                args,
                "pattern",
                DEFAULT_NOW_PATTERN,
            ))),
            Function::Uuid => Value::String(Uuid::new_v4().to_string()),
        }
    }
}
