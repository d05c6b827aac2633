//! List command report data structures.

use quire_template::{Operation, Registry};

use super::output::{Output, Report};

/// Report data from listing the registry.
#[derive(Debug)]
pub struct ListReport {
    /// Registered filters.
    pub filters: Vec<OperationInfo>,
    /// Registered functions.
    pub functions: Vec<OperationInfo>,
}

/// One registry entry.
#[derive(Debug)]
pub struct OperationInfo {
    /// Name used in templates.
    pub name: &'static str,
    /// Accepted keyword arguments.
    pub arguments: &'static [&'static str],
    /// Filters are piped into; functions are called.
    pub is_filter: bool,
}

impl OperationInfo {
    /// Call-site signature, e.g. `join(sep)` or `uuid()`.
    pub fn signature(&self) -> String {
        if self.is_filter && self.arguments.is_empty() {
            self.name.to_string()
        } else {
            format!("{}({})", self.name, self.arguments.join(", "))
        }
    }
}

impl From<Operation> for OperationInfo {
    fn from(op: Operation) -> Self {
        Self {
            name: op.name(),
            arguments: op.argument_names(),
            is_filter: op.is_filter(),
        }
    }
}

impl ListReport {
    pub fn from_registry(registry: &Registry) -> Self {
        let (filters, functions): (Vec<_>, Vec<_>) =
            registry.iter().partition(|op| op.is_filter());
        Self {
            filters: filters.into_iter().map(OperationInfo::from).collect(),
            functions: functions.into_iter().map(OperationInfo::from).collect(),
        }
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Filters");
        for info in &self.filters {
            out.list_item(&info.signature());
        }
        out.newline();
        out.section("Functions");
        for info in &self.functions {
            out.list_item(&info.signature());
        }
    }
}
