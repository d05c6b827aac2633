//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod list;
mod output;

pub use list::{ListReport, OperationInfo};
pub use output::{Output, Report, TerminalOutput};
