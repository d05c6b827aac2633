//! Template operations for quire.
//!
//! This crate exposes the text engine from `quire-text` (plus a few small
//! helpers) as named operations a template evaluator can call.
//!
//! # Module Organization
//!
//! - [`registry`] - The name -> operation table ([`Registry`], [`Operation`])
//! - [`filters`] - Operations applied to a piped value (`{{ name | kebab }}`)
//! - [`functions`] - Operations called without input (`{{ uuid() }}`)
//! - [`datetime`] - `yyyy-MM-dd` style date patterns
//! - [`engine`] - minijinja environment with every operation registered

pub mod datetime;
pub mod engine;
pub mod filters;
pub mod functions;
pub mod registry;

mod error;
mod value;

pub use engine::{Renderer, render_str};
pub use error::{Error, Result};
pub use filters::Filter;
pub use functions::Function;
pub use registry::{Operation, Registry, resolve};
pub use value::{NamedArgs, Value, display_string};
