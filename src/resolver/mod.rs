//! Synonym resolution
//!
//! Combines the custom dictionary with an external source under a fixed
//! precedence rule.

mod engine;

pub use engine::{Lookup, ResolveOptions, Resolver};
