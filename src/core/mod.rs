//! Core request-context and error types.

pub mod context;
pub mod error;

pub use context::{ExecutionContext, RequestContext};
pub use error::{Error, Result};
