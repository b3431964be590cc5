//! memberships_import - Command-line bridge into the membership CSV
//! importer's admin form pipeline.
//!
//! The importer is only reachable through an admin web form. This crate
//! fabricates the request environment that form submission would have
//! produced and drives the handler's pipeline with it from a
//! non-interactive command line, relaying the handler's result messages
//! synchronously.
//!
//! # Features
//!
//! - **Upload simulation**: stages a local file as a temp copy with the
//!   shape and error vocabulary of a real multipart upload
//! - **Environment composition**: well-known form fields, synthesized
//!   authenticity token, configurable sub-environment precedence order
//! - **Dispatch and capture**: termination-callback reporting around a
//!   handler that never returns control normally
//! - **Structured logging**: text or JSON via tracing, kept off stdout
//!
//! # Architecture
//!
//! The handler boundary is the [`handler::ImportHandler`] trait:
//!
//! - `StubImportHandler` - built-in stand-in, surface validation only
//! - host crates embed their real handler and hand it to [`run_import`]
//!
//! # Example
//!
//! ```rust,ignore
//! use memberships_import::{run_import, Config};
//! use memberships_import::config::ImportOptions;
//! use memberships_import::core::ExecutionContext;
//! use memberships_import::handler::StubImportHandler;
//! use memberships_import::request::SessionNonce;
//!
//! let config = Config::from_env()?;
//! let nonce = SessionNonce::new(config.request.session_key.clone());
//! let handler = StubImportHandler::new(nonce.clone());
//! let code = run_import(
//!     handler,
//!     &ExecutionContext::from_env(),
//!     &ImportOptions::default(),
//!     "members.csv".as_ref(),
//!     &config,
//!     &nonce,
//!     &mut std::io::stdout(),
//!     &mut std::io::stderr(),
//! ).await;
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit hash (8 chars) with optional "-dirty" suffix
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Full version string: "0.1.0 (abc12345)" or "0.1.0 (abc12345-dirty)"
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_VERSION"), ")");

pub mod bridge;
pub mod cli;
pub mod config;
pub mod core;
pub mod handler;
pub mod logging;
pub mod request;
pub mod shutdown;
pub mod types;

// Re-exports for convenience
pub use bridge::{run_import, BridgeState, ImportBridge};
pub use config::Config;
