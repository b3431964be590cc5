//! Synthetic request composition.
//!
//! Builds the in-memory request environment the import handler expects from
//! a form submission: staged upload, body fields under their well-known
//! names, authenticity token, and the merged aggregate view.

pub mod aggregate;
pub mod compose;
pub mod fields;
pub mod nonce;
pub mod upload;

pub use aggregate::AggregateRequestView;
pub use compose::compose;
pub use nonce::{NonceProvider, SessionNonce};
pub use upload::stage;
