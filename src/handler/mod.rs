//! Import handler boundary.
//!
//! The actual import work (matching rows to memberships, merge/create/
//! transfer decisions) is owned by an external handler component. This
//! module defines the interface the bridge drives it through.
//!
//! The handler's own completion path ends the process after a redirect; at
//! this boundary that is modeled as [`ImportHandler::handle`] returning a
//! [`HandlerExit`] token. The contract stands: the handler returns nothing
//! usable to the caller, but guarantees its [`MessageHandler`] is populated
//! by the time it "ends". Result relay happens only through the bridge's
//! termination callback.

mod stub;

use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::context::RequestContext;

pub use stub::StubImportHandler;

// =============================================================================
// Handler exit token
// =============================================================================

/// Proof token for the process termination the handler would have
/// performed. The redirect target is recorded but never followed.
#[derive(Debug)]
pub struct HandlerExit {
    redirect_to: Option<String>,
}

impl HandlerExit {
    /// Exit via a redirect to `location`.
    pub fn redirect(location: impl Into<String>) -> Self {
        Self {
            redirect_to: Some(location.into()),
        }
    }

    /// Exit without a redirect.
    pub fn halt() -> Self {
        Self { redirect_to: None }
    }

    /// The redirect target, if the handler ended with one.
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect_to.as_deref()
    }
}

// =============================================================================
// Message handler
// =============================================================================

/// Accumulator for the human-readable result strings the handler produces
/// during its run.
#[derive(Debug, Default)]
pub struct MessageHandler {
    errors: Mutex<Vec<String>>,
    messages: Mutex<Vec<String>>,
}

impl MessageHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&self, error: impl Into<String>) {
        self.errors.lock().unwrap().push(error.into());
    }

    pub fn add_message(&self, message: impl Into<String>) {
        self.messages.lock().unwrap().push(message.into());
    }

    /// Accumulated error strings, in insertion order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    /// Accumulated informational strings, in insertion order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

// =============================================================================
// Handler trait
// =============================================================================

/// Interface of the external import handler, as consumed by the bridge.
#[async_trait]
pub trait ImportHandler: Send + Sync {
    /// The named hook this handler's dispatch mechanism listens for.
    fn hook(&self) -> &'static str;

    /// Process the import. Reads all input from the installed aggregate
    /// view, the body-fields store, and the uploads store; populates the
    /// message handler; returns the exit it would have terminated with.
    async fn handle(&self, ctx: &RequestContext) -> HandlerExit;

    /// Accessor for the message handler. `None` means the subsystem is
    /// unreachable, which the bridge reports as its own single error.
    fn message_handler(&self) -> Option<&MessageHandler>;

    /// Handler name for logging purposes.
    fn name(&self) -> &'static str;
}
