//! Dispatch and capture bridge.
//!
//! Drives the import handler through its named hook and relays its result
//! messages. The handler's normal completion path performs a redirect and
//! ends the process, so control never comes back through a return value:
//! the bridge registers its capture callback on the shutdown registry
//! *before* dispatching, and all reporting happens inside that callback at
//! the point the process would have ended.
//!
//! State machine: `Idle → ContextVerified → EnvironmentInstalled →
//! Dispatched → CapturedAndReported`, with `Error` terminal when the
//! administrative-context precondition fails before any work is done.

use std::io::Write;
use std::path::Path;

use crate::config::{Config, ImportOptions};
use crate::core::context::{ExecutionContext, RequestContext};
use crate::core::error::{Error, Result};
use crate::handler::{ImportHandler, MessageHandler};
use crate::request::compose::compose;
use crate::request::fields;
use crate::request::nonce::NonceProvider;
use crate::shutdown::ShutdownHooks;

/// Bridge lifecycle states. `CapturedAndReported` and `Error` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Idle,
    ContextVerified,
    EnvironmentInstalled,
    Dispatched,
    CapturedAndReported,
    Error,
}

impl BridgeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BridgeState::Idle => "idle",
            BridgeState::ContextVerified => "context-verified",
            BridgeState::EnvironmentInstalled => "environment-installed",
            BridgeState::Dispatched => "dispatched",
            BridgeState::CapturedAndReported => "captured-and-reported",
            BridgeState::Error => "error",
        }
    }
}

impl std::fmt::Display for BridgeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bridge from the command line into the handler's form pipeline.
pub struct ImportBridge<H: ImportHandler> {
    handler: H,
    ctx: Option<RequestContext>,
    state: BridgeState,
}

impl<H: ImportHandler> ImportBridge<H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            ctx: None,
            state: BridgeState::Idle,
        }
    }

    pub fn state(&self) -> BridgeState {
        self.state
    }

    /// Check the administrative-context precondition. Must pass before any
    /// staging or composing happens; on failure the bridge is terminally
    /// errored and no dispatch can occur.
    pub fn verify_context(&mut self, exec: &ExecutionContext) -> Result<()> {
        if self.state != BridgeState::Idle {
            return Err(Error::State {
                expected: BridgeState::Idle.as_str(),
                actual: self.state.as_str(),
            });
        }

        if !exec.admin {
            self.state = BridgeState::Error;
            return Err(Error::Precondition(
                "this command must be run in an administrative context; \
                 set WP_ADMIN=1 so the import handler's capability checks can pass"
                    .to_string(),
            ));
        }

        self.state = BridgeState::ContextVerified;
        tracing::debug!(state = %self.state, "bridge: administrative context verified");
        Ok(())
    }

    /// Install the composed request environment.
    pub fn install_environment(&mut self, ctx: RequestContext) -> Result<()> {
        if self.state != BridgeState::ContextVerified {
            return Err(Error::State {
                expected: BridgeState::ContextVerified.as_str(),
                actual: self.state.as_str(),
            });
        }

        self.ctx = Some(ctx);
        self.state = BridgeState::EnvironmentInstalled;
        tracing::debug!(state = %self.state, "bridge: request environment installed");
        Ok(())
    }

    /// Dispatch the handler through its named hook and report the captured
    /// results. Returns the process exit code; all failures surface as
    /// error lines on `err`, never as a fault.
    pub async fn dispatch(&mut self, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
        let Some(ctx) = self.ctx.take() else {
            let _ = writeln!(
                err,
                "Error: import was dispatched before the request environment was installed"
            );
            self.state = BridgeState::Error;
            return 1;
        };

        if self.handler.hook() != fields::ADMIN_POST_HOOK {
            let _ = writeln!(
                err,
                "Error: no handler is registered for {}",
                fields::ADMIN_POST_HOOK
            );
            self.state = BridgeState::Error;
            return 1;
        }

        let handler = &self.handler;

        // The capture callback has to be in place before the handler runs:
        // once dispatched, control only comes back through the registry.
        let mut hooks = ShutdownHooks::new();
        hooks.register(move || capture_and_report(handler.message_handler(), out, err));

        tracing::info!(
            hook = fields::ADMIN_POST_HOOK,
            handler = handler.name(),
            "bridge: dispatching import"
        );
        let exit = handler.handle(&ctx).await;
        self.state = BridgeState::Dispatched;
        tracing::debug!(
            state = %self.state,
            redirect = ?exit.redirect_target(),
            "bridge: handler ended"
        );

        // Simulated process end.
        let code = hooks.run();
        self.state = BridgeState::CapturedAndReported;
        tracing::debug!(state = %self.state, code = code, "bridge: results reported");
        code
    }
}

/// Termination callback body: relay the accumulated result messages.
///
/// Emits every error string to the error channel and every informational
/// string to standard output. Never raises further errors itself; an
/// unreachable message handler collapses to a single bridge-level error.
fn capture_and_report(
    messages: Option<&MessageHandler>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32 {
    let Some(messages) = messages else {
        let _ = writeln!(err, "Error: the import result messages could not be retrieved");
        return 1;
    };

    let errors = messages.errors();
    for error in &errors {
        let _ = writeln!(err, "Error: {}", error);
    }
    for message in messages.messages() {
        let _ = writeln!(out, "{}", message);
    }

    if errors.is_empty() {
        0
    } else {
        1
    }
}

/// Full import command flow: verify the administrative context, compose
/// the synthetic request, dispatch, and report. Returns the process exit
/// code the caller must terminate with.
#[allow(clippy::too_many_arguments)]
pub async fn run_import<H: ImportHandler>(
    handler: H,
    exec: &ExecutionContext,
    options: &ImportOptions,
    source: &Path,
    config: &Config,
    nonce: &dyn NonceProvider,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32 {
    let mut bridge = ImportBridge::new(handler);

    if let Err(e) = bridge.verify_context(exec) {
        let _ = writeln!(err, "Error: {}", e);
        return 1;
    }

    let ctx = compose(options, source, &config.request, &config.staging, nonce).await;

    if let Err(e) = bridge.install_environment(ctx) {
        let _ = writeln!(err, "Error: {}", e);
        return 1;
    }

    bridge.dispatch(out, err).await
}
