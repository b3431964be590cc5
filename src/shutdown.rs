//! Process-termination callback registry.
//!
//! The handler's completion path ends the process; work that must observe
//! its results is registered here before dispatch and runs at the point
//! the process would have ended. Single-shot: hooks run once, in
//! registration order, and the registry is consumed.

/// Registry of callbacks to run at the simulated process end.
///
/// Each hook returns an exit code; [`run`](ShutdownHooks::run) folds them
/// into the highest code seen, so any failing hook fails the command.
pub struct ShutdownHooks<'a> {
    hooks: Vec<Box<dyn FnOnce() -> i32 + 'a>>,
}

impl<'a> ShutdownHooks<'a> {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a callback. Hooks run in registration order.
    pub fn register(&mut self, hook: impl FnOnce() -> i32 + 'a) {
        self.hooks.push(Box::new(hook));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run every hook and return the highest exit code produced.
    pub fn run(self) -> i32 {
        self.hooks.into_iter().fold(0, |code, hook| code.max(hook()))
    }
}

impl Default for ShutdownHooks<'_> {
    fn default() -> Self {
        Self::new()
    }
}
