//! Declarative test builder for session and gate tests.
//!
//! Configuration methods chain and are applied during the final `build()`
//! call, which produces a [`TestContext`] ready for use.

use std::time::Duration;

use heimdall::auth::session::SessionHandle;

use crate::context::TestContext;
use crate::redirect::RecordingRedirects;

/// Builder for declarative test initialization.
///
/// The session starts logged out with zero check latency so tests resolve
/// immediately; both can be overridden before `build()`.
pub struct TestBuilder {
    latency: Duration,
    logged_in: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            latency: Duration::ZERO,
            logged_in: false,
        }
    }

    /// Apply a simulated check latency instead of resolving immediately.
    ///
    /// Combine with a paused tokio clock when asserting timing.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Start the session logged in.
    pub fn logged_in(mut self) -> Self {
        self.logged_in = true;
        self
    }

    /// Build the test context with the configured session state.
    pub fn build(self) -> TestContext {
        let session = SessionHandle::new(self.latency);

        if self.logged_in {
            session.login();
        }

        TestContext {
            session,
            redirects: RecordingRedirects::new(),
        }
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
