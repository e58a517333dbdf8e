//! Test context structure returned by [`TestBuilder`](crate::TestBuilder).

use heimdall::auth::guard::RouteGuard;
use heimdall::auth::session::SessionHandle;

use crate::model::TestRoute;
use crate::redirect::RecordingRedirects;

/// Test environment for session and gate tests.
///
/// Holds the session handle under test and a recording redirect sink for
/// asserting the gate's side effects.
///
/// ```ignore
/// let test = TestBuilder::new().logged_in().build();
///
/// let decision = test.guard().can_enter(&test.redirects).await;
///
/// assert!(decision.is_permitted());
/// assert_eq!(test.redirects.count(), 0);
/// ```
pub struct TestContext {
    /// Session handle under test
    pub session: SessionHandle,
    /// Recording sink capturing every redirect the gate issues
    pub redirects: RecordingRedirects<TestRoute>,
}

impl TestContext {
    /// Gate over this context's session, falling back to [`TestRoute::Home`].
    pub fn guard(&self) -> RouteGuard<SessionHandle, TestRoute> {
        RouteGuard::new(self.session.clone(), TestRoute::Home)
    }
}
