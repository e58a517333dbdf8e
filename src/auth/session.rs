//! Session state holder with a simulated asynchronous check.
//!
//! The session is a single boolean flag: logged in or logged out. The flag
//! is owned by [`SessionHandle`] and handed to the UI through context, so
//! there is no ambient global state. Reading the flag for authorization
//! purposes goes through [`SessionCheck::check_active`], which resolves
//! only after a fixed artificial latency, so every consumer has to handle
//! asynchronous completion the way it would for a real backend round trip.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dioxus_logger::tracing;

use crate::error::auth::AuthError;

/// Latency applied to every simulated session check.
///
/// Stands in for the network round trip a real authorization check would
/// make. Overridable per handle via [`SessionHandle::new`].
pub const DEFAULT_CHECK_LATENCY: Duration = Duration::from_secs(2);

/// Deferred read of the session flag.
///
/// The navigation gate consumes this trait rather than [`SessionHandle`]
/// directly, so a real authentication call can be substituted without
/// changing the gate's logic. Implementations may fail; the simulated
/// check never does.
pub trait SessionCheck {
    /// Resolves to the current session flag value.
    ///
    /// # Returns
    /// - `Ok(true)` - A session is active
    /// - `Ok(false)` - No session is active
    /// - `Err(AuthError)` - The check could not complete
    fn check_active(&self) -> impl Future<Output = Result<bool, AuthError>>;
}

/// Owner of the session flag.
///
/// Cheap to clone; all clones share the same flag. Created once at app
/// startup and provided to the UI through context. Mutation is a single
/// atomic store, so the flag's value is always exactly the boolean set by
/// the most recent [`login`](Self::login) or [`logout`](Self::logout) call.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    active: Arc<AtomicBool>,
    latency: Duration,
}

impl SessionHandle {
    /// Create a handle with the given simulated check latency.
    ///
    /// The session starts logged out.
    pub fn new(latency: Duration) -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
            latency,
        }
    }

    /// Set the session flag to true. Always succeeds; idempotent.
    pub fn login(&self) {
        self.active.store(true, Ordering::SeqCst);

        tracing::debug!("session flag set, user logged in");
    }

    /// Set the session flag to false. Always succeeds; idempotent.
    pub fn logout(&self) {
        self.active.store(false, Ordering::SeqCst);

        tracing::debug!("session flag cleared, user logged out");
    }

    /// Synchronous peek at the session flag, bypassing the simulated
    /// latency. For diagnostics and rendering only; authorization
    /// decisions must go through [`SessionCheck::check_active`].
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new(DEFAULT_CHECK_LATENCY)
    }
}

impl SessionCheck for SessionHandle {
    /// Resolves to the session flag after the configured latency.
    ///
    /// The flag is read after the latency elapses, so a login or logout
    /// that lands while the check is pending is observed by the resolution.
    async fn check_active(&self) -> Result<bool, AuthError> {
        simulate_latency(self.latency).await;

        Ok(self.active.load(Ordering::SeqCst))
    }
}

/// Sleep standing in for the backend round trip.
async fn simulate_latency(latency: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(latency).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(latency).await;
}
