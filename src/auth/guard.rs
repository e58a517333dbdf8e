//! Navigation gate for the protected route.
//!
//! The routing layer consults [`RouteGuard::can_enter`] before activating
//! the protected route. The gate awaits the session check and either
//! permits navigation or issues a single redirect to its fallback route
//! through the injected [`RedirectSink`]. Failures never escape the gate:
//! every outcome degrades to a deny decision plus the redirect, which is
//! always safe.

use std::fmt;

use dioxus_logger::tracing;

use crate::auth::session::SessionCheck;

/// Outcome of a gate evaluation.
///
/// Two states, one transition, gated by the resolved session flag. There
/// are no retries and no timeout beyond the check's own latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Navigation proceeds into the protected route.
    Permitted,
    /// Navigation is refused; a redirect to the fallback route was issued.
    Denied,
}

impl GateDecision {
    pub fn is_permitted(&self) -> bool {
        matches!(self, Self::Permitted)
    }
}

/// Receiver of the gate's redirect command.
///
/// Implemented over the router's navigator in the client and by a recording
/// sink in tests. Issuing a redirect is the gate's only externally
/// observable effect besides its traces.
pub trait RedirectSink<R> {
    fn redirect(&self, target: R);
}

/// Predicate consulted before entering the protected route.
///
/// Holds the session check it awaits and the fixed fallback route it
/// redirects to on deny. Generic over the route type so the gate does not
/// depend on any particular route table.
pub struct RouteGuard<C, R> {
    check: C,
    fallback: R,
}

impl<C, R> RouteGuard<C, R>
where
    C: SessionCheck,
    R: Clone + fmt::Debug,
{
    pub fn new(check: C, fallback: R) -> Self {
        Self { check, fallback }
    }

    /// Evaluate the gate for one navigation attempt.
    ///
    /// Awaits the session check, then:
    /// - resolution true: permit, no side effects beyond a trace
    /// - resolution false: deny, exactly one redirect to the fallback route
    /// - check failure: deny, the same single redirect, error trace
    ///
    /// # Arguments
    /// - `redirects` - Sink receiving the redirect command on deny
    ///
    /// # Returns
    /// - `GateDecision::Permitted` - The router may activate the route
    /// - `GateDecision::Denied` - The router must not activate the route
    pub async fn can_enter(&self, redirects: &impl RedirectSink<R>) -> GateDecision {
        match self.check.check_active().await {
            Ok(true) => {
                tracing::info!("session active, access allowed");

                GateDecision::Permitted
            }
            Ok(false) => {
                tracing::info!(fallback = ?self.fallback, "no active session, access denied");

                redirects.redirect(self.fallback.clone());

                GateDecision::Denied
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    fallback = ?self.fallback,
                    "error during session check, access denied"
                );

                redirects.redirect(self.fallback.clone());

                GateDecision::Denied
            }
        }
    }
}
