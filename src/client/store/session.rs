use serde::{Deserialize, Serialize};

/// Render-side mirror of the session flag.
///
/// Updated by the login/logout controls so the UI re-renders immediately.
/// Never authoritative: the gate always goes through the session handle's
/// asynchronous check.
#[derive(Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub active: bool,
}
