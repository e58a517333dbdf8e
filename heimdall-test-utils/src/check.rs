use heimdall::auth::session::SessionCheck;
use heimdall::error::auth::AuthError;

/// Session check double with a fixed outcome.
///
/// Covers the one path the real [`SessionHandle`](heimdall::auth::session::SessionHandle)
/// cannot produce: a failing check.
pub struct StubCheck {
    outcome: StubOutcome,
}

enum StubOutcome {
    Active,
    Inactive,
    Failing,
}

impl StubCheck {
    /// Check that always resolves to an active session.
    pub fn active() -> Self {
        Self {
            outcome: StubOutcome::Active,
        }
    }

    /// Check that always resolves to no active session.
    pub fn inactive() -> Self {
        Self {
            outcome: StubOutcome::Inactive,
        }
    }

    /// Check that always fails.
    pub fn failing() -> Self {
        Self {
            outcome: StubOutcome::Failing,
        }
    }
}

impl SessionCheck for StubCheck {
    async fn check_active(&self) -> Result<bool, AuthError> {
        match self.outcome {
            StubOutcome::Active => Ok(true),
            StubOutcome::Inactive => Ok(false),
            StubOutcome::Failing => {
                Err(AuthError::CheckFailed("simulated backend failure".to_string()))
            }
        }
    }
}
