use std::time::Duration;

use heimdall::auth::session::{SessionCheck, SessionHandle, DEFAULT_CHECK_LATENCY};
use heimdall_test_utils::prelude::*;

#[tokio::test]
/// Expect a fresh session to check as inactive
async fn resolves_false_by_default() -> Result<(), TestError> {
    let test = TestBuilder::new().build();

    let active = test.session.check_active().await?;

    assert!(!active);

    Ok(())
}

#[tokio::test]
/// Expect the check to resolve to the value set by the most recent call
async fn resolves_latest_flag_value() -> Result<(), TestError> {
    let test = TestBuilder::new().build();

    test.session.login();
    assert!(test.session.check_active().await?);

    test.session.logout();
    test.session.login();
    test.session.logout();
    assert!(!test.session.check_active().await?);

    Ok(())
}

#[tokio::test(start_paused = true)]
/// Expect the simulated latency to elapse before the check resolves
async fn resolves_after_fixed_latency() -> Result<(), TestError> {
    let session = SessionHandle::default();
    let started = tokio::time::Instant::now();

    let _ = session.check_active().await?;

    assert!(started.elapsed() >= DEFAULT_CHECK_LATENCY);

    Ok(())
}

#[tokio::test(start_paused = true)]
/// Expect a login landing while a check is pending to be observed
///
/// The flag is read when the latency elapses, not when the check starts,
/// matching a backend that reports state at response time.
async fn observes_login_during_pending_check() -> Result<(), TestError> {
    let session = SessionHandle::default();
    let late_login = session.clone();

    let (resolved, _) = tokio::join!(session.check_active(), async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        late_login.login();
    });

    assert!(resolved?);

    Ok(())
}
