use heimdall::auth::guard::{GateDecision, RouteGuard};
use heimdall_test_utils::prelude::*;

#[tokio::test]
/// Expect permit and no redirect when the session check resolves true
async fn permits_with_active_session() -> Result<(), TestError> {
    let test = TestBuilder::new().logged_in().build();

    let decision = test.guard().can_enter(&test.redirects).await;

    assert_eq!(decision, GateDecision::Permitted);
    assert!(decision.is_permitted());
    assert_eq!(test.redirects.count(), 0);

    Ok(())
}

#[tokio::test]
/// Expect deny and exactly one redirect to the fallback route when inactive
async fn denies_without_active_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build();

    let decision = test.guard().can_enter(&test.redirects).await;

    assert_eq!(decision, GateDecision::Denied);
    assert!(!decision.is_permitted());
    assert_eq!(test.redirects.targets(), vec![TestRoute::Home]);

    Ok(())
}

#[tokio::test]
/// Expect a stubbed inactive check to deny like the real handle does
async fn denies_with_stubbed_inactive_check() -> Result<(), TestError> {
    let redirects = RecordingRedirects::new();
    let guard = RouteGuard::new(StubCheck::inactive(), TestRoute::Home);

    let decision = guard.can_enter(&redirects).await;

    assert_eq!(decision, GateDecision::Denied);
    assert_eq!(redirects.targets(), vec![TestRoute::Home]);

    Ok(())
}

#[tokio::test]
/// Expect a stubbed active check to permit without touching the sink
async fn permits_with_stubbed_active_check() -> Result<(), TestError> {
    let redirects = RecordingRedirects::new();
    let guard = RouteGuard::new(StubCheck::active(), TestRoute::Home);

    let decision = guard.can_enter(&redirects).await;

    assert_eq!(decision, GateDecision::Permitted);
    assert_eq!(redirects.count(), 0);

    Ok(())
}

#[tokio::test]
/// Expect a failing check to degrade to deny plus one redirect
///
/// The real session handle never fails its check; this covers the
/// defensive path the gate's contract requires. Only the trace content
/// differs from a plain deny.
async fn denies_when_check_fails() -> Result<(), TestError> {
    let redirects = RecordingRedirects::new();
    let guard = RouteGuard::new(StubCheck::failing(), TestRoute::Home);

    let decision = guard.can_enter(&redirects).await;

    assert_eq!(decision, GateDecision::Denied);
    assert_eq!(redirects.targets(), vec![TestRoute::Home]);

    Ok(())
}

#[tokio::test]
/// Expect deny, permit, deny across a full login/logout cycle
async fn follows_login_logout_cycle() -> Result<(), TestError> {
    let test = TestBuilder::new().build();

    // Fresh session: denied and sent to the fallback route
    let decision = test.guard().can_enter(&test.redirects).await;
    assert_eq!(decision, GateDecision::Denied);
    assert_eq!(test.redirects.count(), 1);

    // After login the same gate permits without another redirect
    test.session.login();
    let decision = test.guard().can_enter(&test.redirects).await;
    assert_eq!(decision, GateDecision::Permitted);
    assert_eq!(test.redirects.count(), 1);

    // After logout the gate denies again
    test.session.logout();
    let decision = test.guard().can_enter(&test.redirects).await;
    assert_eq!(decision, GateDecision::Denied);
    assert_eq!(
        test.redirects.targets(),
        vec![TestRoute::Home, TestRoute::Home]
    );

    Ok(())
}

#[tokio::test]
/// Expect the redirect to target the guard's configured fallback route
async fn redirects_to_configured_fallback() -> Result<(), TestError> {
    let redirects = RecordingRedirects::new();
    let guard = RouteGuard::new(StubCheck::inactive(), TestRoute::Dashboard);

    let _ = guard.can_enter(&redirects).await;

    assert_eq!(redirects.targets(), vec![TestRoute::Dashboard]);

    Ok(())
}
