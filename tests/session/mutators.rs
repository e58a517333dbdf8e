use heimdall::auth::session::SessionCheck;
use heimdall_test_utils::prelude::*;

#[tokio::test]
/// Expect two logins in a row to leave the flag true
async fn login_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().build();

    test.session.login();
    test.session.login();

    assert!(test.session.check_active().await?);

    Ok(())
}

#[tokio::test]
/// Expect two logouts in a row to leave the flag false
async fn logout_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().logged_in().build();

    test.session.logout();
    test.session.logout();

    assert!(!test.session.check_active().await?);

    Ok(())
}
