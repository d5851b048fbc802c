use secrecy::ExposeSecret;

use crate::helpers::TestApp;

#[tokio::test]
async fn login_with_the_configured_credentials_returns_200() {
    let test_app = TestApp::spawn_app().await;
    let admin = test_app.config.get_admin();

    let response = test_app
        .post_login(&admin.get_email(), admin.get_password().expose_secret())
        .await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn login_with_wrong_credentials_returns_401() {
    let test_app = TestApp::spawn_app().await;

    let response = test_app.post_login("admin@example.com", "not-the-password").await;

    assert_eq!(401, response.status().as_u16());
    assert_eq!("Invalid credentials.", response.text().await.unwrap());
}

#[tokio::test]
async fn login_with_missing_fields_returns_400() {
    let test_app = TestApp::spawn_app().await;

    // This is a common practice and it is called table-driven tests. In this case, it simulates different kind of possible request bodies
    // where API should return 400.
    let test_cases = vec![
        (("", "password"), "missing email"),
        (("admin@example.com", ""), "missing password"),
        (("", ""), "missing both fields"),
    ];

    for ((email, password), error_message) in test_cases {
        let response = test_app.post_login(email, password).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 status when payload was {}",
            error_message
        );
    }
}

#[tokio::test]
async fn login_with_a_malformed_email_returns_400() {
    let test_app = TestApp::spawn_app().await;

    let response = test_app.post_login("not-an-email", "password").await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn admin_routes_reject_unauthenticated_requests() {
    let test_app = TestApp::spawn_app().await;

    let guarded_paths = vec![
        "/subscribers",
        "/subscribers/export",
        "/plans",
        "/transactions",
        "/reports",
        "/dashboard",
        "/settings/profile",
    ];

    for path in guarded_paths {
        let response = test_app.get(path).await;

        assert_eq!(
            401,
            response.status().as_u16(),
            "GET {} did not require authentication",
            path
        );
    }
}

#[tokio::test]
async fn logout_closes_the_session() {
    let test_app = TestApp::spawn_logged_in_app().await;

    assert_eq!(200, test_app.get("/subscribers").await.status().as_u16());

    let response = test_app.post_empty("/logout").await;
    assert_eq!(200, response.status().as_u16());

    assert_eq!(401, test_app.get("/subscribers").await.status().as_u16());
}
