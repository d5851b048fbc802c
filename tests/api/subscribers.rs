use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn list_returns_the_seeded_subscribers() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let subscribers = test_app.get_json("/subscribers").await;
    let subscribers = subscribers.as_array().unwrap();

    assert_eq!(subscribers.len(), 3);
    assert_eq!(subscribers[0]["name"], "John Doe");
    assert_eq!(subscribers[1]["status"], "Suspended");
    assert_eq!(subscribers[2]["name"], "Alice Johnson");
}

#[tokio::test]
async fn filtering_by_status_returns_only_matching_subscribers() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let subscribers = test_app.get_json("/subscribers?status=Active").await;
    let subscribers = subscribers.as_array().unwrap();

    assert_eq!(subscribers.len(), 1);
    assert_eq!(subscribers[0]["name"], "John Doe");
}

#[tokio::test]
async fn search_matches_names_case_insensitively() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let subscribers = test_app.get_json("/subscribers?search=ali").await;
    let subscribers = subscribers.as_array().unwrap();

    assert_eq!(subscribers.len(), 1);
    assert_eq!(subscribers[0]["name"], "Alice Johnson");
}

#[tokio::test]
async fn filtering_by_an_unknown_status_returns_400() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let response = test_app.get("/subscribers?status=Paused").await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn create_appends_exactly_one_active_subscriber() {
    let test_app = TestApp::spawn_logged_in_app().await;
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();

    let response = test_app
        .post_json("/subscribers", &json!({ "name": name, "email": email }))
        .await;

    assert_eq!(201, response.status().as_u16());

    let created: serde_json::Value = response.json().await.unwrap();
    assert_eq!(created["status"], "Active");
    assert_eq!(created["id"], 4);

    let subscribers = test_app.get_json("/subscribers").await;
    assert_eq!(subscribers.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn create_returns_400_when_body_is_invalid() {
    let test_app = TestApp::spawn_logged_in_app().await;

    // This is a common practice and it is called table-driven tests. In this case, it simulates different kind of possible request bodies
    // where API should return 400.
    let test_cases = vec![
        (json!({}), "missing body parameters"),
        (json!({ "name": "Bob Stone" }), "missing email parameter"),
        (json!({ "email": "bob@test.com" }), "missing name parameter"),
        (
            json!({ "name": "", "email": "bob@test.com" }),
            "name cannot be empty",
        ),
        (
            json!({ "name": "{Bob}", "email": "bob@test.com" }),
            "invalid name parameter",
        ),
        (
            json!({ "name": "Bob Stone", "email": "test.com" }),
            "invalid email parameter",
        ),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = test_app.post_json("/subscribers", &invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 status when payload was {}",
            error_message
        );
    }
}

#[tokio::test]
async fn update_changes_name_and_email_but_not_status_or_history() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let response = test_app
        .put_json(
            "/subscribers/2",
            &json!({ "name": "Jane Brown", "email": "jane.brown@example.com" }),
        )
        .await;

    assert_eq!(200, response.status().as_u16());

    let subscriber = test_app.get_json("/subscribers/2").await;
    assert_eq!(subscriber["name"], "Jane Brown");
    assert_eq!(subscriber["email"], "jane.brown@example.com");
    assert_eq!(subscriber["status"], "Suspended");
    assert_eq!(subscriber["history"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn update_of_an_unknown_subscriber_returns_404() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let response = test_app
        .put_json(
            "/subscribers/99",
            &json!({ "name": "Bob Stone", "email": "bob@test.com" }),
        )
        .await;

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn details_include_the_payment_history() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let subscriber = test_app.get_json("/subscribers/1").await;
    let history = subscriber["history"].as_array().unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["date"], "2024-01-01");
    assert_eq!(history[0]["amount"], "$100");
}

#[tokio::test]
async fn delete_removes_the_subscriber_and_ids_are_not_reused() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let response = test_app.delete("/subscribers/3").await;
    assert_eq!(204, response.status().as_u16());

    let subscribers = test_app.get_json("/subscribers").await;
    assert_eq!(subscribers.as_array().unwrap().len(), 2);

    let response = test_app
        .post_json(
            "/subscribers",
            &json!({ "name": "Bob Stone", "email": "bob@test.com" }),
        )
        .await;
    let created: serde_json::Value = response.json().await.unwrap();

    assert_eq!(created["id"], 4);
}

#[tokio::test]
async fn double_toggle_returns_the_subscriber_to_its_original_status() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let toggled = test_app.post_empty("/subscribers/1/toggle").await;
    let toggled: serde_json::Value = toggled.json().await.unwrap();
    assert_eq!(toggled["status"], "Suspended");

    let toggled = test_app.post_empty("/subscribers/1/toggle").await;
    let toggled: serde_json::Value = toggled.json().await.unwrap();
    assert_eq!(toggled["status"], "Active");
}

#[tokio::test]
async fn export_returns_the_filtered_view_as_csv() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let response = test_app.get("/subscribers/export?status=Active").await;

    assert_eq!(200, response.status().as_u16());
    assert!(response
        .headers()
        .get("Content-Type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/csv"));
    assert!(response
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("subscribers.csv"));

    let body = response.text().await.unwrap();
    let lines: Vec<&str> = body.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "ID,Name,Email,Status");
    assert_eq!(lines[1], "1,John Doe,john@example.com,Active");
}
