use crate::helpers::TestApp;

#[tokio::test]
async fn list_returns_the_seeded_transactions_in_order() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let transactions = test_app.get_json("/transactions").await;
    let transactions = transactions.as_array().unwrap();

    assert_eq!(transactions.len(), 3);
    assert_eq!(transactions[0]["id"], "TXN001");
    assert_eq!(transactions[1]["status"], "Failed");
    assert_eq!(transactions[2]["id"], "TXN003");
}

#[tokio::test]
async fn filtering_by_status_returns_only_matching_transactions() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let transactions = test_app.get_json("/transactions?status=Completed").await;
    let transactions = transactions.as_array().unwrap();

    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0]["id"], "TXN001");
}

#[tokio::test]
async fn filtering_by_subscriber_matches_substrings_case_insensitively() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let transactions = test_app.get_json("/transactions?subscriber=jane").await;
    let transactions = transactions.as_array().unwrap();

    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0]["subscriber"], "Jane Smith");
}

#[tokio::test]
async fn the_date_range_is_inclusive_on_both_ends() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let transactions = test_app
        .get_json("/transactions?start_date=2024-01-15&end_date=2024-01-18")
        .await;
    let transactions = transactions.as_array().unwrap();

    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0]["id"], "TXN001");
    assert_eq!(transactions[1]["id"], "TXN002");
}

#[tokio::test]
async fn an_unparseable_date_returns_400() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let response = test_app.get("/transactions?start_date=01-15-2024").await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn details_expose_the_processor_fields() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let transaction = test_app.get_json("/transactions/TXN003").await;

    assert_eq!(transaction["amount"], "$75.00");
    assert_eq!(transaction["payment_method"], "Credit Card");
    assert_eq!(transaction["processor_id"], "ch_987654321");
    assert_eq!(transaction["refund_note"], "Refunded on 2024-02-10");
}

#[tokio::test]
async fn an_unknown_transaction_returns_404() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let response = test_app.get("/transactions/TXN999").await;

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn export_renders_missing_fields_as_na() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let response = test_app.get("/transactions/export").await;

    assert_eq!(200, response.status().as_u16());
    assert!(response
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("transactions.csv"));

    let body = response.text().await.unwrap();
    let lines: Vec<&str> = body.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Transaction ID,Date,Amount,Subscriber,Status,Payment Method,Processor ID,Refund Note"
    );
    assert_eq!(
        lines[2],
        "TXN002,2024-01-18,$50.00,Jane Smith,Failed,PayPal,N/A,N/A"
    );
}

#[tokio::test]
async fn export_respects_the_current_filters() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let response = test_app.get("/transactions/export?status=Refunded").await;
    let body = response.text().await.unwrap();
    let lines: Vec<&str> = body.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("TXN003"));
}
