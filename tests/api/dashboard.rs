use crate::helpers::TestApp;

#[tokio::test]
async fn the_summary_has_headline_figures_and_the_revenue_trend() {
    let test_app = TestApp::spawn_logged_in_app().await;

    let summary = test_app.get_json("/dashboard").await;

    assert_eq!(summary["active_subscriptions"], 120);
    assert_eq!(summary["monthly_revenue"], "$5,000");
    assert_eq!(summary["cancellations"], 5);

    let trend = summary["revenue_trend"].as_array().unwrap();
    assert_eq!(trend.len(), 4);
    assert_eq!(trend[0]["month"], "Jan");
    assert_eq!(trend[3]["revenue"], 5000);
}
