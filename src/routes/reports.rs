use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use serde::Deserialize;

use crate::auth::AdminSession;
use crate::domain::report_metric::ReportMetric;
use crate::export::report_csv;
use crate::store::report_store::ReportStore;

#[derive(Deserialize, Debug)]
pub struct ReportParams {
    pub metric: Option<String>,
}

impl ReportParams {
    fn metric(&self) -> Result<ReportMetric, String> {
        match self.metric.as_deref() {
            None | Some("") => Ok(ReportMetric::Revenue),
            Some(metric) => ReportMetric::parse(String::from(metric)),
        }
    }
}

#[derive(serde::Serialize)]
pub struct ReportPoint {
    pub date: String,
    pub value: i64,
}

#[derive(thiserror::Error)]
pub enum ReportsError {
    #[error("{0}")]
    Validation(String),
}

impl std::fmt::Debug for ReportsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for ReportsError {
    fn status_code(&self) -> StatusCode {
        match self {
            ReportsError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Projects the chosen metric column out of the monthly series. Defaults to
/// revenue when no metric is passed.
#[tracing::instrument(name = "Building a report", skip(_session, params, store))]
pub async fn handle_get_report(
    _session: AdminSession,
    params: web::Query<ReportParams>,
    store: web::Data<ReportStore>,
) -> Result<HttpResponse, ReportsError> {
    let metric = params.metric().map_err(ReportsError::Validation)?;

    let points: Vec<ReportPoint> = store
        .series()
        .iter()
        .map(|row| ReportPoint {
            date: row.period.clone(),
            value: metric.value_of(row),
        })
        .collect();

    Ok(HttpResponse::Ok().json(points))
}

#[tracing::instrument(name = "Exporting a report to CSV", skip(_session, params, store))]
pub async fn handle_export_report(
    _session: AdminSession,
    params: web::Query<ReportParams>,
    store: web::Data<ReportStore>,
) -> Result<HttpResponse, ReportsError> {
    let metric = params.metric().map_err(ReportsError::Validation)?;
    let csv = report_csv(metric, &store.series());

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}-report.csv\"", metric.as_ref()),
        ))
        .body(csv))
}
