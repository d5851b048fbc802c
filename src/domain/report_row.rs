/// One month of the reporting series.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ReportRow {
    pub period: String,
    pub revenue: i64,
    pub subscribers: i64,
    pub cancellations: i64,
}
