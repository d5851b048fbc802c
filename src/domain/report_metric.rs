use crate::domain::report_row::ReportRow;

/// The column of the reporting series a report is built over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMetric {
    Revenue,
    Subscribers,
    Cancellations,
}

impl ReportMetric {
    pub fn parse(metric: String) -> Result<ReportMetric, String> {
        match metric.as_str() {
            "revenue" => Ok(ReportMetric::Revenue),
            "subscribers" => Ok(ReportMetric::Subscribers),
            "cancellations" => Ok(ReportMetric::Cancellations),
            _ => Err(format!("{} is not a valid report metric", metric)),
        }
    }

    /// Capitalized label used for table and CSV headers.
    pub fn label(&self) -> &'static str {
        match self {
            ReportMetric::Revenue => "Revenue",
            ReportMetric::Subscribers => "Subscribers",
            ReportMetric::Cancellations => "Cancellations",
        }
    }

    pub fn value_of(&self, row: &ReportRow) -> i64 {
        match self {
            ReportMetric::Revenue => row.revenue,
            ReportMetric::Subscribers => row.subscribers,
            ReportMetric::Cancellations => row.cancellations,
        }
    }
}

impl AsRef<str> for ReportMetric {
    fn as_ref(&self) -> &str {
        match self {
            ReportMetric::Revenue => "revenue",
            ReportMetric::Subscribers => "subscribers",
            ReportMetric::Cancellations => "cancellations",
        }
    }
}
