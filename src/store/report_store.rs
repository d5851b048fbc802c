use crate::domain::report_row::ReportRow;

/// The reports screen's seeded monthly series. The series itself never
/// changes; reports project one metric column out of it.
pub struct ReportStore {
    rows: Vec<ReportRow>,
}

impl ReportStore {
    pub fn seeded() -> ReportStore {
        ReportStore {
            rows: vec![
                seed_row("Jan", 4000, 50, 5),
                seed_row("Feb", 3000, 40, 8),
                seed_row("Mar", 5000, 70, 3),
                seed_row("Apr", 6000, 60, 4),
            ],
        }
    }

    pub fn series(&self) -> Vec<ReportRow> {
        self.rows.clone()
    }
}

fn seed_row(period: &str, revenue: i64, subscribers: i64, cancellations: i64) -> ReportRow {
    ReportRow {
        period: String::from(period),
        revenue,
        subscribers,
        cancellations,
    }
}
