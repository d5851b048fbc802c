use chrono::NaiveDate;

/// One entry of a subscriber's payment history. The amount is kept as the
/// display string it was recorded with (e.g. "$100").
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Payment {
    pub date: NaiveDate,
    pub amount: String,
}
