use chrono::NaiveDate;

use crate::domain::transaction_status::TransactionStatus;

/// A payment-processor transaction as the admin sees it. The subscriber is a
/// copied display name, not a reference into the subscriber store: the two
/// screens own their data independently.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub amount: String,
    pub subscriber: String,
    pub status: TransactionStatus,
    pub payment_method: Option<String>,
    pub processor_id: Option<String>,
    pub refund_note: Option<String>,
}
