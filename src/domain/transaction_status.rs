#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum TransactionStatus {
    Completed,
    Failed,
    Refunded,
}

impl TransactionStatus {
    pub fn parse(status: String) -> Result<TransactionStatus, String> {
        match status.as_str() {
            "Completed" => Ok(TransactionStatus::Completed),
            "Failed" => Ok(TransactionStatus::Failed),
            "Refunded" => Ok(TransactionStatus::Refunded),
            _ => Err(format!("{} is not a valid transaction status", status)),
        }
    }
}

impl AsRef<str> for TransactionStatus {
    fn as_ref(&self) -> &str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Failed => "Failed",
            TransactionStatus::Refunded => "Refunded",
        }
    }
}
