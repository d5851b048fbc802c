use std::sync::RwLock;

use chrono::NaiveDate;

use crate::domain::transaction::Transaction;
use crate::domain::transaction_status::TransactionStatus;

#[derive(thiserror::Error, Debug)]
pub enum TransactionStoreError {
    #[error("Transaction {0} was not found.")]
    NotFound(String),
}

/// The transactions screen's collection. Transactions only exist as seed
/// data: they can be listed, inspected and exported, never created or
/// deleted through the admin.
pub struct TransactionStore {
    transactions: RwLock<Vec<Transaction>>,
}

/// Filter criteria of the transactions table. Unset bounds leave the date
/// range open on that side; the range is inclusive.
pub struct TransactionFilter {
    pub status: Option<TransactionStatus>,
    pub subscriber: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TransactionStore {
    pub fn new() -> TransactionStore {
        TransactionStore {
            transactions: RwLock::new(Vec::new()),
        }
    }

    pub fn seeded() -> TransactionStore {
        TransactionStore {
            transactions: RwLock::new(vec![
                Transaction {
                    id: String::from("TXN001"),
                    date: seed_date(2024, 1, 15),
                    amount: String::from("$100.00"),
                    subscriber: String::from("John Doe"),
                    status: TransactionStatus::Completed,
                    payment_method: Some(String::from("Credit Card")),
                    processor_id: Some(String::from("ch_123456789")),
                    refund_note: Some(String::from("No refunds")),
                },
                Transaction {
                    id: String::from("TXN002"),
                    date: seed_date(2024, 1, 18),
                    amount: String::from("$50.00"),
                    subscriber: String::from("Jane Smith"),
                    status: TransactionStatus::Failed,
                    payment_method: Some(String::from("PayPal")),
                    processor_id: None,
                    refund_note: None,
                },
                Transaction {
                    id: String::from("TXN003"),
                    date: seed_date(2024, 2, 5),
                    amount: String::from("$75.00"),
                    subscriber: String::from("Alice Johnson"),
                    status: TransactionStatus::Refunded,
                    payment_method: Some(String::from("Credit Card")),
                    processor_id: Some(String::from("ch_987654321")),
                    refund_note: Some(String::from("Refunded on 2024-02-10")),
                },
            ]),
        }
    }

    pub fn list(&self) -> Vec<Transaction> {
        self.read().clone()
    }

    pub fn filtered(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        filter_transactions(&self.read(), filter)
    }

    pub fn get(&self, id: &str) -> Result<Transaction, TransactionStoreError> {
        self.read()
            .iter()
            .find(|transaction| transaction.id == id)
            .cloned()
            .ok_or_else(|| TransactionStoreError::NotFound(String::from(id)))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Transaction>> {
        self.transactions
            .read()
            .expect("Transaction store lock poisoned")
    }
}

pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
) -> Vec<Transaction> {
    let subscriber = filter.subscriber.to_lowercase();

    transactions
        .iter()
        .filter(|transaction| {
            let matches_status = filter
                .status
                .map_or(true, |status| transaction.status == status);
            let matches_subscriber = transaction
                .subscriber
                .to_lowercase()
                .contains(&subscriber);
            let matches_start = filter
                .start_date
                .map_or(true, |start| transaction.date >= start);
            let matches_end = filter.end_date.map_or(true, |end| transaction.date <= end);

            matches_status && matches_subscriber && matches_start && matches_end
        })
        .cloned()
        .collect()
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Seed transaction date is valid")
}
