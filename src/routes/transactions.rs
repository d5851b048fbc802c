use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::auth::AdminSession;
use crate::domain::transaction_status::TransactionStatus;
use crate::export::transactions_csv;
use crate::store::transaction_store::{
    TransactionFilter, TransactionStore, TransactionStoreError,
};

#[derive(Deserialize, Debug)]
pub struct TransactionListParams {
    pub status: Option<String>,
    pub subscriber: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl TransactionListParams {
    fn to_filter(&self) -> Result<TransactionFilter, String> {
        let status = match self.status.as_deref() {
            None | Some("All") | Some("") => None,
            Some(other) => Some(TransactionStatus::parse(String::from(other))?),
        };

        Ok(TransactionFilter {
            status,
            subscriber: self.subscriber.clone().unwrap_or_default(),
            start_date: parse_date(self.start_date.as_deref())?,
            end_date: parse_date(self.end_date.as_deref())?,
        })
    }
}

fn parse_date(date: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match date {
        None | Some("") => Ok(None),
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| format!("{} is not a valid date, expected YYYY-MM-DD", date)),
    }
}

#[derive(thiserror::Error)]
pub enum TransactionsError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] TransactionStoreError),
}

impl std::fmt::Debug for TransactionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for TransactionsError {
    fn status_code(&self) -> StatusCode {
        match self {
            TransactionsError::Validation(_) => StatusCode::BAD_REQUEST,
            TransactionsError::Store(TransactionStoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }
}

#[tracing::instrument(name = "Listing transactions", skip(_session, params, store))]
pub async fn handle_list_transactions(
    _session: AdminSession,
    params: web::Query<TransactionListParams>,
    store: web::Data<TransactionStore>,
) -> Result<HttpResponse, TransactionsError> {
    let filter = params.to_filter().map_err(TransactionsError::Validation)?;

    Ok(HttpResponse::Ok().json(store.filtered(&filter)))
}

#[tracing::instrument(name = "Fetching a transaction's details", skip(_session, store))]
pub async fn handle_get_transaction(
    _session: AdminSession,
    path: web::Path<String>,
    store: web::Data<TransactionStore>,
) -> Result<HttpResponse, TransactionsError> {
    let transaction = store.get(&path.into_inner())?;

    Ok(HttpResponse::Ok().json(transaction))
}

#[tracing::instrument(name = "Exporting transactions to CSV", skip(_session, params, store))]
pub async fn handle_export_transactions(
    _session: AdminSession,
    params: web::Query<TransactionListParams>,
    store: web::Data<TransactionStore>,
) -> Result<HttpResponse, TransactionsError> {
    let filter = params.to_filter().map_err(TransactionsError::Validation)?;
    let csv = transactions_csv(&store.filtered(&filter));

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"transactions.csv\"",
        ))
        .body(csv))
}
