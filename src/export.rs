use crate::domain::report_metric::ReportMetric;
use crate::domain::report_row::ReportRow;
use crate::domain::subscriber::Subscriber;
use crate::domain::transaction::Transaction;

/// Builds a CSV document: header row plus one row per record, joined with
/// newlines and no trailing newline, so N records yield N + 1 lines.
pub fn csv_document(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);

    lines.push(
        headers
            .iter()
            .map(|header| escape_csv_field(header))
            .collect::<Vec<String>>()
            .join(","),
    );

    for row in rows {
        lines.push(
            row.iter()
                .map(|field| escape_csv_field(field))
                .collect::<Vec<String>>()
                .join(","),
        );
    }

    lines.join("\n")
}

/// A field containing a comma, quote or line break is wrapped in double
/// quotes with inner quotes doubled, per RFC 4180.
fn escape_csv_field(field: &str) -> String {
    let needs_quoting = field.contains(',')
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r');

    if needs_quoting {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        String::from(field)
    }
}

pub fn subscribers_csv(subscribers: &[Subscriber]) -> String {
    let rows: Vec<Vec<String>> = subscribers
        .iter()
        .map(|subscriber| {
            vec![
                subscriber.id.to_string(),
                String::from(subscriber.name.as_ref()),
                String::from(subscriber.email.as_ref()),
                String::from(subscriber.status.as_ref()),
            ]
        })
        .collect();

    csv_document(&["ID", "Name", "Email", "Status"], &rows)
}

pub fn transactions_csv(transactions: &[Transaction]) -> String {
    let rows: Vec<Vec<String>> = transactions
        .iter()
        .map(|transaction| {
            vec![
                transaction.id.clone(),
                transaction.date.format("%Y-%m-%d").to_string(),
                transaction.amount.clone(),
                transaction.subscriber.clone(),
                String::from(transaction.status.as_ref()),
                or_na(&transaction.payment_method),
                or_na(&transaction.processor_id),
                or_na(&transaction.refund_note),
            ]
        })
        .collect();

    csv_document(
        &[
            "Transaction ID",
            "Date",
            "Amount",
            "Subscriber",
            "Status",
            "Payment Method",
            "Processor ID",
            "Refund Note",
        ],
        &rows,
    )
}

pub fn report_csv(metric: ReportMetric, series: &[ReportRow]) -> String {
    let rows: Vec<Vec<String>> = series
        .iter()
        .map(|row| vec![row.period.clone(), metric.value_of(row).to_string()])
        .collect();

    csv_document(&["Date", metric.label()], &rows)
}

fn or_na(field: &Option<String>) -> String {
    field.clone().unwrap_or_else(|| String::from("N/A"))
}
