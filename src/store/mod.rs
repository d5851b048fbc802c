pub mod plan_store;
pub mod report_store;
pub mod settings_store;
pub mod subscriber_store;
pub mod transaction_store;
