pub mod admin_profile;
pub mod new_plan;
pub mod new_subscriber;
pub mod payment;
pub mod plan;
pub mod plan_name;
pub mod plan_price;
pub mod plan_status;
pub mod processor;
pub mod report_metric;
pub mod report_row;
pub mod subscriber;
pub mod subscriber_email;
pub mod subscriber_name;
pub mod subscriber_status;
pub mod theme;
pub mod transaction;
pub mod transaction_status;
