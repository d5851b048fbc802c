/// The payment processor account the settings screen links to. There is no
/// real integration behind it; connecting yields a canned account.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ProcessorAccount {
    pub account_id: String,
    pub email: String,
}
