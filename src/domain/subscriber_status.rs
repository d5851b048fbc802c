#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum SubscriberStatus {
    Active,
    Suspended,
    Cancelled,
}

impl SubscriberStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, SubscriberStatus::Active)
    }

    /// The suspend/activate action: an active subscriber becomes suspended,
    /// everyone else becomes active again.
    pub fn toggled(&self) -> SubscriberStatus {
        match self {
            SubscriberStatus::Active => SubscriberStatus::Suspended,
            _ => SubscriberStatus::Active,
        }
    }

    pub fn parse(status: String) -> Result<SubscriberStatus, String> {
        match status.as_str() {
            "Active" => Ok(SubscriberStatus::Active),
            "Suspended" => Ok(SubscriberStatus::Suspended),
            "Cancelled" => Ok(SubscriberStatus::Cancelled),
            _ => Err(format!("{} is not a valid subscriber status", status)),
        }
    }
}

impl AsRef<str> for SubscriberStatus {
    fn as_ref(&self) -> &str {
        match self {
            SubscriberStatus::Active => "Active",
            SubscriberStatus::Suspended => "Suspended",
            SubscriberStatus::Cancelled => "Cancelled",
        }
    }
}
