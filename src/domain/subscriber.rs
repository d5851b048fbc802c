use crate::domain::payment::Payment;
use crate::domain::subscriber_email::SubscriberEmail;
use crate::domain::subscriber_name::SubscriberName;
use crate::domain::subscriber_status::SubscriberStatus;

#[derive(Debug, Clone, serde::Serialize)]
pub struct Subscriber {
    pub id: u32,
    pub name: SubscriberName,
    pub email: SubscriberEmail,
    pub status: SubscriberStatus,
    pub history: Vec<Payment>,
}
