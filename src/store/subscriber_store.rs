use std::sync::RwLock;

use chrono::NaiveDate;

use crate::domain::new_subscriber::NewSubscriber;
use crate::domain::payment::Payment;
use crate::domain::subscriber::Subscriber;
use crate::domain::subscriber_email::SubscriberEmail;
use crate::domain::subscriber_name::SubscriberName;
use crate::domain::subscriber_status::SubscriberStatus;

#[derive(thiserror::Error, Debug)]
pub enum SubscriberStoreError {
    #[error("Subscriber {0} was not found.")]
    NotFound(u32),
}

/// The subscribers screen's collection. Mutations build the replacement list
/// and swap it in under the write lock, one user action at a time.
pub struct SubscriberStore {
    inner: RwLock<Inner>,
}

struct Inner {
    subscribers: Vec<Subscriber>,
    next_id: u32,
}

/// Filter criteria of the subscribers table. `None` status means "All";
/// the search term matches the name case-insensitively.
pub struct SubscriberFilter {
    pub status: Option<SubscriberStatus>,
    pub search: String,
}

impl SubscriberStore {
    pub fn new() -> SubscriberStore {
        SubscriberStore {
            inner: RwLock::new(Inner {
                subscribers: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// The sample records every fresh process starts from.
    pub fn seeded() -> SubscriberStore {
        let subscribers = vec![
            seed_subscriber(
                1,
                "John Doe",
                "john@example.com",
                SubscriberStatus::Active,
                vec![(2024, 1, 1, "$100"), (2024, 2, 1, "$100")],
            ),
            seed_subscriber(
                2,
                "Jane Smith",
                "jane@example.com",
                SubscriberStatus::Suspended,
                vec![(2024, 1, 15, "$200")],
            ),
            seed_subscriber(
                3,
                "Alice Johnson",
                "alice@example.com",
                SubscriberStatus::Cancelled,
                vec![],
            ),
        ];

        SubscriberStore {
            inner: RwLock::new(Inner {
                next_id: subscribers.len() as u32 + 1,
                subscribers,
            }),
        }
    }

    pub fn list(&self) -> Vec<Subscriber> {
        self.read().subscribers.clone()
    }

    pub fn filtered(&self, filter: &SubscriberFilter) -> Vec<Subscriber> {
        filter_subscribers(&self.read().subscribers, filter)
    }

    pub fn get(&self, id: u32) -> Result<Subscriber, SubscriberStoreError> {
        self.read()
            .subscribers
            .iter()
            .find(|subscriber| subscriber.id == id)
            .cloned()
            .ok_or(SubscriberStoreError::NotFound(id))
    }

    /// Appends a subscriber from a validated draft. New subscribers always
    /// start out active with an empty payment history.
    pub fn add(&self, draft: NewSubscriber) -> Subscriber {
        let mut inner = self.write();
        let subscriber = Subscriber {
            id: inner.next_id,
            name: draft.name,
            email: draft.email,
            status: SubscriberStatus::Active,
            history: Vec::new(),
        };

        inner.next_id += 1;
        inner.subscribers.push(subscriber.clone());

        subscriber
    }

    /// Replaces name and email of an existing subscriber; status and payment
    /// history are not part of the edit form and stay untouched.
    pub fn update(&self, id: u32, draft: NewSubscriber) -> Result<Subscriber, SubscriberStoreError> {
        let mut inner = self.write();
        let mut updated = None;

        let next_list: Vec<Subscriber> = inner
            .subscribers
            .iter()
            .map(|subscriber| {
                if subscriber.id == id {
                    let next = Subscriber {
                        name: draft.name.clone(),
                        email: draft.email.clone(),
                        ..subscriber.clone()
                    };
                    updated = Some(next.clone());
                    next
                } else {
                    subscriber.clone()
                }
            })
            .collect();
        inner.subscribers = next_list;

        updated.ok_or(SubscriberStoreError::NotFound(id))
    }

    pub fn remove(&self, id: u32) -> Result<(), SubscriberStoreError> {
        let mut inner = self.write();

        if !inner.subscribers.iter().any(|subscriber| subscriber.id == id) {
            return Err(SubscriberStoreError::NotFound(id));
        }

        // Freed ids are never handed out again; next_id only moves forward.
        let next_list: Vec<Subscriber> = inner
            .subscribers
            .iter()
            .filter(|subscriber| subscriber.id != id)
            .cloned()
            .collect();
        inner.subscribers = next_list;

        Ok(())
    }

    pub fn toggle_status(&self, id: u32) -> Result<Subscriber, SubscriberStoreError> {
        let mut inner = self.write();
        let mut toggled = None;

        let next_list: Vec<Subscriber> = inner
            .subscribers
            .iter()
            .map(|subscriber| {
                if subscriber.id == id {
                    let next = Subscriber {
                        status: subscriber.status.toggled(),
                        ..subscriber.clone()
                    };
                    toggled = Some(next.clone());
                    next
                } else {
                    subscriber.clone()
                }
            })
            .collect();
        inner.subscribers = next_list;

        toggled.ok_or(SubscriberStoreError::NotFound(id))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().expect("Subscriber store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().expect("Subscriber store lock poisoned")
    }
}

pub fn filter_subscribers(
    subscribers: &[Subscriber],
    filter: &SubscriberFilter,
) -> Vec<Subscriber> {
    let search = filter.search.to_lowercase();

    subscribers
        .iter()
        .filter(|subscriber| {
            let matches_status = filter
                .status
                .map_or(true, |status| subscriber.status == status);
            let matches_search = subscriber.name.as_ref().to_lowercase().contains(&search);

            matches_status && matches_search
        })
        .cloned()
        .collect()
}

fn seed_subscriber(
    id: u32,
    name: &str,
    email: &str,
    status: SubscriberStatus,
    history: Vec<(i32, u32, u32, &str)>,
) -> Subscriber {
    Subscriber {
        id,
        name: SubscriberName::parse(String::from(name)).expect("Seed subscriber name is valid"),
        email: SubscriberEmail::parse(String::from(email)).expect("Seed subscriber email is valid"),
        status,
        history: history
            .into_iter()
            .map(|(year, month, day, amount)| Payment {
                date: NaiveDate::from_ymd_opt(year, month, day).expect("Seed payment date is valid"),
                amount: String::from(amount),
            })
            .collect(),
    }
}
