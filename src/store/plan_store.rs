use std::sync::RwLock;

use crate::domain::new_plan::NewPlan;
use crate::domain::plan::Plan;
use crate::domain::plan_name::PlanName;
use crate::domain::plan_price::PlanPrice;
use crate::domain::plan_status::PlanStatus;

#[derive(thiserror::Error, Debug)]
pub enum PlanStoreError {
    #[error("Plan {0} was not found.")]
    NotFound(u32),
    #[error("You cannot delete a plan with active subscribers.")]
    HasSubscribers(u32),
}

pub struct PlanStore {
    inner: RwLock<Inner>,
}

struct Inner {
    plans: Vec<Plan>,
    next_id: u32,
}

impl PlanStore {
    pub fn new() -> PlanStore {
        PlanStore {
            inner: RwLock::new(Inner {
                plans: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn seeded() -> PlanStore {
        let plans = vec![
            seed_plan(1, "Basic Plan", 10.0, PlanStatus::Active, 5),
            seed_plan(2, "Pro Plan", 30.0, PlanStatus::Inactive, 12),
        ];

        PlanStore {
            inner: RwLock::new(Inner {
                next_id: plans.len() as u32 + 1,
                plans,
            }),
        }
    }

    pub fn list(&self) -> Vec<Plan> {
        self.read().plans.clone()
    }

    pub fn get(&self, id: u32) -> Result<Plan, PlanStoreError> {
        self.read()
            .plans
            .iter()
            .find(|plan| plan.id == id)
            .cloned()
            .ok_or(PlanStoreError::NotFound(id))
    }

    /// New plans start out active with no subscribers on them.
    pub fn add(&self, draft: NewPlan) -> Plan {
        let mut inner = self.write();
        let plan = Plan {
            id: inner.next_id,
            name: draft.name,
            price: draft.price,
            status: PlanStatus::Active,
            subscribers: 0,
        };

        inner.next_id += 1;
        inner.plans.push(plan.clone());

        plan
    }

    /// Replaces name and price; status and subscriber count are managed by
    /// their own actions.
    pub fn update(&self, id: u32, draft: NewPlan) -> Result<Plan, PlanStoreError> {
        let mut inner = self.write();
        let mut updated = None;

        let next_list: Vec<Plan> = inner
            .plans
            .iter()
            .map(|plan| {
                if plan.id == id {
                    let next = Plan {
                        name: draft.name.clone(),
                        price: draft.price,
                        ..plan.clone()
                    };
                    updated = Some(next.clone());
                    next
                } else {
                    plan.clone()
                }
            })
            .collect();
        inner.plans = next_list;

        updated.ok_or(PlanStoreError::NotFound(id))
    }

    /// A plan that still has subscribers cannot be deleted.
    pub fn remove(&self, id: u32) -> Result<(), PlanStoreError> {
        let mut inner = self.write();
        let plan = inner
            .plans
            .iter()
            .find(|plan| plan.id == id)
            .ok_or(PlanStoreError::NotFound(id))?;

        if plan.subscribers > 0 {
            return Err(PlanStoreError::HasSubscribers(id));
        }

        let next_list: Vec<Plan> = inner
            .plans
            .iter()
            .filter(|plan| plan.id != id)
            .cloned()
            .collect();
        inner.plans = next_list;

        Ok(())
    }

    pub fn toggle_status(&self, id: u32) -> Result<Plan, PlanStoreError> {
        let mut inner = self.write();
        let mut toggled = None;

        let next_list: Vec<Plan> = inner
            .plans
            .iter()
            .map(|plan| {
                if plan.id == id {
                    let next = Plan {
                        status: plan.status.toggled(),
                        ..plan.clone()
                    };
                    toggled = Some(next.clone());
                    next
                } else {
                    plan.clone()
                }
            })
            .collect();
        inner.plans = next_list;

        toggled.ok_or(PlanStoreError::NotFound(id))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().expect("Plan store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().expect("Plan store lock poisoned")
    }
}

fn seed_plan(id: u32, name: &str, price: f64, status: PlanStatus, subscribers: u32) -> Plan {
    Plan {
        id,
        name: PlanName::parse(String::from(name)).expect("Seed plan name is valid"),
        price: PlanPrice::parse(price).expect("Seed plan price is valid"),
        status,
        subscribers,
    }
}
