use crate::domain::plan_name::PlanName;
use crate::domain::plan_price::PlanPrice;
use crate::domain::plan_status::PlanStatus;

#[derive(Debug, Clone, serde::Serialize)]
pub struct Plan {
    pub id: u32,
    pub name: PlanName,
    pub price: PlanPrice,
    pub status: PlanStatus,
    /// How many subscribers are currently on the plan. A plan with
    /// subscribers cannot be deleted.
    pub subscribers: u32,
}
