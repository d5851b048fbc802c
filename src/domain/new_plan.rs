use actix_web::web;
use serde::Deserialize;

use crate::domain::plan_name::PlanName;
use crate::domain::plan_price::PlanPrice;

pub struct NewPlan {
    pub name: PlanName,
    pub price: PlanPrice,
}

#[derive(Deserialize)]
pub struct NewPlanBody {
    pub name: String,
    pub price: f64,
}

impl TryFrom<web::Json<NewPlanBody>> for NewPlan {
    type Error = String;

    fn try_from(body: web::Json<NewPlanBody>) -> Result<Self, Self::Error> {
        let name = PlanName::parse(body.name.clone())?;
        let price = PlanPrice::parse(body.price)?;

        Ok(NewPlan { name, price })
    }
}
