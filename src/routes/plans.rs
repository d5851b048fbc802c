use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder, ResponseError};

use crate::auth::AdminSession;
use crate::domain::new_plan::{NewPlan, NewPlanBody};
use crate::store::plan_store::{PlanStore, PlanStoreError};

#[derive(thiserror::Error)]
pub enum PlansError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] PlanStoreError),
}

impl std::fmt::Debug for PlansError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for PlansError {
    fn status_code(&self) -> StatusCode {
        match self {
            PlansError::Validation(_) => StatusCode::BAD_REQUEST,
            PlansError::Store(PlanStoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            PlansError::Store(PlanStoreError::HasSubscribers(_)) => StatusCode::CONFLICT,
        }
    }
}

#[tracing::instrument(name = "Listing subscription plans", skip(_session, store))]
pub async fn handle_list_plans(
    _session: AdminSession,
    store: web::Data<PlanStore>,
) -> impl Responder {
    HttpResponse::Ok().json(store.list())
}

#[tracing::instrument(
    name = "Creating a new subscription plan",
    skip(_session, body, store),
    fields(plan_name = %body.name)
)]
pub async fn handle_create_plan(
    _session: AdminSession,
    body: web::Json<NewPlanBody>,
    store: web::Data<PlanStore>,
) -> impl Responder {
    let new_plan: NewPlan = match body.try_into() {
        Ok(plan) => plan,
        Err(err) => {
            tracing::error!("Validation error: {:?}", err);
            return HttpResponse::BadRequest().body(err);
        }
    };

    let plan = store.add(new_plan);

    HttpResponse::Created().json(plan)
}

#[tracing::instrument(name = "Updating a subscription plan", skip(_session, body, store))]
pub async fn handle_update_plan(
    _session: AdminSession,
    path: web::Path<u32>,
    body: web::Json<NewPlanBody>,
    store: web::Data<PlanStore>,
) -> Result<HttpResponse, PlansError> {
    let draft: NewPlan = body.try_into().map_err(PlansError::Validation)?;
    let plan = store.update(path.into_inner(), draft)?;

    Ok(HttpResponse::Ok().json(plan))
}

/// Deleting is refused with a 409 while subscribers are still on the plan.
#[tracing::instrument(name = "Deleting a subscription plan", skip(_session, store))]
pub async fn handle_delete_plan(
    _session: AdminSession,
    path: web::Path<u32>,
    store: web::Data<PlanStore>,
) -> Result<HttpResponse, PlansError> {
    store.remove(path.into_inner())?;

    Ok(HttpResponse::NoContent().finish())
}

#[tracing::instrument(name = "Toggling a subscription plan's status", skip(_session, store))]
pub async fn handle_toggle_plan(
    _session: AdminSession,
    path: web::Path<u32>,
    store: web::Data<PlanStore>,
) -> Result<HttpResponse, PlansError> {
    let plan = store.toggle_status(path.into_inner())?;

    Ok(HttpResponse::Ok().json(plan))
}
