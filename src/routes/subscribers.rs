use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use serde::Deserialize;

use crate::auth::AdminSession;
use crate::domain::new_subscriber::{NewSubscriber, NewSubscriberBody};
use crate::domain::subscriber_status::SubscriberStatus;
use crate::export::subscribers_csv;
use crate::store::subscriber_store::{SubscriberFilter, SubscriberStore, SubscriberStoreError};

#[derive(Deserialize, Debug)]
pub struct SubscriberListParams {
    pub status: Option<String>,
    pub search: Option<String>,
}

impl SubscriberListParams {
    fn to_filter(&self) -> Result<SubscriberFilter, String> {
        let status = match self.status.as_deref() {
            None | Some("All") | Some("") => None,
            Some(other) => Some(SubscriberStatus::parse(String::from(other))?),
        };

        Ok(SubscriberFilter {
            status,
            search: self.search.clone().unwrap_or_default(),
        })
    }
}

#[derive(thiserror::Error)]
pub enum SubscribersError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] SubscriberStoreError),
}

impl std::fmt::Debug for SubscribersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for SubscribersError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubscribersError::Validation(_) => StatusCode::BAD_REQUEST,
            SubscribersError::Store(SubscriberStoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }
}

#[tracing::instrument(name = "Listing subscribers", skip(_session, params, store))]
pub async fn handle_list_subscribers(
    _session: AdminSession,
    params: web::Query<SubscriberListParams>,
    store: web::Data<SubscriberStore>,
) -> Result<HttpResponse, SubscribersError> {
    let filter = params.to_filter().map_err(SubscribersError::Validation)?;

    Ok(HttpResponse::Ok().json(store.filtered(&filter)))
}

#[tracing::instrument(name = "Fetching a subscriber's details", skip(_session, store))]
pub async fn handle_get_subscriber(
    _session: AdminSession,
    path: web::Path<u32>,
    store: web::Data<SubscriberStore>,
) -> Result<HttpResponse, SubscribersError> {
    let subscriber = store.get(path.into_inner())?;

    Ok(HttpResponse::Ok().json(subscriber))
}

#[tracing::instrument(
    name = "Creating a new subscriber",
    skip(_session, body, store),
    fields(
        subscriber_email = %body.email,
        subscriber_name = %body.name
    )
)]
pub async fn handle_create_subscriber(
    _session: AdminSession,
    body: web::Json<NewSubscriberBody>,
    store: web::Data<SubscriberStore>,
) -> impl Responder {
    let new_subscriber: NewSubscriber = match body.try_into() {
        Ok(subscriber) => subscriber,
        Err(err) => {
            tracing::error!("Validation error: {:?}", err);
            return HttpResponse::BadRequest().body(err);
        }
    };

    let subscriber = store.add(new_subscriber);

    HttpResponse::Created().json(subscriber)
}

#[tracing::instrument(name = "Updating a subscriber", skip(_session, body, store))]
pub async fn handle_update_subscriber(
    _session: AdminSession,
    path: web::Path<u32>,
    body: web::Json<NewSubscriberBody>,
    store: web::Data<SubscriberStore>,
) -> Result<HttpResponse, SubscribersError> {
    let draft: NewSubscriber = body.try_into().map_err(SubscribersError::Validation)?;
    let subscriber = store.update(path.into_inner(), draft)?;

    Ok(HttpResponse::Ok().json(subscriber))
}

#[tracing::instrument(name = "Deleting a subscriber", skip(_session, store))]
pub async fn handle_delete_subscriber(
    _session: AdminSession,
    path: web::Path<u32>,
    store: web::Data<SubscriberStore>,
) -> Result<HttpResponse, SubscribersError> {
    store.remove(path.into_inner())?;

    Ok(HttpResponse::NoContent().finish())
}

#[tracing::instrument(name = "Toggling a subscriber's status", skip(_session, store))]
pub async fn handle_toggle_subscriber(
    _session: AdminSession,
    path: web::Path<u32>,
    store: web::Data<SubscriberStore>,
) -> Result<HttpResponse, SubscribersError> {
    let subscriber = store.toggle_status(path.into_inner())?;

    Ok(HttpResponse::Ok().json(subscriber))
}

/// Exports the current filtered view, not the whole store: the same
/// criteria as the list endpoint select the rows.
#[tracing::instrument(name = "Exporting subscribers to CSV", skip(_session, params, store))]
pub async fn handle_export_subscribers(
    _session: AdminSession,
    params: web::Query<SubscriberListParams>,
    store: web::Data<SubscriberStore>,
) -> Result<HttpResponse, SubscribersError> {
    let filter = params.to_filter().map_err(SubscribersError::Validation)?;
    let csv = subscribers_csv(&store.filtered(&filter));

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"subscribers.csv\"",
        ))
        .body(csv))
}
