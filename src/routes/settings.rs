use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use secrecy::Secret;
use serde::Deserialize;

use crate::auth::AdminSession;
use crate::domain::admin_profile::AdminProfile;
use crate::domain::processor::ProcessorAccount;
use crate::domain::theme::Theme;
use crate::store::settings_store::{SettingsStore, SettingsStoreError};

#[derive(Deserialize)]
pub struct ProfileBody {
    pub username: String,
    pub email: String,
    pub billing_email: String,
}

#[derive(Deserialize)]
pub struct PasswordBody {
    pub new_password: Secret<String>,
    pub confirm_password: Secret<String>,
}

#[derive(Deserialize)]
pub struct ThemeBody {
    pub theme: String,
}

#[derive(serde::Serialize)]
pub struct ProcessorStatus {
    pub connected: bool,
    pub account: Option<ProcessorAccount>,
}

#[derive(thiserror::Error)]
pub enum SettingsError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] SettingsStoreError),
}

impl std::fmt::Debug for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for SettingsError {
    fn status_code(&self) -> StatusCode {
        match self {
            SettingsError::Validation(_) => StatusCode::BAD_REQUEST,
            SettingsError::Store(SettingsStoreError::PasswordMismatch) => StatusCode::BAD_REQUEST,
        }
    }
}

#[tracing::instrument(name = "Fetching the admin profile", skip(_session, store))]
pub async fn handle_get_profile(
    _session: AdminSession,
    store: web::Data<SettingsStore>,
) -> impl Responder {
    HttpResponse::Ok().json(store.profile())
}

#[tracing::instrument(name = "Updating the admin profile", skip(_session, body, store))]
pub async fn handle_update_profile(
    _session: AdminSession,
    body: web::Json<ProfileBody>,
    store: web::Data<SettingsStore>,
) -> Result<HttpResponse, SettingsError> {
    let profile = AdminProfile::parse(
        body.username.clone(),
        body.email.clone(),
        body.billing_email.clone(),
    )
    .map_err(SettingsError::Validation)?;

    Ok(HttpResponse::Ok().json(store.update_profile(profile)))
}

#[tracing::instrument(name = "Changing the account password", skip(_session, body, store))]
pub async fn handle_change_password(
    _session: AdminSession,
    body: web::Json<PasswordBody>,
    store: web::Data<SettingsStore>,
) -> Result<HttpResponse, SettingsError> {
    store.change_password(body.new_password.clone(), body.confirm_password.clone())?;

    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(name = "Setting the theme", skip(_session, body, store), fields(theme = %body.theme))]
pub async fn handle_set_theme(
    _session: AdminSession,
    body: web::Json<ThemeBody>,
    store: web::Data<SettingsStore>,
) -> Result<HttpResponse, SettingsError> {
    let theme = Theme::parse(body.theme.clone()).map_err(SettingsError::Validation)?;

    Ok(HttpResponse::Ok().json(store.set_theme(theme)))
}

#[tracing::instrument(name = "Fetching the payment processor link", skip(_session, store))]
pub async fn handle_get_processor(
    _session: AdminSession,
    store: web::Data<SettingsStore>,
) -> impl Responder {
    let account = store.processor();

    HttpResponse::Ok().json(ProcessorStatus {
        connected: account.is_some(),
        account,
    })
}

#[tracing::instrument(name = "Connecting the payment processor", skip(_session, store))]
pub async fn handle_connect_processor(
    _session: AdminSession,
    store: web::Data<SettingsStore>,
) -> impl Responder {
    HttpResponse::Ok().json(store.connect_processor())
}

#[tracing::instrument(name = "Disconnecting the payment processor", skip(_session, store))]
pub async fn handle_disconnect_processor(
    _session: AdminSession,
    store: web::Data<SettingsStore>,
) -> impl Responder {
    store.disconnect_processor();

    HttpResponse::NoContent().finish()
}
