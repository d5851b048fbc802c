use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use validator::validate_email;

use crate::auth::AuthGate;
use crate::config::AdminSettings;

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: Secret<String>,
}

#[derive(thiserror::Error)]
pub enum LoginError {
    #[error("Please fill in both fields.")]
    MissingFields,
    #[error("Invalid email format.")]
    InvalidEmail,
    #[error("Invalid credentials.")]
    InvalidCredentials,
}

impl std::fmt::Debug for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for LoginError {
    fn status_code(&self) -> StatusCode {
        match self {
            LoginError::MissingFields => StatusCode::BAD_REQUEST,
            LoginError::InvalidEmail => StatusCode::BAD_REQUEST,
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        }
    }
}

#[tracing::instrument(
    name = "Logging the admin in",
    skip(body, gate, admin),
    fields(email = %body.email)
)]
pub async fn handle_login(
    body: web::Json<LoginBody>,
    gate: web::Data<AuthGate>,
    admin: web::Data<AdminSettings>,
) -> Result<HttpResponse, LoginError> {
    if body.email.trim().is_empty() || body.password.expose_secret().is_empty() {
        return Err(LoginError::MissingFields);
    }

    if !validate_email(&body.email) {
        return Err(LoginError::InvalidEmail);
    }

    let credentials_match = body.email == admin.get_email()
        && body.password.expose_secret() == admin.get_password().expose_secret();

    if !credentials_match {
        tracing::warn!("Rejected login attempt");
        return Err(LoginError::InvalidCredentials);
    }

    gate.log_in();

    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(name = "Logging the admin out", skip(gate))]
pub async fn handle_logout(gate: web::Data<AuthGate>) -> impl Responder {
    gate.log_out();

    HttpResponse::Ok().finish()
}
