use std::future::{ready, Ready};
use std::sync::RwLock;

use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::{web, FromRequest, HttpRequest, ResponseError};

/// The authenticated/not flag gating the admin routes. There is no token
/// and no expiry; logging in flips the flag, logging out clears it.
pub struct AuthGate {
    authenticated: RwLock<bool>,
}

impl AuthGate {
    pub fn new() -> AuthGate {
        AuthGate {
            authenticated: RwLock::new(false),
        }
    }

    pub fn log_in(&self) {
        *self.authenticated.write().expect("Auth gate lock poisoned") = true;
    }

    pub fn log_out(&self) {
        *self.authenticated.write().expect("Auth gate lock poisoned") = false;
    }

    pub fn is_authenticated(&self) -> bool {
        *self.authenticated.read().expect("Auth gate lock poisoned")
    }
}

impl Default for AuthGate {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(thiserror::Error)]
pub enum AuthError {
    #[error("Authentication required.")]
    NotLoggedIn,
}

impl std::fmt::Debug for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::NotLoggedIn => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Extractor admin handlers take to require a logged-in session. Resolves
/// against the application's AuthGate; unauthenticated requests get 401
/// before the handler body runs.
pub struct AdminSession;

impl FromRequest for AdminSession {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.app_data::<web::Data<AuthGate>>() {
            Some(gate) if gate.is_authenticated() => ready(Ok(AdminSession)),
            _ => ready(Err(AuthError::NotLoggedIn)),
        }
    }
}
