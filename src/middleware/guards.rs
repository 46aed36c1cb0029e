//! Authentication guard that resolves the calling member at the type level.
//! Handlers that take [`AuthenticatedMember`] cannot accidentally skip the
//! token check.

use actix_web::{http::header, web, FromRequest, HttpRequest};
use futures::future::{ready, Ready};

use crate::error::AppError;
use crate::models::Member;
use crate::state::AppState;

/// The member authenticated by the request's bearer token.
///
/// Extraction reads the `Authorization` header, verifies the signed token,
/// and resolves the member in the directory. Every protected route goes
/// through this single choke point; all failures collapse into one 401.
#[derive(Debug, Clone)]
pub struct AuthenticatedMember(pub Member);

impl AuthenticatedMember {
    pub fn into_inner(self) -> Member {
        self.0
    }
}

fn authenticate(req: &HttpRequest) -> Result<Member, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or(AppError::Internal)?;

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    // Scheme is exactly "Bearer ": single space, case-sensitive.
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?
        .trim();

    let claims = state.tokens.verify(token).ok_or_else(|| {
        tracing::warn!("rejected bearer token: invalid or expired");
        AppError::Unauthorized
    })?;

    if claims.username.is_empty() {
        return Err(AppError::Unauthorized);
    }

    // A validly-signed token can outlive the directory entry it names
    // (e.g. replayed after a restart cleared the table).
    state
        .members
        .find(&claims.username)?
        .ok_or(AppError::Unauthorized)
}

impl FromRequest for AuthenticatedMember {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            authenticate(req)
                .map(AuthenticatedMember)
                .map_err(Into::into),
        )
    }
}
