use actix_web::{get, post, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, ErrorDetail};
use crate::middleware::AuthenticatedMember;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Issued-token response shared by register and login.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub username: String,
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Register a new member and hand out a first token.
#[utoipa::path(
    post,
    path = "/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Member registered", body = TokenResponse),
        (status = 400, description = "Empty fields or username taken", body = ErrorDetail)
    )
)]
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let member = state.members.register(&body.username, &body.password)?;
    let token = state.tokens.issue(&member.username);

    tracing::info!(username = %member.username, "member registered");

    Ok(HttpResponse::Created().json(TokenResponse {
        username: member.username,
        token,
    }))
}

/// Authenticate an existing member and return a fresh token.
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Member logged in", body = TokenResponse),
        (status = 400, description = "Empty fields or bad credentials", body = ErrorDetail)
    )
)]
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let username = body.username.trim();
    if username.is_empty() || body.password.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "username and password are required".into(),
        ));
    }

    // One message for both unknown-user and wrong-password; the response
    // must not reveal whether the username exists.
    if !state.members.verify_password(username, &body.password)? {
        return Err(AppError::InvalidInput(
            "invalid username or password".into(),
        ));
    }

    let token = state.tokens.issue(username);

    Ok(HttpResponse::Ok().json(TokenResponse {
        username: username.to_string(),
        token,
    }))
}

/// Profile of the currently authenticated member.
#[utoipa::path(
    get,
    path = "/profile",
    tag = "Auth",
    responses(
        (status = 200, description = "Current member profile", body = ProfileResponse),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDetail)
    ),
    security(("bearer_token" = []))
)]
#[get("/profile")]
pub async fn profile(member: AuthenticatedMember) -> Result<HttpResponse, AppError> {
    let member = member.into_inner();

    Ok(HttpResponse::Ok().json(ProfileResponse {
        username: member.username,
        created_at: member.created_at,
    }))
}
