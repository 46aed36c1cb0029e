use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{AppError, ErrorDetail};
use crate::middleware::AuthenticatedMember;
use crate::models::Message;
use crate::state::AppState;
use crate::validators;

/// How many messages the list endpoint returns at most.
pub const RECENT_MESSAGE_LIMIT: usize = 100;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PostMessageRequest {
    pub text: String,
}

/// List the most recent group chat messages, oldest first.
#[utoipa::path(
    get,
    path = "/messages",
    tag = "Messages",
    responses(
        (status = 200, description = "Up to the last 100 messages, id-ascending", body = [Message]),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDetail)
    ),
    security(("bearer_token" = []))
)]
#[get("/messages")]
pub async fn list_messages(
    state: web::Data<AppState>,
    _member: AuthenticatedMember,
) -> Result<HttpResponse, AppError> {
    let messages = state.messages.recent(RECENT_MESSAGE_LIMIT)?;
    Ok(HttpResponse::Ok().json(messages))
}

/// Post a message to the group chat as the authenticated member.
#[utoipa::path(
    post,
    path = "/messages",
    tag = "Messages",
    request_body = PostMessageRequest,
    responses(
        (status = 201, description = "Message stored", body = Message),
        (status = 400, description = "Empty or oversized text", body = ErrorDetail),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDetail)
    ),
    security(("bearer_token" = []))
)]
#[post("/messages")]
pub async fn post_message(
    state: web::Data<AppState>,
    member: AuthenticatedMember,
    body: web::Json<PostMessageRequest>,
) -> Result<HttpResponse, AppError> {
    let text = body.text.trim();
    if text.is_empty() {
        return Err(AppError::InvalidInput(
            "message text must not be empty".into(),
        ));
    }
    if !validators::validate_message_text(text) {
        return Err(AppError::InvalidInput("message text is too long".into()));
    }

    let member = member.into_inner();
    let message = state.messages.append(&member.username, text)?;

    tracing::info!(username = %member.username, id = message.id, "message posted");

    Ok(HttpResponse::Created().json(message))
}
