use actix_web::{get, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Greeting probe; the one route that needs neither a body nor a token.
#[derive(Debug, Serialize, ToSchema)]
pub struct HelloResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/hello",
    tag = "Hello",
    responses((status = 200, description = "Greeting message", body = HelloResponse))
)]
#[get("/hello")]
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(HelloResponse {
        message: "Hello!".to_string(),
        timestamp: Utc::now(),
    })
}
