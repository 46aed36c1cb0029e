use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error::ErrorDetail;
use crate::models::Message;
use crate::routes::auth::{LoginRequest, ProfileResponse, RegisterRequest, TokenResponse};
use crate::routes::hello::HelloResponse;
use crate::routes::messages::PostMessageRequest;

/// OpenAPI document covering the service's REST endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::hello::hello,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::auth::profile,
        crate::routes::messages::list_messages,
        crate::routes::messages::post_message
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        TokenResponse,
        ProfileResponse,
        PostMessageRequest,
        HelloResponse,
        Message,
        ErrorDetail
    )),
    modifiers(&BearerToken),
    tags(
        (name = "Hello", description = "Liveness greeting"),
        (name = "Auth", description = "Member registration & token APIs"),
        (name = "Messages", description = "Group chat message APIs")
    )
)]
pub struct ApiDoc;

/// Registers the bearer-token security scheme referenced by protected paths.
pub struct BearerToken;

impl Modify for BearerToken {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_token",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}
