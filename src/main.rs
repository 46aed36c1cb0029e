use actix_web::{web, App, HttpResponse, HttpServer};
use utoipa::OpenApi;

use easyapp_service::{config, error, logging, openapi::ApiDoc, routes, state::AppState};

async fn openapi_json(doc: web::Data<utoipa::openapi::OpenApi>) -> Result<HttpResponse, error::AppError> {
    let body = serde_json::to_string(&*doc).map_err(|_| error::AppError::Internal)?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Swagger UI served as a static page pointed at the generated document.
async fn swagger_ui() -> HttpResponse {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Easyapp Service API</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            SwaggerUIBundle({
                url: "/openapi.json",
                dom_id: '#swagger-ui',
                deepLinking: true,
            });
        };
    </script>
</body>
</html>"#,
    )
}

#[actix_web::main]
async fn main() -> Result<(), error::AppError> {
    logging::init_tracing();
    let cfg = config::Config::from_env()?;

    let state = AppState::new();

    let bind_addr = format!("{}:{}", cfg.host, cfg.port);
    tracing::info!(%bind_addr, "starting easyapp-service");

    HttpServer::new(move || {
        let openapi_doc = ApiDoc::openapi();

        App::new()
            .app_data(web::Data::new(openapi_doc))
            .app_data(web::Data::new(state.clone()))
            .route("/health", web::get().to(health_check))
            .route("/docs", web::get().to(swagger_ui))
            .route("/openapi.json", web::get().to(openapi_json))
            .configure(routes::configure_routes)
    })
    .bind(&bind_addr)
    .map_err(|e| error::AppError::StartServer(e.to_string()))?
    .run()
    .await
    .map_err(|e| error::AppError::StartServer(e.to_string()))?;

    Ok(())
}
