use actix_web::web;

pub mod auth;
pub mod hello;
pub mod messages;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(hello::hello)
        .service(auth::register)
        .service(auth::login)
        .service(auth::profile)
        .service(messages::list_messages)
        .service(messages::post_message);
}
