use actix_web::{HttpResponse, web};

use crate::handlers::{application_handlers, confirmation_handlers, legal_handlers};

/// Fixed route table of the site.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(application_handlers::form))
        .route("/", web::post().to(application_handlers::submit))
        .route("/termos-de-uso", web::get().to(legal_handlers::terms))
        .route("/politica-de-privacidade", web::get().to(legal_handlers::privacy))
        .route("/obrigado", web::get().to(confirmation_handlers::thanks));
}

pub async fn not_found() -> HttpResponse {
    let html = include_str!("../templates/errors/404.html");
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
