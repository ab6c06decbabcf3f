use actix_web::{web, HttpResponse};
use serde::Serialize;

use super::ENDPOINTS;

#[derive(Debug, Serialize)]
struct Sitemap {
    endpoints: &'static [&'static str],
}

async fn sitemap() -> HttpResponse {
    HttpResponse::Ok().json(Sitemap {
        endpoints: ENDPOINTS,
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(sitemap));
}
