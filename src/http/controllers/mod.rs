use actix_web::{web, HttpResponse};
use serde_json::json;

pub mod alerts;
pub mod compliance;
pub mod users;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health))
            .route("/register", web::post().to(users::register))
            .route("/login", web::post().to(users::login))
            .route("/logout", web::post().to(users::logout))
            .service(
                web::scope("/compliance")
                    .service(web::resource("").route(web::get().to(compliance::fetch)))
                    .route("/mark-completed", web::post().to(compliance::mark_completed))
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(compliance::update))
                            .route(web::delete().to(compliance::delete)),
                    ),
            )
            .service(
                web::scope("/alerts")
                    .service(
                        web::resource("")
                            .route(web::get().to(alerts::fetch))
                            .route(web::post().to(alerts::create)),
                    )
                    .route("/mark-read", web::post().to(alerts::mark_read))
                    .route("/mark-all-read", web::post().to(alerts::mark_all_read))
                    .service(web::resource("/{id}").route(web::delete().to(alerts::delete))),
            ),
    );
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "OK", "message": "Server is running" }))
}
