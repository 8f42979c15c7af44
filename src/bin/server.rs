use actix_web::{middleware::ErrorHandlers, web, App, HttpServer};
use std::process;
use tracing_actix_web::TracingLogger;

use mitra::config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = match config::Server::load() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error:?}");
            process::exit(1);
        }
    };

    let app = match mitra::App::new(config).await {
        Ok(app) => app,
        Err(error) => {
            eprintln!("{error:?}");
            process::exit(1);
        }
    };

    let workers = app.config.workers.get();
    let address = (app.config.ip, app.config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app.clone()))
            .wrap(TracingLogger::<mitra::http::util::QuieterRootSpanBuilder>::new())
            .wrap(ErrorHandlers::new().default_handler(mitra::http::util::handle_actix_web_error))
            .configure(mitra::http::controllers::configure)
    })
    .workers(workers)
    .bind(address)?
    .run()
    .await
}
