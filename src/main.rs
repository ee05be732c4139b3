use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

mod config;
mod controllers;
mod models;
mod notes;

use notes::NoteStore;

pub struct AppState {
    pub store: NoteStore,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let port = config::port();
    log::info!("{} v{}", config::SERVICE_NAME, env!("CARGO_PKG_VERSION"));

    // One store shared by every worker; must be built outside the
    // HttpServer factory closure or each worker would get its own copy.
    let state = web::Data::new(AppState {
        store: NoteStore::new(),
    });

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
    })
    .bind(("0.0.0.0", port))?
    .run();

    log::info!("Listening on 0.0.0.0:{}", port);

    let server_handle = server.handle();

    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        log::info!("Received Ctrl+C, shutting down...");
        server_handle.stop(true).await;
        log::info!("Shutdown complete");
    });

    server.await
}
