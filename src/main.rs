use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizgen_server::{
    app_state::AppState,
    config::Config,
    handlers::{generate_quiz, health_check},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    log::info!(
        "starting quiz server on {host}:{port} (mode: {}, model: {})",
        config.mode(),
        config.openai_model
    );

    let state = AppState::new(config);

    HttpServer::new(move || {
        // Dev-friendly CORS so a static frontend can call the backend.
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .service(health_check)
            .service(generate_quiz)
    })
    .bind((host, port))?
    .run()
    .await
}
