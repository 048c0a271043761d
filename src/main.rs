use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizform_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = Arc::new(
        AppState::new(config)
            .await
            .unwrap_or_else(|e| panic!("failed to initialize application state: {e}")),
    );

    log::info!("starting HTTP server on {host}:{port}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(Arc::clone(&state)))
            .app_data(web::Data::new(state.jwt_service.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .service(handlers::signup)
            .service(handlers::login)
            .service(handlers::create_quiz)
            // "/api/quiz/user" must come before the "{id}" routes.
            .service(handlers::list_owned_quizzes)
            .service(handlers::submit_response)
            .service(handlers::list_responses)
            .service(handlers::get_quiz)
            .service(handlers::update_quiz)
            .service(handlers::health_check)
            .service(handlers::health_check_ready)
            .service(handlers::health_check_live)
    })
    .bind((host, port))?
    .run()
    .await
}
