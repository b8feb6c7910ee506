use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use todo_api::api;
use todo_api::config::Config;
use todo_api::not_found;
use todo_api::repository::mongo::MongoDbClient;
use todo_api::repository::store::TodoStore;

fn cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials();
    if origins.iter().any(|origin| origin == "*") {
        cors.allow_any_origin()
    } else {
        origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::new();
    let todo_db = MongoDbClient::new(&config).await;
    let app_data = web::Data::from(Arc::new(todo_db) as Arc<dyn TodoStore>);
    let bind_address = (config.host.clone(), config.port);

    log::info!("Starting todo API on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .app_data(web::JsonConfig::default().error_handler(api::api::json_error_handler))
            .configure(api::api::config)
            .default_service(web::route().to(not_found))
            .wrap(cors(&config.cors_origins))
            .wrap(Logger::default())
    })
    .bind(bind_address)?
    .run()
    .await
}
