use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use peerlearn_auth::{bootstrap, configure_service};
use peerlearn_db::connection::create_connection_pool;
use peerlearn_db::run_migrations;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let pool = create_connection_pool();
    run_migrations(&pool);
    bootstrap::ensure_admin(&pool);

    let addr = env::var("AUTH_ADDR").unwrap_or_else(|_| "0.0.0.0:8002".to_string());

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .configure(configure_service)
            .data(pool.clone())
    })
    .bind(addr)?
    .run()
    .await
}
