use actix_web::web;
use peerlearn_common::error::ApiError;
use peerlearn_db::connection::{Conn, PgPool};

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(routes::auth::signup)
            .service(routes::auth::login)
            .service(routes::auth::me),
    )
    .service(
        web::scope("/api/admin")
            .service(routes::admin::list_users)
            .service(routes::admin::pending_teachers)
            .service(routes::admin::decide_teacher)
            .service(routes::admin::delete_user),
    );
}

pub(crate) fn get_conn(pool: &web::Data<PgPool>) -> Result<Conn, ApiError> {
    pool.get().map_err(ApiError::internal)
}

pub mod account;
pub mod bootstrap;
mod models;
mod routes;
