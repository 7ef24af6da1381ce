use actix_web::web;
use peerlearn_common::error::ApiError;
use peerlearn_db::connection::{Conn, PgPool};

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/questions")
            .service(routes::questions::list)
            .service(routes::questions::create)
            .service(routes::questions::set_status)
            .service(routes::questions::vote),
    )
    .service(
        web::scope("/api/answers")
            .service(routes::answers::list)
            .service(routes::answers::create)
            .service(routes::answers::set_status),
    )
    .service(web::scope("/api/contributors").service(routes::contributors::top))
    .service(
        web::scope("/api/notifications")
            .service(routes::notifications::teacher_inbox)
            .service(routes::notifications::mark_read)
            .service(routes::notifications::my_inbox)
            .service(routes::notifications::mark_my_read)
            .service(routes::notifications::teacher_approvals),
    )
    .service(
        web::scope("/api/resources")
            .service(routes::resources::list)
            .service(routes::resources::create)
            .service(routes::resources::download),
    );
}

pub(crate) fn get_conn(pool: &web::Data<PgPool>) -> Result<Conn, ApiError> {
    pool.get().map_err(ApiError::internal)
}

pub mod leaderboard;
mod models;
mod routes;
