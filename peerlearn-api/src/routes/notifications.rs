use actix_web::web::Path;
use actix_web::{get, patch, web, HttpRequest, HttpResponse};
use peerlearn_common::error::ApiError;
use peerlearn_common::token::{require_auth, require_role};
use peerlearn_common::types::{NotificationKind, Role};
use peerlearn_db::connection::PgPool;
use peerlearn_db::models::notification::Notification;
use serde_json::json;
use uuid::Uuid;

use crate::get_conn;
use crate::models::NotificationView;

#[get("")]
pub(crate) async fn teacher_inbox(
    pool: web::Data<PgPool>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    require_role(&claims, &[Role::Teacher])?;

    let conn = get_conn(&pool)?;
    let views: Vec<NotificationView> = Notification::list_unread(&conn)?
        .iter()
        .map(|n| NotificationView::from(n))
        .collect();
    Ok(HttpResponse::Ok().json(json!({ "notifications": views })))
}

#[patch("/{id}/read")]
pub(crate) async fn mark_read(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    Path(id): Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    require_role(&claims, &[Role::Teacher])?;

    let conn = get_conn(&pool)?;
    // Marking an unknown id is a quiet no-op.
    Notification::mark_read(id, &conn)?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

#[get("/my")]
pub(crate) async fn my_inbox(
    pool: web::Data<PgPool>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    let uid = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthorized)?;

    let conn = get_conn(&pool)?;
    let views: Vec<NotificationView> = Notification::list_unread_for_user(uid, &conn)?
        .iter()
        .map(|n| NotificationView::from(n))
        .collect();
    Ok(HttpResponse::Ok().json(json!({ "notifications": views })))
}

#[patch("/my/{id}/read")]
pub(crate) async fn mark_my_read(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    Path(id): Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    let uid = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthorized)?;

    let conn = get_conn(&pool)?;
    let updated = Notification::mark_read_for_user(id, uid, &conn)?;
    if updated == 0 {
        return Err(ApiError::not_found("Not found"));
    }
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

#[get("/admin/teacher-approvals")]
pub(crate) async fn teacher_approvals(
    pool: web::Data<PgPool>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    require_role(&claims, &[Role::Admin])?;

    let conn = get_conn(&pool)?;
    let views: Vec<NotificationView> =
        Notification::list_unread_of_kind(&NotificationKind::TeacherApproval.to_string(), &conn)?
            .iter()
            .map(|n| NotificationView::from(n))
            .collect();
    Ok(HttpResponse::Ok().json(json!({ "notifications": views })))
}
