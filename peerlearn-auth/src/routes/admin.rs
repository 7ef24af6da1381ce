use std::str::FromStr;

use actix_web::web::Path;
use actix_web::{delete, get, patch, web, HttpRequest, HttpResponse};
use log::info;
use peerlearn_common::error::ApiError;
use peerlearn_common::token::{require_auth, require_role};
use peerlearn_common::types::{AccountStatus, NotificationKind, Role};
use peerlearn_db::connection::PgPool;
use peerlearn_db::models::notification::{NewNotification, Notification};
use peerlearn_db::models::user::User;
use serde_json::json;
use uuid::Uuid;

use crate::account::{self, DecisionAction};
use crate::get_conn;
use crate::models::{AdminUserRow, PendingTeacher};

#[get("/users")]
pub(crate) async fn list_users(
    pool: web::Data<PgPool>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    require_role(&claims, &[Role::Admin])?;

    let conn = get_conn(&pool)?;
    let rows: Vec<AdminUserRow> = User::list_sorted_by_name(500, &conn)?
        .iter()
        .map(|u| AdminUserRow::from(u))
        .collect();
    Ok(HttpResponse::Ok().json(json!({ "users": rows })))
}

#[get("/teachers/pending")]
pub(crate) async fn pending_teachers(
    pool: web::Data<PgPool>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    require_role(&claims, &[Role::Admin])?;

    let conn = get_conn(&pool)?;
    let teachers: Vec<PendingTeacher> = User::by_role_and_status(
        &Role::Teacher.to_string(),
        &AccountStatus::Pending.to_string(),
        &conn,
    )?
    .iter()
    .map(|t| PendingTeacher::from(t))
    .collect();
    Ok(HttpResponse::Ok().json(json!({ "teachers": teachers })))
}

#[patch("/teachers/{id}/{action}")]
pub(crate) async fn decide_teacher(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    Path((id, action)): Path<(Uuid, String)>,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    require_role(&claims, &[Role::Admin])?;

    let action =
        DecisionAction::from_str(&action).map_err(|_| ApiError::validation("Invalid action"))?;

    let conn = get_conn(&pool)?;
    let teacher = User::update_status(id, &action.target_status().to_string(), &conn)?
        .ok_or_else(|| ApiError::not_found("Teacher not found"))?;

    let requests =
        Notification::list_unread_of_kind(&NotificationKind::TeacherApproval.to_string(), &conn)?;
    let matching: Vec<Uuid> = requests
        .iter()
        .filter(|n| account::references_teacher(n.meta.as_ref(), teacher.id))
        .map(|n| n.id)
        .collect();
    if !matching.is_empty() {
        Notification::mark_many_read(&matching, &conn)?;
    }

    // A repeated decision is a status no-op but still notifies the teacher.
    let outcome = NewNotification {
        id: Uuid::new_v4(),
        user_id: Some(teacher.id),
        kind: NotificationKind::System.to_string(),
        message: action.outcome_message().to_string(),
        meta: None,
    };
    outcome.create(&conn)?;

    info!("teacher {} {} by {}", teacher.id, action.target_status(), claims.sub);

    Ok(HttpResponse::Ok().json(json!({
        "message": action.response_message(),
        "teacher": {
            "id": teacher.id,
            "name": teacher.name,
            "email": teacher.email,
            "status": teacher.status,
        },
    })))
}

#[delete("/users/{id}")]
pub(crate) async fn delete_user(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    Path(id): Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    require_role(&claims, &[Role::Admin])?;

    let conn = get_conn(&pool)?;
    let removed = User::delete(id, &conn)?;
    if removed == 0 {
        return Err(ApiError::not_found("User not found"));
    }

    info!("user {} deleted by {}", id, claims.sub);

    Ok(HttpResponse::Ok().json(json!({ "message": "User deleted successfully" })))
}
