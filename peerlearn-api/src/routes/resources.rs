use actix_web::web::Path;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use peerlearn_common::error::ApiError;
use peerlearn_common::token::require_auth;
use peerlearn_db::connection::PgPool;
use peerlearn_db::models::resource::{NewResource, Resource};
use serde_json::json;
use uuid::Uuid;

use crate::get_conn;
use crate::models::ResourceInput;

#[get("")]
pub(crate) async fn list(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let conn = get_conn(&pool)?;
    let resources = Resource::list_by_status("approved", 100, &conn)?;
    Ok(HttpResponse::Ok().json(json!({ "resources": resources })))
}

#[post("")]
pub(crate) async fn create(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    input: web::Json<ResourceInput>,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    let input = input.into_inner();
    let title = input.title.unwrap_or_default();
    let subject = input.subject.unwrap_or_default();
    if title.is_empty() || subject.is_empty() {
        return Err(ApiError::validation("Title and subject are required"));
    }

    let conn = get_conn(&pool)?;
    let resource = NewResource {
        id: Uuid::new_v4(),
        title,
        description: input.description.unwrap_or_default(),
        subject,
        file_url: input.file_url.unwrap_or_default(),
        file_type: input
            .file_type
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "document".to_string()),
        uploaded_by: claims.sub.clone(),
        // No review queue yet; uploads go straight to the public list.
        status: "approved".to_string(),
    }
    .create(&conn)?;
    Ok(HttpResponse::Created().json(json!({
        "resource": {
            "id": resource.id,
            "title": resource.title,
            "subject": resource.subject,
            "downloads": resource.downloads,
            "rating": resource.rating,
        }
    })))
}

#[post("/{id}/download")]
pub(crate) async fn download(
    pool: web::Data<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let conn = get_conn(&pool)?;
    let resource = Resource::increment_downloads(id, &conn)?
        .ok_or_else(|| ApiError::not_found("Resource not found"))?;
    Ok(HttpResponse::Ok().json(json!({ "ok": true, "downloads": resource.downloads })))
}
