use std::collections::HashMap;
use std::str::FromStr;

use actix_web::web::Path;
use actix_web::{get, patch, post, web, HttpRequest, HttpResponse};
use log::info;
use peerlearn_common::error::ApiError;
use peerlearn_common::token::{require_auth, require_role};
use peerlearn_common::types::{AnswerStatus, Role};
use peerlearn_db::connection::PgPool;
use peerlearn_db::models::answer::{Answer, NewAnswer};
use peerlearn_db::models::question::Question;
use serde_json::json;
use uuid::Uuid;

use crate::get_conn;
use crate::models::{AnswerInput, AnswerQuery, AnswerView, StatusInput};
use crate::routes::author_name;

#[get("")]
pub(crate) async fn list(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    query: web::Query<AnswerQuery>,
) -> Result<HttpResponse, ApiError> {
    require_auth(&req)?;

    let status = query.status.as_deref().filter(|s| *s != "all");
    let subject = query.subject.as_deref().filter(|s| *s != "all");

    let conn = get_conn(&pool)?;
    let answers = Answer::list(status, 200, &conn)?;

    let ids: Vec<Uuid> = answers.iter().map(|a| a.question_id).collect();
    let subjects: HashMap<Uuid, String> = Question::find_many(&ids, &conn)?
        .into_iter()
        .map(|q| (q.id, q.subject))
        .collect();

    // Orphaned answers survive the default listing as "Unknown" but never
    // match a subject filter.
    let views: Vec<AnswerView> = answers
        .iter()
        .filter(|a| match subject {
            Some(s) => subjects.get(&a.question_id).map(String::as_str) == Some(s),
            None => true,
        })
        .map(|a| {
            let subject = subjects
                .get(&a.question_id)
                .map(String::as_str)
                .unwrap_or("Unknown");
            AnswerView::listed(a, subject)
        })
        .collect();
    Ok(HttpResponse::Ok().json(json!({ "answers": views })))
}

#[post("")]
pub(crate) async fn create(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    input: web::Json<AnswerInput>,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    let input = input.into_inner();
    let question_id = input
        .question_id
        .ok_or_else(|| ApiError::validation("Missing question_id or content"))?;
    let content = input.content.unwrap_or_default();
    if content.is_empty() {
        return Err(ApiError::validation("Missing question_id or content"));
    }

    let conn = get_conn(&pool)?;
    let question = Question::get(question_id, &conn)?
        .ok_or_else(|| ApiError::not_found("Question not found"))?;
    let author = author_name(&claims, &conn)?;
    let answer = NewAnswer {
        id: Uuid::new_v4(),
        question_id: question.id,
        author: Some(author),
        content,
        status: AnswerStatus::Pending.to_string(),
    }
    .create(&conn)?;
    Ok(HttpResponse::Created().json(AnswerView::created(&answer)))
}

#[patch("/{id}/status")]
pub(crate) async fn set_status(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    Path(id): Path<Uuid>,
    input: web::Json<StatusInput>,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    require_role(&claims, &[Role::Teacher, Role::Admin])?;

    // Moderation only ever lands on approved or rejected.
    let status = input
        .status
        .as_deref()
        .and_then(|s| AnswerStatus::from_str(s).ok())
        .filter(|s| *s != AnswerStatus::Pending)
        .ok_or_else(|| ApiError::validation("Invalid status"))?;

    let conn = get_conn(&pool)?;
    let answer = Answer::update_status(id, &status.to_string(), &conn)?
        .ok_or_else(|| ApiError::not_found("Answer not found"))?;

    info!("answer {} {} by {}", answer.id, answer.status, claims.sub);

    Ok(HttpResponse::Ok().json(json!({ "ok": true, "status": answer.status })))
}
