use std::str::FromStr;

use actix_web::web::Path;
use actix_web::{get, patch, post, web, HttpRequest, HttpResponse};
use log::info;
use peerlearn_common::error::ApiError;
use peerlearn_common::token::{require_auth, require_role};
use peerlearn_common::types::{AnswerStatus, Role};
use peerlearn_db::connection::PgPool;
use peerlearn_db::models::answer::Answer;
use peerlearn_db::models::question::{NewQuestion, Question};
use serde_json::json;
use uuid::Uuid;

use crate::get_conn;
use crate::models::{QuestionInput, QuestionQuery, QuestionView, VerifyInput, VoteDirection, VoteInput};
use crate::routes::author_name;

#[get("")]
pub(crate) async fn list(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    query: web::Query<QuestionQuery>,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    let role = require_role(&claims, &[Role::Student, Role::Teacher, Role::Admin])?;

    let subject = query.subject.as_deref().filter(|s| *s != "all");
    // Admins see only verified questions unless they ask for everything.
    let verified_only = role == Role::Admin && query.all.as_deref() != Some("true");

    let conn = get_conn(&pool)?;
    let questions = Question::list(subject, verified_only, 100, &conn)?;
    let mut views = Vec::with_capacity(questions.len());
    for question in &questions {
        let approved =
            Answer::count_for_question(question.id, &AnswerStatus::Approved.to_string(), &conn)?;
        views.push(QuestionView::new(question, approved));
    }
    Ok(HttpResponse::Ok().json(json!({ "questions": views })))
}

#[post("")]
pub(crate) async fn create(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    input: web::Json<QuestionInput>,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    let input = input.into_inner();
    let title = input.title.unwrap_or_default();
    let subject = input.subject.unwrap_or_default();
    let content = input.content.unwrap_or_default();
    if title.is_empty() || subject.is_empty() || content.is_empty() {
        return Err(ApiError::validation("Missing title, subject, or content"));
    }

    let conn = get_conn(&pool)?;
    let author = author_name(&claims, &conn)?;
    let question = NewQuestion {
        id: Uuid::new_v4(),
        title,
        subject,
        author: Some(author),
        content,
    }
    .create(&conn)?;
    Ok(HttpResponse::Created().json(QuestionView::new(&question, 0)))
}

#[patch("/{id}/status")]
pub(crate) async fn set_status(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    Path(id): Path<Uuid>,
    input: web::Json<VerifyInput>,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    require_role(&claims, &[Role::Teacher, Role::Admin])?;

    let flag = input
        .verified
        .ok_or_else(|| ApiError::validation("Invalid verified status"))?;

    let conn = get_conn(&pool)?;
    let question = Question::update_verified(id, flag, &conn)?
        .ok_or_else(|| ApiError::not_found("Question not found"))?;

    info!("question {} verified={} by {}", question.id, question.verified, claims.sub);

    Ok(HttpResponse::Ok().json(json!({ "ok": true, "verified": question.verified })))
}

#[patch("/{id}/vote")]
pub(crate) async fn vote(
    pool: web::Data<PgPool>,
    req: HttpRequest,
    Path(id): Path<Uuid>,
    input: web::Json<VoteInput>,
) -> Result<HttpResponse, ApiError> {
    require_auth(&req)?;

    let direction = input
        .direction
        .as_deref()
        .and_then(|d| VoteDirection::from_str(d).ok())
        .ok_or_else(|| ApiError::validation("Invalid vote direction"))?;

    let conn = get_conn(&pool)?;
    let question =
        Question::get(id, &conn)?.ok_or_else(|| ApiError::not_found("Question not found"))?;
    let updated = Question::update_votes(id, direction.apply(question.votes), &conn)?
        .ok_or_else(|| ApiError::not_found("Question not found"))?;
    Ok(HttpResponse::Ok().json(json!({ "ok": true, "votes": updated.votes })))
}
