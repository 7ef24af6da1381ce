use actix_web::{get, web, HttpResponse};
use peerlearn_common::error::ApiError;
use peerlearn_common::types::Role;
use peerlearn_db::connection::PgPool;
use peerlearn_db::models::answer::Answer;
use peerlearn_db::models::question::Question;
use peerlearn_db::models::user::User;
use serde_json::json;

use crate::get_conn;
use crate::leaderboard;

#[get("")]
pub(crate) async fn top(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let conn = get_conn(&pool)?;
    let question_authors = Question::authors(&conn)?;
    let answer_authors = Answer::authors(&conn)?;
    let students = User::list_by_role(&Role::Student.to_string(), &conn)?;

    let contributors =
        leaderboard::rank_contributors(&question_authors, &answer_authors, &students);
    Ok(HttpResponse::Ok().json(json!({ "contributors": contributors })))
}
