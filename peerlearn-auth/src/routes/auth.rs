use std::str::FromStr;

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use bcrypt::{hash, verify, DEFAULT_COST};
use peerlearn_common::error::ApiError;
use peerlearn_common::token::{create_token, require_auth};
use peerlearn_common::types::{AccountStatus, NotificationKind, Role};
use peerlearn_db::connection::PgPool;
use peerlearn_db::models::notification::NewNotification;
use peerlearn_db::models::user::{NewUser, User};
use serde_json::json;
use uuid::Uuid;

use crate::account::{self, LoginOutcome, SignupOutcome};
use crate::get_conn;
use crate::models::{LoginInput, SignupInput, UserProfile};

#[post("/signup")]
pub(crate) async fn signup(
    pool: web::Data<PgPool>,
    input: web::Json<SignupInput>,
) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    let name = input.name.unwrap_or_default();
    let email = input.email.unwrap_or_default();
    let password = input.password.unwrap_or_default();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ApiError::validation("Name, email, and password are required"));
    }

    let role = match input.role.as_deref() {
        Some(r) => Role::from_str(r).map_err(|_| ApiError::validation("Invalid role"))?,
        None => Role::Student,
    };
    if account::signup_outcome(role) == SignupOutcome::NotAllowed {
        return Err(ApiError::validation(
            "Admin accounts cannot be created via signup",
        ));
    }

    let conn = get_conn(&pool)?;
    if User::find_by_email(&email, &conn)?.is_some() {
        return Err(ApiError::conflict("Email already in use"));
    }

    let new_user = NewUser {
        id: Uuid::new_v4(),
        name,
        email,
        password_hash: hash(&password, DEFAULT_COST).map_err(ApiError::internal)?,
        user_role: role.to_string(),
        status: account::signup_status(role).to_string(),
        reputation: 0,
        badge: role.signup_badge().to_string(),
        school: input.school.unwrap_or_default(),
    };
    let user = new_user.create(&conn)?;

    match account::signup_outcome(role) {
        SignupOutcome::PendingReview => {
            let request = NewNotification {
                id: Uuid::new_v4(),
                user_id: None,
                kind: NotificationKind::TeacherApproval.to_string(),
                message: account::approval_request_message(&user.name),
                meta: Some(account::approval_request_meta(&user)),
            };
            request.create(&conn)?;
            Ok(HttpResponse::Ok().json(json!({
                "message": "Teacher account created and pending admin approval"
            })))
        }
        _ => {
            let token = create_token(&user.id.to_string(), role)?;
            Ok(HttpResponse::Ok().json(json!({
                "token": token,
                "user": UserProfile::from(&user),
            })))
        }
    }
}

#[post("/login")]
pub(crate) async fn login(
    pool: web::Data<PgPool>,
    input: web::Json<LoginInput>,
) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    let email = input.email.unwrap_or_default();
    let password = input.password.unwrap_or_default();

    let conn = get_conn(&pool)?;
    let user = User::find_by_email(&email, &conn)?.ok_or(ApiError::InvalidCredentials)?;

    let credentials_ok = verify(&password, &user.password_hash).map_err(ApiError::internal)?;
    let role = Role::from_str(&user.user_role)
        .map_err(|_| ApiError::internal(format!("unknown role {} on user {}", user.user_role, user.id)))?;
    let status = AccountStatus::from_str(&user.status)
        .map_err(|_| ApiError::internal(format!("unknown status {} on user {}", user.status, user.id)))?;

    match account::evaluate_login(credentials_ok, role, status) {
        LoginOutcome::BadCredentials => Err(ApiError::InvalidCredentials),
        LoginOutcome::Gated(gated) => Err(ApiError::Gated(gated)),
        LoginOutcome::Granted => {
            let token = create_token(&user.id.to_string(), role)?;
            Ok(HttpResponse::Ok().json(json!({
                "token": token,
                "user": UserProfile::from(&user),
            })))
        }
    }
}

#[get("/me")]
pub(crate) async fn me(pool: web::Data<PgPool>, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    let uid = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthorized)?;

    let conn = get_conn(&pool)?;
    let user = User::get(uid, &conn)?.ok_or_else(|| ApiError::not_found("Not found"))?;
    Ok(HttpResponse::Ok().json(json!({ "user": UserProfile::from(&user) })))
}
