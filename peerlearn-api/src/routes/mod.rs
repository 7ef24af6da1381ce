use peerlearn_common::error::ApiError;
use peerlearn_common::token::Claims;
use peerlearn_db::connection::Conn;
use peerlearn_db::models::user::User;
use uuid::Uuid;

pub(crate) mod answers;
pub(crate) mod contributors;
pub(crate) mod notifications;
pub(crate) mod questions;
pub(crate) mod resources;

// Attribution is by display name; a caller whose account vanished mid-session
// still posts as "Unknown".
pub(crate) fn author_name(claims: &Claims, conn: &Conn) -> Result<String, ApiError> {
    let uid = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthorized)?;
    Ok(User::get(uid, conn)?
        .map(|u| u.name)
        .unwrap_or_else(|| "Unknown".to_string()))
}
