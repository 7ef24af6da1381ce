use bcrypt::{hash, verify, DEFAULT_COST};
use log::{error, info};
use peerlearn_common::error::ApiError;
use peerlearn_common::types::{AccountStatus, Role};
use peerlearn_db::connection::{Conn, PgPool};
use peerlearn_db::models::user::{NewUser, User};
use std::env;
use uuid::Uuid;

/// Provisions the out-of-band admin account at startup. The server still
/// boots if this fails; the error is only logged.
pub fn ensure_admin(pool: &PgPool) {
    let outcome = pool
        .get()
        .map_err(ApiError::internal)
        .and_then(|conn| provision_admin(&conn));
    if let Err(e) = outcome {
        error!("admin provisioning failed: {}", e);
    }
}

fn provision_admin(conn: &Conn) -> Result<(), ApiError> {
    let admin_email = env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@gmail.com".to_string());
    let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "12345".to_string());

    match User::find_by_email(&admin_email, conn)? {
        Some(user) => {
            let role_ok = user.user_role == Role::Admin.to_string();
            let password_ok = verify(&admin_password, &user.password_hash).unwrap_or(false);
            if role_ok && password_ok {
                return Ok(());
            }
            let new_hash = hash(&admin_password, DEFAULT_COST).map_err(ApiError::internal)?;
            user.update_role_and_credentials(
                &Role::Admin.to_string(),
                &AccountStatus::Approved.to_string(),
                &new_hash,
                Role::Admin.signup_badge(),
                conn,
            )?;
            info!("repaired admin account {}", admin_email);
        }
        None => {
            let new_user = NewUser {
                id: Uuid::new_v4(),
                name: "Admin".to_string(),
                email: admin_email.clone(),
                password_hash: hash(&admin_password, DEFAULT_COST).map_err(ApiError::internal)?,
                user_role: Role::Admin.to_string(),
                status: AccountStatus::Approved.to_string(),
                reputation: 0,
                badge: Role::Admin.signup_badge().to_string(),
                school: String::new(),
            };
            new_user.create(conn)?;
            info!("provisioned admin account {}", admin_email);
        }
    }
    Ok(())
}
