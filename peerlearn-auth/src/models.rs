use std::str::FromStr;

use chrono::NaiveDateTime;
use peerlearn_common::types::{AccountStatus, Role};
use peerlearn_db::models::user::User as UserData;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Debug)]
pub(crate) struct UserProfile {
    id: Uuid,
    name: String,
    email: String,
    role: String,
    badge: String,
    status: String,
    reputation: i32,
}

impl From<&UserData> for UserProfile {
    fn from(user: &UserData) -> Self {
        UserProfile {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.user_role.clone(),
            badge: user.badge.clone(),
            status: user.status.clone(),
            reputation: user.reputation,
        }
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct AdminUserRow {
    id: Uuid,
    name: String,
    email: String,
    role: String,
    status: String,
    display_status: &'static str,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl From<&UserData> for AdminUserRow {
    fn from(user: &UserData) -> Self {
        AdminUserRow {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.user_role.clone(),
            status: user.status.clone(),
            display_status: display_status(user),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// Admins and approved accounts read as "Active"; everyone else, rejected
// included, reads as "Pending".
fn display_status(user: &UserData) -> &'static str {
    let is_admin = matches!(Role::from_str(&user.user_role), Ok(Role::Admin));
    let is_approved = matches!(AccountStatus::from_str(&user.status), Ok(AccountStatus::Approved));
    if is_admin || is_approved {
        "Active"
    } else {
        "Pending"
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct PendingTeacher {
    id: Uuid,
    name: String,
    email: String,
    school: String,
    created_at: NaiveDateTime,
}

impl From<&UserData> for PendingTeacher {
    fn from(user: &UserData) -> Self {
        PendingTeacher {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            school: user.school.clone(),
            created_at: user.created_at,
        }
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct SignupInput {
    pub(crate) name: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) role: Option<String>,
    pub(crate) school: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct LoginInput {
    pub(crate) email: Option<String>,
    pub(crate) password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(role: Role, status: AccountStatus) -> UserData {
        let now = Utc::now().naive_utc();
        UserData {
            id: Uuid::new_v4(),
            name: "kim".to_string(),
            email: "kim@school.edu".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            user_role: role.to_string(),
            status: status.to_string(),
            reputation: 7,
            badge: role.signup_badge().to_string(),
            school: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn display_status_collapses_to_active_or_pending() {
        assert_eq!(display_status(&user(Role::Admin, AccountStatus::Pending)), "Active");
        assert_eq!(display_status(&user(Role::Student, AccountStatus::Approved)), "Active");
        assert_eq!(display_status(&user(Role::Teacher, AccountStatus::Pending)), "Pending");
        assert_eq!(display_status(&user(Role::Teacher, AccountStatus::Rejected)), "Pending");
    }

    #[test]
    fn profile_serializes_public_fields_only() {
        let profile = UserProfile::from(&user(Role::Student, AccountStatus::Approved));
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["name"], "kim");
        assert_eq!(value["role"], "student");
        assert_eq!(value["status"], "approved");
        assert_eq!(value["reputation"], 7);
        assert!(value.get("password_hash").is_none());
    }
}
