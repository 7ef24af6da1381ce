use peerlearn_common::types::{AccountStatus, Role};
use peerlearn_db::models::user::User;
use serde_json::{json, Value};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SignupOutcome {
    Active,
    PendingReview,
    NotAllowed,
}

pub fn signup_outcome(role: Role) -> SignupOutcome {
    match role {
        Role::Student => SignupOutcome::Active,
        Role::Teacher => SignupOutcome::PendingReview,
        Role::Admin => SignupOutcome::NotAllowed,
    }
}

pub fn signup_status(role: Role) -> AccountStatus {
    match signup_outcome(role) {
        SignupOutcome::PendingReview => AccountStatus::Pending,
        _ => AccountStatus::Approved,
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LoginOutcome {
    Granted,
    BadCredentials,
    Gated(AccountStatus),
}

/// Credential failures mask account state; admins are never gated.
pub fn evaluate_login(credentials_ok: bool, role: Role, status: AccountStatus) -> LoginOutcome {
    if !credentials_ok {
        return LoginOutcome::BadCredentials;
    }
    if role == Role::Admin {
        return LoginOutcome::Granted;
    }
    match status {
        AccountStatus::Pending if role == Role::Teacher => LoginOutcome::Gated(AccountStatus::Pending),
        AccountStatus::Rejected => LoginOutcome::Gated(AccountStatus::Rejected),
        _ => LoginOutcome::Granted,
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DecisionAction {
    Approve,
    Reject,
}

impl DecisionAction {
    pub fn target_status(&self) -> AccountStatus {
        match self {
            DecisionAction::Approve => AccountStatus::Approved,
            DecisionAction::Reject => AccountStatus::Rejected,
        }
    }

    pub fn outcome_message(&self) -> &'static str {
        match self {
            DecisionAction::Approve => {
                "Your teacher application has been approved! You can now access the teacher dashboard."
            }
            DecisionAction::Reject => {
                "Your teacher application has been rejected. Please contact support for more information."
            }
        }
    }

    pub fn response_message(&self) -> &'static str {
        match self {
            DecisionAction::Approve => "Teacher approved successfully",
            DecisionAction::Reject => "Teacher rejected successfully",
        }
    }
}

pub fn approval_request_message(name: &str) -> String {
    format!("{} has requested a teacher account", name)
}

pub fn approval_request_meta(user: &User) -> Value {
    json!({
        "teacher_id": user.id.to_string(),
        "name": user.name,
        "email": user.email,
        "school": user.school,
    })
}

pub fn references_teacher(meta: Option<&Value>, teacher: Uuid) -> bool {
    meta.and_then(|m| m.get("teacher_id"))
        .and_then(Value::as_str)
        .map(|tid| tid == teacher.to_string())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::str::FromStr;

    fn teacher(name: &str) -> User {
        let now = Utc::now().naive_utc();
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@school.edu", name),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            user_role: Role::Teacher.to_string(),
            status: AccountStatus::Pending.to_string(),
            reputation: 0,
            badge: "Teacher".to_string(),
            school: "Springfield High".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn signup_routes_each_role() {
        assert_eq!(signup_outcome(Role::Student), SignupOutcome::Active);
        assert_eq!(signup_outcome(Role::Teacher), SignupOutcome::PendingReview);
        assert_eq!(signup_outcome(Role::Admin), SignupOutcome::NotAllowed);
        assert_eq!(signup_status(Role::Student), AccountStatus::Approved);
        assert_eq!(signup_status(Role::Teacher), AccountStatus::Pending);
    }

    #[test]
    fn bad_credentials_mask_account_state() {
        assert_eq!(
            evaluate_login(false, Role::Teacher, AccountStatus::Pending),
            LoginOutcome::BadCredentials
        );
        assert_eq!(
            evaluate_login(false, Role::Student, AccountStatus::Rejected),
            LoginOutcome::BadCredentials
        );
        assert_eq!(
            evaluate_login(false, Role::Admin, AccountStatus::Approved),
            LoginOutcome::BadCredentials
        );
    }

    #[test]
    fn approved_accounts_log_in() {
        assert_eq!(
            evaluate_login(true, Role::Student, AccountStatus::Approved),
            LoginOutcome::Granted
        );
        assert_eq!(
            evaluate_login(true, Role::Teacher, AccountStatus::Approved),
            LoginOutcome::Granted
        );
    }

    #[test]
    fn pending_teacher_is_gated() {
        assert_eq!(
            evaluate_login(true, Role::Teacher, AccountStatus::Pending),
            LoginOutcome::Gated(AccountStatus::Pending)
        );
    }

    #[test]
    fn rejected_accounts_are_gated_regardless_of_role() {
        assert_eq!(
            evaluate_login(true, Role::Teacher, AccountStatus::Rejected),
            LoginOutcome::Gated(AccountStatus::Rejected)
        );
        assert_eq!(
            evaluate_login(true, Role::Student, AccountStatus::Rejected),
            LoginOutcome::Gated(AccountStatus::Rejected)
        );
    }

    #[test]
    fn admin_is_never_gated() {
        assert_eq!(
            evaluate_login(true, Role::Admin, AccountStatus::Pending),
            LoginOutcome::Granted
        );
        assert_eq!(
            evaluate_login(true, Role::Admin, AccountStatus::Rejected),
            LoginOutcome::Granted
        );
    }

    #[test]
    fn decision_actions_parse_from_request_strings() {
        assert_eq!(DecisionAction::from_str("approve"), Ok(DecisionAction::Approve));
        assert_eq!(DecisionAction::from_str("reject"), Ok(DecisionAction::Reject));
        assert!(DecisionAction::from_str("promote").is_err());
        assert!(DecisionAction::from_str("Approve").is_err());
    }

    #[test]
    fn decision_targets_and_messages() {
        assert_eq!(DecisionAction::Approve.target_status(), AccountStatus::Approved);
        assert_eq!(DecisionAction::Reject.target_status(), AccountStatus::Rejected);
        assert_eq!(
            DecisionAction::Approve.response_message(),
            "Teacher approved successfully"
        );
        assert_eq!(
            DecisionAction::Reject.response_message(),
            "Teacher rejected successfully"
        );
        assert!(DecisionAction::Approve.outcome_message().contains("approved"));
        assert!(DecisionAction::Reject.outcome_message().contains("rejected"));
    }

    #[test]
    fn approval_meta_carries_teacher_identity() {
        let user = teacher("lena");
        let meta = approval_request_meta(&user);
        assert_eq!(meta["teacher_id"], user.id.to_string());
        assert_eq!(meta["name"], "lena");
        assert_eq!(meta["email"], "lena@school.edu");
        assert_eq!(meta["school"], "Springfield High");
    }

    #[test]
    fn meta_matching_is_by_teacher_id() {
        let user = teacher("lena");
        let meta = approval_request_meta(&user);
        assert!(references_teacher(Some(&meta), user.id));
        assert!(!references_teacher(Some(&meta), Uuid::new_v4()));
        assert!(!references_teacher(Some(&json!({"name": "lena"})), user.id));
        assert!(!references_teacher(Some(&json!({"teacher_id": 42})), user.id));
        assert!(!references_teacher(None, user.id));
    }
}
