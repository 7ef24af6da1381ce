use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Stored in `users.user_role` as the lowercase rendering. Any other value in
/// the column is a data corruption and must be rejected, never passed through.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub fn signup_badge(&self) -> &'static str {
        match self {
            Role::Student => "Newcomer",
            Role::Teacher => "Teacher",
            Role::Admin => "Admin",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AnswerStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    TeacherApproval,
    AnswerStatus,
    System,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn roles_round_trip_through_strings() {
        for role in &[Role::Student, Role::Teacher, Role::Admin] {
            assert_eq!(Role::from_str(&role.to_string()), Ok(*role));
        }
        assert_eq!(Role::Admin.to_string(), "admin");
        assert!(Role::from_str("superuser").is_err());
        assert!(Role::from_str("Student").is_err());
    }

    #[test]
    fn statuses_render_lowercase() {
        assert_eq!(AccountStatus::Pending.to_string(), "pending");
        assert_eq!(AccountStatus::Approved.to_string(), "approved");
        assert_eq!(AccountStatus::Rejected.to_string(), "rejected");
        assert!(AccountStatus::from_str("active").is_err());
    }

    #[test]
    fn notification_kinds_use_snake_case() {
        assert_eq!(NotificationKind::TeacherApproval.to_string(), "teacher_approval");
        assert_eq!(NotificationKind::System.to_string(), "system");
        assert_eq!(
            NotificationKind::from_str("answer_status"),
            Ok(NotificationKind::AnswerStatus)
        );
    }

    #[test]
    fn signup_badges_follow_role() {
        assert_eq!(Role::Student.signup_badge(), "Newcomer");
        assert_eq!(Role::Teacher.signup_badge(), "Teacher");
        assert_eq!(Role::Admin.signup_badge(), "Admin");
    }
}
