use chrono::NaiveDateTime;
use peerlearn_db::models::answer::Answer;
use peerlearn_db::models::notification::Notification;
use peerlearn_db::models::question::Question;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumString};
use uuid::Uuid;

#[derive(Serialize, Debug)]
pub(crate) struct QuestionView {
    id: Uuid,
    title: String,
    subject: String,
    author: Option<String>,
    content: String,
    votes: i32,
    verified: bool,
    answers: i64,
    timestamp: NaiveDateTime,
}

impl QuestionView {
    pub(crate) fn new(question: &Question, answers: i64) -> Self {
        QuestionView {
            id: question.id,
            title: question.title.clone(),
            subject: question.subject.clone(),
            author: question.author.clone(),
            content: question.content.clone(),
            votes: question.votes,
            verified: question.verified,
            answers,
            timestamp: question.created_at,
        }
    }
}

/// The list view carries the parent question's subject; the create response
/// never does.
#[derive(Serialize, Debug)]
pub(crate) struct AnswerView {
    id: Uuid,
    question_id: Uuid,
    content: String,
    author: Option<String>,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    timestamp: NaiveDateTime,
}

impl AnswerView {
    pub(crate) fn listed(answer: &Answer, subject: &str) -> Self {
        AnswerView {
            subject: Some(subject.to_string()),
            ..Self::created(answer)
        }
    }

    pub(crate) fn created(answer: &Answer) -> Self {
        AnswerView {
            id: answer.id,
            question_id: answer.question_id,
            content: answer.content.clone(),
            author: answer.author.clone(),
            status: answer.status.clone(),
            subject: None,
            timestamp: answer.created_at,
        }
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct NotificationView {
    id: Uuid,
    user_id: Option<Uuid>,
    #[serde(rename = "type")]
    kind: String,
    message: String,
    meta: Option<Value>,
    read: bool,
    created_at: NaiveDateTime,
}

impl From<&Notification> for NotificationView {
    fn from(notification: &Notification) -> Self {
        NotificationView {
            id: notification.id,
            user_id: notification.user_id,
            kind: notification.kind.clone(),
            message: notification.message.clone(),
            meta: notification.meta.clone(),
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub(crate) fn apply(&self, votes: i32) -> i32 {
        match self {
            VoteDirection::Up => votes + 1,
            VoteDirection::Down => (votes - 1).max(0),
        }
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct QuestionQuery {
    pub(crate) subject: Option<String>,
    pub(crate) all: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct AnswerQuery {
    pub(crate) status: Option<String>,
    pub(crate) subject: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct QuestionInput {
    pub(crate) title: Option<String>,
    pub(crate) subject: Option<String>,
    pub(crate) content: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct AnswerInput {
    pub(crate) question_id: Option<Uuid>,
    pub(crate) content: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct VerifyInput {
    pub(crate) verified: Option<bool>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct StatusInput {
    pub(crate) status: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct VoteInput {
    pub(crate) direction: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ResourceInput {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) subject: Option<String>,
    pub(crate) file_url: Option<String>,
    pub(crate) file_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::str::FromStr;

    fn answer() -> Answer {
        Answer {
            id: Uuid::new_v4(),
            question_id: Uuid::new_v4(),
            author: Some("mira".to_string()),
            content: "use the chain rule".to_string(),
            status: "pending".to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn votes_never_drop_below_zero() {
        assert_eq!(VoteDirection::Up.apply(0), 1);
        assert_eq!(VoteDirection::Down.apply(2), 1);
        assert_eq!(VoteDirection::Down.apply(0), 0);
    }

    #[test]
    fn vote_directions_parse_lowercase_only() {
        assert_eq!(VoteDirection::from_str("up"), Ok(VoteDirection::Up));
        assert_eq!(VoteDirection::from_str("down"), Ok(VoteDirection::Down));
        assert!(VoteDirection::from_str("sideways").is_err());
        assert!(VoteDirection::from_str("Up").is_err());
    }

    #[test]
    fn created_answers_omit_the_subject_key() {
        let view = serde_json::to_value(AnswerView::created(&answer())).unwrap();
        assert!(view.get("subject").is_none());

        let view = serde_json::to_value(AnswerView::listed(&answer(), "Math")).unwrap();
        assert_eq!(view["subject"], "Math");
    }

    #[test]
    fn notifications_expose_kind_as_type() {
        let notification = Notification {
            id: Uuid::new_v4(),
            user_id: None,
            kind: "teacher_approval".to_string(),
            message: "lena has requested a teacher account".to_string(),
            meta: None,
            read: false,
            created_at: Utc::now().naive_utc(),
        };
        let view = serde_json::to_value(NotificationView::from(&notification)).unwrap();
        assert_eq!(view["type"], "teacher_approval");
        assert!(view.get("kind").is_none());
    }
}
