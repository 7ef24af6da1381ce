use std::collections::HashMap;

use peerlearn_db::models::user::User;
use serde::Serialize;
use uuid::Uuid;

const MIN_CONTRIBUTIONS: i64 = 2;
const MAX_CONTRIBUTORS: usize = 20;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Contributor {
    pub id: Uuid,
    pub name: String,
    pub badge: String,
    pub reputation: i32,
    pub questions: i64,
    pub answers: i64,
    pub total: i64,
}

#[derive(Default, Clone, Copy)]
struct Tally {
    questions: i64,
    answers: i64,
}

/// Ranks student contributors by authored questions and answers. Attribution
/// joins on the trimmed author name; null and empty authors count for no one.
/// Only totals strictly above the threshold make the board, sorted by total,
/// then answers, then questions, capped at the top 20.
pub fn rank_contributors(
    question_authors: &[Option<String>],
    answer_authors: &[Option<String>],
    students: &[User],
) -> Vec<Contributor> {
    let mut tallies: HashMap<String, Tally> = HashMap::new();
    for author in question_authors.iter().flatten() {
        if author.is_empty() {
            continue;
        }
        tallies.entry(author.trim().to_string()).or_default().questions += 1;
    }
    for author in answer_authors.iter().flatten() {
        if author.is_empty() {
            continue;
        }
        tallies.entry(author.trim().to_string()).or_default().answers += 1;
    }

    let mut contributors: Vec<Contributor> = students
        .iter()
        .map(|student| {
            let tally = tallies
                .get(student.name.trim())
                .copied()
                .unwrap_or_default();
            Contributor {
                id: student.id,
                name: student.name.clone(),
                badge: student.badge.clone(),
                reputation: student.reputation,
                questions: tally.questions,
                answers: tally.answers,
                total: tally.questions + tally.answers,
            }
        })
        .filter(|c| c.total > MIN_CONTRIBUTIONS)
        .collect();

    contributors.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then(b.answers.cmp(&a.answers))
            .then(b.questions.cmp(&a.questions))
    });
    contributors.truncate(MAX_CONTRIBUTORS);
    contributors
}
