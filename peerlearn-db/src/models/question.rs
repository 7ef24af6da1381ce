use crate::schema::questions;
use crate::schema::questions::dsl::*;
use chrono::NaiveDateTime;
use diesel::{dsl::any, prelude::*};
use diesel::PgConnection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Queryable, Debug, Serialize, Deserialize, AsChangeset, Clone, Identifiable)]
pub struct Question {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub author: Option<String>,
    pub content: String,
    pub verified: bool,
    pub votes: i32,
    pub created_at: NaiveDateTime,
}

impl Question {
    pub fn list(
        subj: Option<&str>,
        verified_only: bool,
        max: i64,
        conn: &PgConnection,
    ) -> QueryResult<Vec<Self>> {
        let mut query = questions.into_boxed();
        if let Some(s) = subj {
            query = query.filter(subject.eq(s.to_string()));
        }
        if verified_only {
            query = query.filter(verified.eq(true));
        }
        query.order(created_at.desc()).limit(max).load(conn)
    }

    pub fn get(qid: Uuid, conn: &PgConnection) -> QueryResult<Option<Self>> {
        questions.find(qid).first(conn).optional()
    }

    pub fn find_many(ids: &[Uuid], conn: &PgConnection) -> QueryResult<Vec<Self>> {
        questions.filter(id.eq(any(ids))).load(conn)
    }

    pub fn update_verified(qid: Uuid, flag: bool, conn: &PgConnection) -> QueryResult<Option<Self>> {
        diesel::update(questions.find(qid))
            .set(verified.eq(flag))
            .get_result(conn)
            .optional()
    }

    pub fn update_votes(qid: Uuid, n: i32, conn: &PgConnection) -> QueryResult<Option<Self>> {
        diesel::update(questions.find(qid))
            .set(votes.eq(n))
            .get_result(conn)
            .optional()
    }

    pub fn authors(conn: &PgConnection) -> QueryResult<Vec<Option<String>>> {
        questions.select(author).load(conn)
    }
}

#[derive(Insertable, Serialize, Deserialize, Debug)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub author: Option<String>,
    pub content: String,
}

impl NewQuestion {
    pub fn create(&self, conn: &PgConnection) -> QueryResult<Question> {
        diesel::insert_into(questions::table)
            .values(self)
            .get_result(conn)
    }
}
