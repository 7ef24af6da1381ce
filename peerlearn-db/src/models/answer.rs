use crate::models::question::Question;
use crate::schema::answers;
use crate::schema::answers::dsl::*;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::PgConnection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Queryable, Debug, Serialize, Deserialize, Associations, Clone, Identifiable)]
#[belongs_to(Question)]
pub struct Answer {
    pub id: Uuid,
    pub question_id: Uuid,
    pub author: Option<String>,
    pub content: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl Answer {
    pub fn list(st: Option<&str>, max: i64, conn: &PgConnection) -> QueryResult<Vec<Self>> {
        let mut query = answers.into_boxed();
        if let Some(s) = st {
            query = query.filter(status.eq(s.to_string()));
        }
        query.order(created_at.desc()).limit(max).load(conn)
    }

    pub fn get(aid: Uuid, conn: &PgConnection) -> QueryResult<Option<Self>> {
        answers.find(aid).first(conn).optional()
    }

    pub fn update_status(aid: Uuid, st: &str, conn: &PgConnection) -> QueryResult<Option<Self>> {
        diesel::update(answers.find(aid))
            .set(status.eq(st.to_string()))
            .get_result(conn)
            .optional()
    }

    pub fn count_for_question(qid: Uuid, st: &str, conn: &PgConnection) -> QueryResult<i64> {
        answers
            .filter(question_id.eq(qid))
            .filter(status.eq(st.to_string()))
            .count()
            .get_result(conn)
    }

    pub fn authors(conn: &PgConnection) -> QueryResult<Vec<Option<String>>> {
        answers.select(author).load(conn)
    }
}

#[derive(Insertable, Serialize, Deserialize, Debug)]
#[table_name = "answers"]
pub struct NewAnswer {
    pub id: Uuid,
    pub question_id: Uuid,
    pub author: Option<String>,
    pub content: String,
    pub status: String,
}

impl NewAnswer {
    pub fn create(&self, conn: &PgConnection) -> QueryResult<Answer> {
        diesel::insert_into(answers::table)
            .values(self)
            .get_result(conn)
    }
}
