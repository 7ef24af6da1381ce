use crate::schema::resources;
use crate::schema::resources::dsl::*;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::PgConnection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Queryable, Debug, Serialize, Deserialize, Clone, Identifiable)]
pub struct Resource {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub subject: String,
    pub file_url: String,
    pub file_type: String,
    pub uploaded_by: String,
    pub downloads: i32,
    pub rating: i32,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl Resource {
    pub fn list_by_status(st: &str, max: i64, conn: &PgConnection) -> QueryResult<Vec<Self>> {
        resources
            .filter(status.eq(st.to_string()))
            .order(created_at.desc())
            .limit(max)
            .load(conn)
    }

    pub fn increment_downloads(rid: Uuid, conn: &PgConnection) -> QueryResult<Option<Self>> {
        diesel::update(resources.find(rid))
            .set(downloads.eq(downloads + 1))
            .get_result(conn)
            .optional()
    }
}

#[derive(Insertable, Serialize, Deserialize, Debug)]
#[table_name = "resources"]
pub struct NewResource {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub subject: String,
    pub file_url: String,
    pub file_type: String,
    pub uploaded_by: String,
    pub status: String,
}

impl NewResource {
    pub fn create(&self, conn: &PgConnection) -> QueryResult<Resource> {
        diesel::insert_into(resources::table)
            .values(self)
            .get_result(conn)
    }
}
