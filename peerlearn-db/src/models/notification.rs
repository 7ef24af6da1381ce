use crate::schema::notifications;
use crate::schema::notifications::dsl::*;
use chrono::NaiveDateTime;
use diesel::{dsl::any, prelude::*};
use diesel::PgConnection;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Queryable, Debug, Serialize, Deserialize, Clone, Identifiable)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub kind: String,
    pub message: String,
    pub meta: Option<Value>,
    pub read: bool,
    pub created_at: NaiveDateTime,
}

impl Notification {
    pub fn list_unread(conn: &PgConnection) -> QueryResult<Vec<Self>> {
        notifications
            .filter(read.eq(false))
            .order(created_at.desc())
            .load(conn)
    }

    pub fn list_unread_for_user(uid: Uuid, conn: &PgConnection) -> QueryResult<Vec<Self>> {
        notifications
            .filter(user_id.eq(uid))
            .filter(read.eq(false))
            .order(created_at.desc())
            .load(conn)
    }

    pub fn list_unread_of_kind(k: &str, conn: &PgConnection) -> QueryResult<Vec<Self>> {
        notifications
            .filter(kind.eq(k.to_string()))
            .filter(read.eq(false))
            .order(created_at.desc())
            .load(conn)
    }

    pub fn mark_read(nid: Uuid, conn: &PgConnection) -> QueryResult<usize> {
        diesel::update(notifications.find(nid))
            .set(read.eq(true))
            .execute(conn)
    }

    pub fn mark_read_for_user(nid: Uuid, uid: Uuid, conn: &PgConnection) -> QueryResult<usize> {
        diesel::update(notifications.filter(id.eq(nid)).filter(user_id.eq(uid)))
            .set(read.eq(true))
            .execute(conn)
    }

    pub fn mark_many_read(ids: &[Uuid], conn: &PgConnection) -> QueryResult<usize> {
        diesel::update(notifications.filter(id.eq(any(ids))))
            .set(read.eq(true))
            .execute(conn)
    }
}

#[derive(Insertable, Serialize, Deserialize, Debug)]
#[table_name = "notifications"]
pub struct NewNotification {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub kind: String,
    pub message: String,
    pub meta: Option<Value>,
}

impl NewNotification {
    pub fn create(&self, conn: &PgConnection) -> QueryResult<Notification> {
        diesel::insert_into(notifications::table)
            .values(self)
            .get_result(conn)
    }
}
