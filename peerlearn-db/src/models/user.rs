use crate::schema::users;
use crate::schema::users::dsl::*;
use chrono::prelude::*;
use diesel::prelude::*;
use diesel::PgConnection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Queryable, Debug, Serialize, Deserialize, AsChangeset, Clone, Identifiable)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub user_role: String,
    pub status: String,
    pub reputation: i32,
    pub badge: String,
    pub school: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl User {
    pub fn get(uid: Uuid, conn: &PgConnection) -> QueryResult<Option<Self>> {
        users.find(uid).first(conn).optional()
    }

    pub fn find_by_email(em: &str, conn: &PgConnection) -> QueryResult<Option<Self>> {
        users.filter(email.eq(em)).first(conn).optional()
    }

    pub fn list_sorted_by_name(max: i64, conn: &PgConnection) -> QueryResult<Vec<Self>> {
        users.order(name.asc()).limit(max).load(conn)
    }

    pub fn list_by_role(role: &str, conn: &PgConnection) -> QueryResult<Vec<Self>> {
        users.filter(user_role.eq(role)).load(conn)
    }

    pub fn by_role_and_status(role: &str, st: &str, conn: &PgConnection) -> QueryResult<Vec<Self>> {
        users
            .filter(user_role.eq(role))
            .filter(status.eq(st))
            .order(created_at.desc())
            .load(conn)
    }

    pub fn update_status(uid: Uuid, new_status: &str, conn: &PgConnection) -> QueryResult<Option<Self>> {
        diesel::update(users.find(uid))
            .set((status.eq(new_status), updated_at.eq(Utc::now().naive_utc())))
            .get_result(conn)
            .optional()
    }

    pub fn update_role_and_credentials(
        &self,
        role: &str,
        st: &str,
        new_hash: &str,
        new_badge: &str,
        conn: &PgConnection,
    ) -> QueryResult<()> {
        diesel::update(self)
            .set((
                user_role.eq(role),
                status.eq(st),
                password_hash.eq(new_hash),
                badge.eq(new_badge),
                updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(conn)?;
        Ok(())
    }

    pub fn delete(uid: Uuid, conn: &PgConnection) -> QueryResult<usize> {
        diesel::delete(users.find(uid)).execute(conn)
    }
}

#[derive(Insertable, Serialize, Deserialize, Debug)]
#[table_name = "users"]
pub struct NewUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub user_role: String,
    pub status: String,
    pub reputation: i32,
    pub badge: String,
    pub school: String,
}

impl NewUser {
    pub fn create(&self, conn: &PgConnection) -> QueryResult<User> {
        diesel::insert_into(users::table)
            .values(self)
            .get_result(conn)
    }
}
