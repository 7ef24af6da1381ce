table! {
    answers (id) {
        id -> Uuid,
        question_id -> Uuid,
        author -> Nullable<Varchar>,
        content -> Text,
        status -> Varchar,
        created_at -> Timestamp,
    }
}

table! {
    notifications (id) {
        id -> Uuid,
        user_id -> Nullable<Uuid>,
        kind -> Varchar,
        message -> Text,
        meta -> Nullable<Jsonb>,
        read -> Bool,
        created_at -> Timestamp,
    }
}

table! {
    questions (id) {
        id -> Uuid,
        title -> Varchar,
        subject -> Varchar,
        author -> Nullable<Varchar>,
        content -> Text,
        verified -> Bool,
        votes -> Int4,
        created_at -> Timestamp,
    }
}

table! {
    resources (id) {
        id -> Uuid,
        title -> Varchar,
        description -> Text,
        subject -> Varchar,
        file_url -> Varchar,
        file_type -> Varchar,
        uploaded_by -> Varchar,
        downloads -> Int4,
        rating -> Int4,
        status -> Varchar,
        created_at -> Timestamp,
    }
}

table! {
    users (id) {
        id -> Uuid,
        name -> Varchar,
        email -> Varchar,
        password_hash -> Varchar,
        user_role -> Varchar,
        status -> Varchar,
        reputation -> Int4,
        badge -> Varchar,
        school -> Varchar,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

joinable!(answers -> questions (question_id));

allow_tables_to_appear_in_same_query!(
    answers,
    notifications,
    questions,
    resources,
    users,
);
