pub mod answer;
pub mod notification;
pub mod question;
pub mod resource;
pub mod user;
