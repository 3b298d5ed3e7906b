pub mod entity;
pub mod user;
