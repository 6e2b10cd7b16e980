//! `SeaORM` entities for the `SqliteStore` tables.

pub mod config;
pub mod domain;
pub mod user_email;
pub mod user_record;
