#![allow(dead_code)]

pub mod app_builder;
pub mod stores;
pub mod test_state;

pub use app_builder::create_test_app;
pub use test_state::{seeded_builder, seeded_state, ADMIN_EMAIL, ADMIN_ID, ADMIN_PASSWORD};
