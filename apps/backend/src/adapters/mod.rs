//! SeaORM adapters. Functions return `DbErr`; the repos layer maps to
//! `StoreError`.

pub mod admins_sea;
pub mod games_sea;
