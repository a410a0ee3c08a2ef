//! Repository layer: domain models over the SeaORM adapters, plus in-memory stores.

pub mod admins;
pub mod games;

pub use admins::{CredentialStore, Identity, InMemoryCredentialStore, SeaOrmCredentialStore};
pub use games::{Game, GameChanges, GameStore, InMemoryGameStore, NewGame, SeaOrmGameStore};
