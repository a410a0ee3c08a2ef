pub mod admins;
pub mod games;

pub use admins::Entity as Admins;
pub use admins::Model as Admin;
pub use games::Entity as Games;
pub use games::Model as Game;
