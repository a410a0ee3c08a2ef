pub mod games;

pub use games::{GamePatch, GameService};
