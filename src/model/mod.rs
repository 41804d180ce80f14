pub mod leaderboard;
pub mod phase;
pub mod player;

pub use leaderboard::*;
pub use phase::*;
pub use player::*;
