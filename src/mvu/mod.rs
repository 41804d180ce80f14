pub mod leaderboard;
pub mod runtime;
