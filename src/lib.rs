pub mod address;
pub mod amount;
pub mod chart;
pub mod constants;
pub mod leaderboard;
pub mod network;
