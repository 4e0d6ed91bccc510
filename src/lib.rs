pub mod achievements;
pub mod app;
pub mod auth;
pub mod errors;
pub mod handlers;
pub mod leaderboard;
pub mod levels;
pub mod models;
pub mod progression;
pub mod quests;
pub mod social;
pub mod state;
pub mod stats;
pub mod storage;

pub use app::router;
pub use state::{AppState, Clock};
pub use storage::{load_data, resolve_data_path};
