pub mod app;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod index;
pub mod models;
pub mod sample;
pub mod state;
pub mod stats;
pub mod ui;
pub mod views;

pub use app::router;
pub use config::Config;
pub use models::AppData;
pub use state::AppState;
