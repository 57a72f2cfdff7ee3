pub mod app;
pub mod errors;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod reconcile;
pub mod reminder;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
