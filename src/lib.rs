pub mod config;
pub mod error;
pub mod fonts;
pub mod frame;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{AppError, Result};
pub use routes::router;
pub use state::AppState;
