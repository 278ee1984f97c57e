pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod search;
pub mod vault;

pub use client::WorkoutsClient;
pub use config::Config;
pub use error::{AppError, Result};
pub use render::Renderer;
pub use search::overlaps_window;
pub use vault::Vault;
