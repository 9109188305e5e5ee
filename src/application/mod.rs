pub mod app;
pub mod cli;
pub mod config;
pub mod pages;
pub mod render;
pub mod response;
pub mod tui;

pub use app::*;
pub use cli::*;
pub use config::*;
pub use pages::*;
pub use render::*;
pub use response::*;
pub use tui::*;
