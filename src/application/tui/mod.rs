pub mod board_view;
pub mod theme;

pub use board_view::*;
pub use theme::*;
