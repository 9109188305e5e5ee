pub mod mock_catalog;
pub mod repository;

pub use mock_catalog::*;
pub use repository::*;
