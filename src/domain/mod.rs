pub mod calendar;
pub mod date_range;
pub mod error;
pub mod navigator;
pub mod pagination;
pub mod period;
pub mod product;
pub mod redirect;
pub mod search;
pub mod submission;
pub mod unit;
pub mod validator;

pub use calendar::*;
pub use date_range::*;
pub use error::*;
pub use navigator::*;
pub use pagination::*;
pub use period::*;
pub use product::*;
pub use search::*;
pub use submission::*;
pub use unit::*;
pub use validator::*;
