pub mod library;
pub mod seed;

pub use crate::domain::model::{Book, BookId, Borrower};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
