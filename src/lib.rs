pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::Session;
pub use config::LibraryConfig;
pub use crate::core::library::Library;
pub use domain::model::{Book, BookId, Borrower};
pub use utils::error::{LibraryError, Result};
