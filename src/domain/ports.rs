use crate::domain::model::{Book, Borrower};
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn library_name(&self) -> &str;
    fn seed_enabled(&self) -> bool;
    /// `Ok(None)` 表示使用內建種子資料
    fn seed_books(&self) -> Result<Option<Vec<Book>>>;
    fn seed_borrowers(&self) -> Option<Vec<Borrower>>;
}
