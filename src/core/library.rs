use crate::core::seed;
use crate::domain::model::{Book, Borrower};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{LibraryError, Result};
use std::collections::VecDeque;

pub const DEFAULT_LIBRARY_NAME: &str = "圖書館管理系統";

/// 圖書與借閱者的記憶體內管理器。
///
/// 所有查找都是線性掃描，重複的編號或姓名以第一筆為準。
#[derive(Debug, Clone)]
pub struct Library {
    name: String,
    books: Vec<Book>,
    borrowers: VecDeque<Borrower>,
}

impl Library {
    /// 空的圖書館
    pub fn new() -> Self {
        Self {
            name: DEFAULT_LIBRARY_NAME.to_string(),
            books: Vec::new(),
            borrowers: VecDeque::new(),
        }
    }

    /// 載入內建種子資料
    pub fn with_seed_data() -> Result<Self> {
        let mut library = Self::new();
        library.load_seed(seed::default_books()?, seed::default_borrowers());
        Ok(library)
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut library = Self::new();
        library.name = config.library_name().to_string();

        if config.seed_enabled() {
            let books = match config.seed_books()? {
                Some(books) => books,
                None => seed::default_books()?,
            };
            let borrowers = config
                .seed_borrowers()
                .unwrap_or_else(seed::default_borrowers);
            library.load_seed(books, borrowers);
        }

        tracing::debug!(
            "Library '{}' initialised with {} books and {} borrowers",
            library.name,
            library.books.len(),
            library.borrowers.len()
        );
        Ok(library)
    }

    fn load_seed(&mut self, books: Vec<Book>, borrowers: Vec<Borrower>) {
        self.books.extend(books);
        for borrower in borrowers {
            self.borrowers.push_front(borrower);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 目前的儲存順序（不排序）
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn borrowers(&self) -> impl Iterator<Item = &Borrower> {
        self.borrowers.iter()
    }

    pub fn borrower_count(&self) -> usize {
        self.borrowers.len()
    }

    /// 新書加到列表尾端，不檢查編號是否重複
    pub fn add_book(&mut self, book: Book) {
        tracing::info!("Adding book {} ({})", book.id, book.title);
        self.books.push(book);
    }

    pub fn remove_book(&mut self, id: &str) -> Result<Book> {
        let index = self
            .books
            .iter()
            .position(|book| book.id.as_str() == id)
            .ok_or_else(|| LibraryError::BookNotFound { id: id.to_string() })?;

        let removed = self.books.remove(index);
        tracing::info!("Removed book {} ({})", removed.id, removed.title);
        Ok(removed)
    }

    pub fn search_book(&self, id: &str) -> Result<&Book> {
        tracing::debug!("Searching book {}", id);
        self.books
            .iter()
            .find(|book| book.id.as_str() == id)
            .ok_or_else(|| LibraryError::BookNotFound { id: id.to_string() })
    }

    /// 依編號遞增排序後回傳；排序結果會保留在館藏中
    pub fn list_books(&mut self) -> &[Book] {
        self.books.sort_by(|a, b| a.id.cmp(&b.id));
        &self.books
    }

    /// 新借閱者放在最前面，借閱清單為空
    pub fn add_borrower(&mut self, name: impl Into<String>) {
        let borrower = Borrower::new(name);
        tracing::info!("Adding borrower {}", borrower.name);
        self.borrowers.push_front(borrower);
    }

    pub fn remove_borrower(&mut self, name: &str) -> Result<Borrower> {
        let index = self.borrowers.iter().position(|borrower| borrower.name == name);
        let removed = index
            .and_then(|index| self.borrowers.remove(index))
            .ok_or_else(|| LibraryError::BorrowerNotFound {
                name: name.to_string(),
            })?;

        tracing::info!("Removed borrower {}", removed.name);
        Ok(removed)
    }

    pub fn search_borrower(&self, name: &str) -> Result<&Borrower> {
        tracing::debug!("Searching borrower {}", name);
        self.borrowers
            .iter()
            .find(|borrower| borrower.name == name)
            .ok_or_else(|| LibraryError::BorrowerNotFound {
                name: name.to_string(),
            })
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::BookId;

    fn book(title: &str, id: &str) -> Book {
        Book::new(title, "作者", BookId::parse(id).unwrap())
    }

    struct NoSeedConfig;

    impl ConfigProvider for NoSeedConfig {
        fn library_name(&self) -> &str {
            "測試館"
        }

        fn seed_enabled(&self) -> bool {
            false
        }

        fn seed_books(&self) -> Result<Option<Vec<Book>>> {
            Ok(None)
        }

        fn seed_borrowers(&self) -> Option<Vec<Borrower>> {
            None
        }
    }

    #[test]
    fn test_seed_state() {
        let library = Library::with_seed_data().unwrap();
        assert_eq!(library.books().len(), 10);
        assert_eq!(library.borrower_count(), 5);

        let names: Vec<&str> = library.borrowers().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["小麗", "小強", "小美", "小華", "小明"]);
    }

    #[test]
    fn test_search_seed_book() {
        let library = Library::with_seed_data().unwrap();
        let found = library.search_book("B2345").unwrap();
        assert_eq!(found.title, "西遊記");
        assert_eq!(found.author, "吳承恩");
    }

    #[test]
    fn test_remove_then_search_reports_not_found() {
        let mut library = Library::with_seed_data().unwrap();
        let removed = library.remove_book("B2345").unwrap();
        assert_eq!(removed.title, "西遊記");
        assert_eq!(library.books().len(), 9);
        assert!(matches!(
            library.search_book("B2345"),
            Err(LibraryError::BookNotFound { .. })
        ));
    }

    #[test]
    fn test_remove_book_only_removes_first_duplicate() {
        let mut library = Library::new();
        library.add_book(book("第一本", "A0001"));
        library.add_book(book("第二本", "A0001"));

        let removed = library.remove_book("A0001").unwrap();
        assert_eq!(removed.title, "第一本");
        assert_eq!(library.search_book("A0001").unwrap().title, "第二本");
    }

    #[test]
    fn test_add_book_appends_to_end() {
        let mut library = Library::with_seed_data().unwrap();
        library.add_book(book("新書", "A0000"));
        assert_eq!(library.books().last().unwrap().id.as_str(), "A0000");
    }

    #[test]
    fn test_list_books_sorts_in_place() {
        let mut library = Library::new();
        library.add_book(book("三", "C0003"));
        library.add_book(book("一", "A0001"));
        library.add_book(book("小寫", "a0000"));
        library.add_book(book("二", "B0002"));

        let ids: Vec<&str> = library.list_books().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["A0001", "B0002", "C0003", "a0000"]);

        // 排序是持久的副作用
        let stored: Vec<&str> = library.books().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(stored, vec!["A0001", "B0002", "C0003", "a0000"]);
    }

    #[test]
    fn test_list_books_is_stable_for_duplicate_ids() {
        let mut library = Library::new();
        library.add_book(book("後", "B0001"));
        library.add_book(book("甲", "A0001"));
        library.add_book(book("乙", "A0001"));

        let titles: Vec<&str> = library.list_books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["甲", "乙", "後"]);
    }

    #[test]
    fn test_add_borrower_goes_to_front_with_no_books() {
        let mut library = Library::with_seed_data().unwrap();
        library.add_borrower("小新");

        let first = library.borrowers().next().unwrap();
        assert_eq!(first.name, "小新");
        assert!(first.borrowed_books.is_empty());
        assert_eq!(library.borrower_count(), 6);
    }

    #[test]
    fn test_remove_missing_borrower_leaves_collection_unchanged() {
        let mut library = Library::with_seed_data().unwrap();
        let before: Vec<Borrower> = library.borrowers().cloned().collect();

        let result = library.remove_borrower("不存在");
        assert!(matches!(result, Err(LibraryError::BorrowerNotFound { .. })));

        let after: Vec<Borrower> = library.borrowers().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_and_search_borrower() {
        let mut library = Library::with_seed_data().unwrap();
        assert_eq!(library.search_borrower("小美").unwrap().borrowed_books.len(), 2);

        library.remove_borrower("小美").unwrap();
        assert!(library.search_borrower("小美").is_err());
        assert_eq!(library.borrower_count(), 4);
    }

    #[test]
    fn test_duplicate_borrower_names_first_match_wins() {
        let mut library = Library::new();
        // 後載入的排在前面
        library.load_seed(
            Vec::new(),
            vec![
                Borrower::with_books("小明", ["B0002"]),
                Borrower::with_books("小明", ["A0001"]),
            ],
        );

        let found = library.search_borrower("小明").unwrap();
        assert_eq!(found.borrowed_books, vec!["A0001"]);

        let removed = library.remove_borrower("小明").unwrap();
        assert_eq!(removed.borrowed_books, vec!["A0001"]);
        assert_eq!(library.borrower_count(), 1);

        let remaining = library.search_borrower("小明").unwrap();
        assert_eq!(remaining.borrowed_books, vec!["B0002"]);
    }

    #[test]
    fn test_borrowed_books_not_checked_against_catalogue() {
        let mut library = Library::with_seed_data().unwrap();
        library.remove_book("A1234").unwrap();

        let borrower = library.search_borrower("小明").unwrap();
        assert!(borrower.borrowed_books.contains(&"A1234".to_string()));
    }

    #[test]
    fn test_from_config_without_seed() {
        let library = Library::from_config(&NoSeedConfig).unwrap();
        assert_eq!(library.name(), "測試館");
        assert!(library.books().is_empty());
        assert_eq!(library.borrower_count(), 0);
    }
}
