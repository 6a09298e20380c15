use crate::utils::error::{LibraryError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    RemoveBook,
    SearchBook,
    ListBooks,
    AddBorrower,
    RemoveBorrower,
    SearchBorrower,
    ListBorrowers,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::AddBook,
        MenuChoice::RemoveBook,
        MenuChoice::SearchBook,
        MenuChoice::ListBooks,
        MenuChoice::AddBorrower,
        MenuChoice::RemoveBorrower,
        MenuChoice::SearchBorrower,
        MenuChoice::ListBorrowers,
        MenuChoice::Exit,
    ];

    /// 解析使用者輸入的選單編號
    pub fn parse(token: &str) -> Result<Self> {
        let number: i64 = token.parse().map_err(|_| LibraryError::InvalidInput {
            input: token.to_string(),
        })?;

        Self::from_number(number)
    }

    pub fn from_number(number: i64) -> Result<Self> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(LibraryError::InvalidMenuChoice { choice: number })
    }

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| *choice == self)
            .map(|index| index + 1)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddBook => "添加圖書",
            MenuChoice::RemoveBook => "刪除圖書",
            MenuChoice::SearchBook => "搜索圖書",
            MenuChoice::ListBooks => "列出圖書",
            MenuChoice::AddBorrower => "添加借閱者",
            MenuChoice::RemoveBorrower => "刪除借閱者",
            MenuChoice::SearchBorrower => "搜索借閱者",
            MenuChoice::ListBorrowers => "列出借閱者",
            MenuChoice::Exit => "退出",
        }
    }
}
