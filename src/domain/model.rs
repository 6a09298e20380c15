use crate::utils::error::{LibraryError, Result};
use crate::utils::validation::is_valid_book_id;
use serde::Deserialize;
use std::fmt;

/// 已通過格式驗證的圖書編號
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(String);

impl BookId {
    pub fn parse(value: &str) -> Result<Self> {
        if is_valid_book_id(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(LibraryError::InvalidBookId {
                value: value.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub id: BookId,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, id: BookId) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            id,
        }
    }
}

/// 借閱者。`borrowed_books` 不與館藏比對，可能包含不存在的編號。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Borrower {
    pub name: String,
    #[serde(default)]
    pub borrowed_books: Vec<String>,
}

impl Borrower {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            borrowed_books: Vec::new(),
        }
    }

    pub fn with_books<I, S>(name: impl Into<String>, books: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            borrowed_books: books.into_iter().map(Into::into).collect(),
        }
    }
}
