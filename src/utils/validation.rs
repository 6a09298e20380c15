use crate::utils::error::{LibraryError, Result};
use regex::Regex;
use std::sync::LazyLock;

static BOOK_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]\d{4}$").expect("book id pattern is a valid regex"));

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 圖書編號：1 個 ASCII 字母加 4 個 ASCII 數字
pub fn is_valid_book_id(id: &str) -> bool {
    // `\d` 在 regex crate 中包含 Unicode 數字，因此額外限制為 ASCII
    BOOK_ID_PATTERN.is_match(id) && id.is_ascii()
}

pub fn validate_book_id(field_name: &str, id: &str) -> Result<()> {
    if !is_valid_book_id(id) {
        return Err(LibraryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: id.to_string(),
            reason: "Book id must be one letter followed by four digits".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LibraryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Err(LibraryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Unsupported log level. Valid levels: {}", LOG_LEVELS.join(", ")),
        });
    }
    Ok(())
}
