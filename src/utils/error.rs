use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Invalid book id: {value}")]
    InvalidBookId { value: String },

    #[error("Book not found: {id}")]
    BookNotFound { id: String },

    #[error("Borrower not found: {name}")]
    BorrowerNotFound { name: String },

    #[error("Invalid menu choice: {choice}")]
    InvalidMenuChoice { choice: i64 },

    #[error("Invalid input: {input}")]
    InvalidInput { input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    NotFound,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LibraryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidBookId { .. }
            | Self::InvalidMenuChoice { .. }
            | Self::InvalidInput { .. } => ErrorCategory::Input,
            Self::BookNotFound { .. } | Self::BorrowerNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::NotFound => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 互動介面顯示給使用者的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidBookId { .. } => "圖書編號格式不正確。請再試一次。".to_string(),
            Self::BookNotFound { .. } => "未找到該圖書。".to_string(),
            Self::BorrowerNotFound { .. } => "未找到該借閱者。".to_string(),
            Self::InvalidMenuChoice { .. } => "無效選擇。請再試一次。".to_string(),
            Self::InvalidInput { .. } => "無效輸入，請輸入數字。".to_string(),
            Self::IoError(e) => format!("輸入輸出錯誤: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("配置錯誤 ({}): {}", field, message)
            }
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("配置值無效 {} = '{}': {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidBookId { .. } => "圖書編號為 1 個英文字母加 4 個數字，例如 A1234",
            Self::BookNotFound { .. } => "使用選項 4 列出所有圖書以確認編號",
            Self::BorrowerNotFound { .. } => "使用選項 8 列出所有借閱者以確認姓名",
            Self::InvalidMenuChoice { .. } | Self::InvalidInput { .. } => "請輸入 1 到 9 之間的數字",
            Self::IoError(_) => "檢查標準輸入輸出是否可用",
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => "檢查配置檔案內容是否為有效的 TOML 格式",
        }
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_errors_are_low_severity() {
        let err = LibraryError::BookNotFound {
            id: "Z0000".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "未找到該圖書。");
    }

    #[test]
    fn test_config_and_io_errors_are_fatal() {
        let config_err = LibraryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "expected `]`".to_string(),
        };
        assert_eq!(config_err.severity(), ErrorSeverity::High);

        let io_err: LibraryError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(io_err.category(), ErrorCategory::System);
        assert_eq!(io_err.severity(), ErrorSeverity::Critical);
    }
}
