use crate::core::library::DEFAULT_LIBRARY_NAME;
use crate::domain::model::{Book, BookId, Borrower};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{LibraryError, Result};
use crate::utils::validation::{self, Validate};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    pub library: LibrarySection,
    pub seed: SeedConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySection {
    pub name: String,
}

impl Default for LibrarySection {
    fn default() -> Self {
        Self {
            name: DEFAULT_LIBRARY_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub enabled: bool,
    /// 有值時取代內建的圖書種子資料
    pub books: Option<Vec<SeedBookConfig>>,
    pub borrowers: Option<Vec<Borrower>>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            books: None,
            borrowers: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedBookConfig {
    pub title: String,
    pub author: String,
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl LibraryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LibraryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LibraryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LIBRARY_NAME})，未定義的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::{Captures, Regex};
        use std::sync::LazyLock;

        static ENV_VAR: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

        ENV_VAR
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("library.name", &self.library.name)?;

        if let Some(books) = &self.seed.books {
            for (index, book) in books.iter().enumerate() {
                let prefix = format!("seed.books[{}]", index);
                validation::validate_non_empty_string(&format!("{}.title", prefix), &book.title)?;
                validation::validate_non_empty_string(&format!("{}.author", prefix), &book.author)?;
                validation::validate_book_id(&format!("{}.id", prefix), &book.id)?;
            }
        }

        // 借閱清單中的編號不驗證
        if let Some(borrowers) = &self.seed.borrowers {
            for (index, borrower) in borrowers.iter().enumerate() {
                validation::validate_non_empty_string(
                    &format!("seed.borrowers[{}].name", index),
                    &borrower.name,
                )?;
            }
        }

        if let Some(level) = self.log_level() {
            validation::validate_log_level("logging.level", level)?;
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl ConfigProvider for LibraryConfig {
    fn library_name(&self) -> &str {
        &self.library.name
    }

    fn seed_enabled(&self) -> bool {
        self.seed.enabled
    }

    fn seed_books(&self) -> Result<Option<Vec<Book>>> {
        let Some(books) = &self.seed.books else {
            return Ok(None);
        };

        books
            .iter()
            .map(|book| {
                Ok(Book::new(
                    book.title.clone(),
                    book.author.clone(),
                    BookId::parse(&book.id)?,
                ))
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    fn seed_borrowers(&self) -> Option<Vec<Borrower>> {
        self.seed.borrowers.clone()
    }
}

impl Validate for LibraryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
