use crate::config::toml_config::LibraryConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "library-manager")]
#[command(about = "Interactive console for managing books and borrowers")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Start with empty collections, ignoring seed data
    #[arg(long)]
    pub no_seed: bool,
}

impl CliConfig {
    /// 載入配置檔（若有），套用命令列覆蓋設定後驗證
    pub fn load_library_config(&self) -> Result<LibraryConfig> {
        let mut config = match &self.config {
            Some(path) => LibraryConfig::from_file(path)?,
            None => LibraryConfig::default(),
        };

        if self.no_seed {
            config.seed.enabled = false;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ConfigProvider;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from(["library-manager", "-v", "--no-seed", "-c", "lib.toml"]);
        assert!(cli.verbose);
        assert!(cli.no_seed);
        assert_eq!(cli.config.as_deref(), Some("lib.toml"));
    }

    #[test]
    fn test_no_seed_override_without_file() {
        let cli = CliConfig::parse_from(["library-manager", "--no-seed"]);
        let config = cli.load_library_config().unwrap();
        assert!(!config.seed_enabled());
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let cli = CliConfig::parse_from(["library-manager", "-c", "/nonexistent/library.toml"]);
        assert!(cli.load_library_config().is_err());
    }
}
