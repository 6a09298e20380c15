use clap::Parser;
use library_manager::utils::error::{ErrorSeverity, LibraryError};
use library_manager::utils::logger;
use library_manager::{CliConfig, Library, Session};

fn main() {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let config = match cli.load_library_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, config.log_level());

    tracing::info!("Starting library-manager");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut library = match Library::from_config(&config) {
        Ok(library) => library,
        Err(e) => fail(e),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(&mut library, stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        fail(e);
    }
}

fn fail(e: LibraryError) -> ! {
    tracing::error!(
        "❌ library-manager failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(exit_code(&e));
}

/// 根據錯誤嚴重程度決定退出碼
fn exit_code(e: &LibraryError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
