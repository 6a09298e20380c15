use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化互動式 CLI 的日誌。
///
/// 日誌輸出到 stderr，stdout 只保留選單與操作結果。
/// `RUST_LOG` 優先；否則 verbose 時用 debug，再否則用配置檔的 `fallback_level`。
pub fn init_cli_logger(verbose: bool, fallback_level: Option<&str>) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("library_manager=debug,info"))
    } else {
        let level = fallback_level.unwrap_or("warn");
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("library_manager={}", level)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
