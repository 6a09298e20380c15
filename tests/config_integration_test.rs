use anyhow::Result;
use library_manager::utils::validation::Validate;
use library_manager::{Library, LibraryConfig, Session};
use std::io::Cursor;
use tempfile::TempDir;

/// 配置檔取代種子資料，並改變選單標題
#[test]
fn test_custom_seed_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("library.toml");

    std::fs::write(
        &config_path,
        r#"
[library]
name = "社區圖書館"

[[seed.books]]
title = "論語"
author = "孔子"
id = "L0002"

[[seed.books]]
title = "孟子"
author = "孟軻"
id = "L0001"

[[seed.borrowers]]
name = "阿德"
borrowed_books = ["L0001"]

[[seed.borrowers]]
name = "阿芳"
borrowed_books = ["Z9999"]
"#,
    )?;

    let config = LibraryConfig::from_file(&config_path)?;
    config.validate()?;
    let mut library = Library::from_config(&config)?;

    assert_eq!(library.books().len(), 2);
    assert_eq!(library.borrower_count(), 2);

    let mut session = Session::new(&mut library, Cursor::new("4\n8\n9\n"), Vec::new());
    session.run()?;
    let output = String::from_utf8(session.into_output())?;

    assert!(output.contains("\n社區圖書館\n"));

    let l1 = output.find("圖書編號: L0001").unwrap_or(usize::MAX);
    let l2 = output.find("圖書編號: L0002").unwrap_or(usize::MAX);
    assert!(l1 < l2);

    // 後加入的借閱者排在前面
    assert!(output.contains("借閱者列表:\n姓名: 阿芳 圖書編號: Z9999\n姓名: 阿德 圖書編號: L0001\n"));
    Ok(())
}

#[test]
fn test_seed_disabled_starts_empty() -> Result<()> {
    let config = LibraryConfig::from_toml_str("[seed]\nenabled = false\n")?;
    config.validate()?;
    let library = Library::from_config(&config)?;

    assert!(library.books().is_empty());
    assert_eq!(library.borrower_count(), 0);
    Ok(())
}

/// 只提供借閱者時，圖書仍使用內建資料
#[test]
fn test_partial_custom_seed_keeps_default_books() -> Result<()> {
    let config = LibraryConfig::from_toml_str("[[seed.borrowers]]\nname = \"阿德\"\n")?;
    let library = Library::from_config(&config)?;

    assert_eq!(library.books().len(), 10);
    assert_eq!(library.borrower_count(), 1);
    assert_eq!(library.search_book("B2345")?.title, "西遊記");
    Ok(())
}

#[test]
fn test_invalid_seed_id_rejected() -> Result<()> {
    let config = LibraryConfig::from_toml_str(
        "[[seed.books]]\ntitle = \"書\"\nauthor = \"人\"\nid = \"AB123\"\n",
    )?;

    assert!(config.validate().is_err());
    assert!(Library::from_config(&config).is_err());
    Ok(())
}
