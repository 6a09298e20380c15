use crate::app::input::Scanner;
use crate::app::menu::MenuChoice;
use crate::core::library::Library;
use crate::domain::model::{Book, BookId};
use crate::utils::error::{LibraryError, Result};
use std::io::{BufRead, Write};

/// 每個操作結束後的流程
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// 互動式選單迴圈。
///
/// 找不到記錄、選項錯誤等都在這裡轉成訊息輸出，只有 I/O 錯誤會回傳給呼叫端。
pub struct Session<'a, R: BufRead, W: Write> {
    library: &'a mut Library,
    scanner: Scanner<R>,
    out: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(library: &'a mut Library, input: R, out: W) -> Self {
        Self {
            library,
            scanner: Scanner::new(input),
            out,
        }
    }

    /// 執行到使用者選擇退出或輸入結束
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Session started for '{}'", self.library.name());

        loop {
            self.print_menu()?;

            let Some(token) = self.scanner.next_token()? else {
                tracing::info!("Input closed, ending session");
                break;
            };

            let choice = match MenuChoice::parse(&token) {
                Ok(choice) => choice,
                Err(e) => {
                    tracing::warn!("Rejected menu input: {}", e);
                    writeln!(self.out, "{}", e.user_friendly_message())?;
                    continue;
                }
            };

            tracing::debug!("Menu choice {} ({})", choice.number(), choice.label());
            if self.dispatch(choice)? == Flow::Quit {
                break;
            }
        }

        self.out.flush()?;
        tracing::info!("Session ended");
        Ok(())
    }

    /// 取回輸出端（測試用來檢查輸出內容）
    pub fn into_output(self) -> W {
        self.out
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::AddBook => self.add_book(),
            MenuChoice::RemoveBook => self.remove_book(),
            MenuChoice::SearchBook => self.search_book(),
            MenuChoice::ListBooks => self.list_books(),
            MenuChoice::AddBorrower => self.add_borrower(),
            MenuChoice::RemoveBorrower => self.remove_borrower(),
            MenuChoice::SearchBorrower => self.search_borrower(),
            MenuChoice::ListBorrowers => self.list_borrowers(),
            MenuChoice::Exit => Ok(Flow::Quit),
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.library.name())?;
        for choice in MenuChoice::ALL {
            writeln!(self.out, "{}. {}", choice.number(), choice.label())?;
        }
        self.prompt("請輸入您的選擇: ")
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    fn prompt_line(&mut self, text: &str) -> Result<Option<String>> {
        self.prompt(text)?;
        self.scanner.next_line()
    }

    fn prompt_token(&mut self, text: &str) -> Result<Option<String>> {
        self.prompt(text)?;
        self.scanner.next_token()
    }

    /// 印出可恢復的錯誤，I/O 錯誤則往上傳
    fn report(&mut self, error: LibraryError) -> Result<Flow> {
        if let LibraryError::IoError(_) = error {
            return Err(error);
        }
        tracing::debug!("{}", error);
        writeln!(self.out, "{}", error.user_friendly_message())?;
        Ok(Flow::Continue)
    }

    fn add_book(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt_line("請輸入書名: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(author) = self.prompt_line("請輸入作者: ")? else {
            return Ok(Flow::Quit);
        };

        // 重複詢問直到編號格式正確
        let id = loop {
            let Some(raw) = self.prompt_token("請輸入圖書編號 ( 字母加 4 數字): ")? else {
                return Ok(Flow::Quit);
            };
            match BookId::parse(&raw) {
                Ok(id) => break id,
                Err(e) => {
                    tracing::warn!("Rejected book id '{}'", raw);
                    writeln!(self.out, "{}", e.user_friendly_message())?;
                }
            }
        };

        self.library.add_book(Book::new(title, author, id));
        writeln!(self.out, "圖書添加成功！")?;
        Ok(Flow::Continue)
    }

    fn remove_book(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_token("請輸入要刪除的圖書編號: ")? else {
            return Ok(Flow::Quit);
        };

        match self.library.remove_book(&id) {
            Ok(_) => {
                writeln!(self.out, "圖書刪除成功！")?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }

    fn search_book(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_token("請輸入要搜索的圖書編號: ")? else {
            return Ok(Flow::Quit);
        };

        let line = self
            .library
            .search_book(&id)
            .map(|book| format!("找到圖書: {}，作者: {}", book.title, book.author));
        match line {
            Ok(line) => {
                writeln!(self.out, "{}", line)?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }

    fn list_books(&mut self) -> Result<Flow> {
        writeln!(self.out, "圖書館的圖書列表:")?;
        for book in self.library.list_books() {
            writeln!(
                self.out,
                "書名: {} 作者: {} 圖書編號: {}",
                book.title, book.author, book.id
            )?;
        }
        Ok(Flow::Continue)
    }

    fn add_borrower(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt_line("請輸入借閱者姓名: ")? else {
            return Ok(Flow::Quit);
        };

        self.library.add_borrower(name);
        writeln!(self.out, "借閱者添加成功！")?;
        Ok(Flow::Continue)
    }

    fn remove_borrower(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt_line("請輸入要刪除的借閱者姓名: ")? else {
            return Ok(Flow::Quit);
        };

        match self.library.remove_borrower(&name) {
            Ok(_) => {
                writeln!(self.out, "借閱者刪除成功！")?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }

    fn search_borrower(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt_line("請輸入要搜索的借閱者姓名: ")? else {
            return Ok(Flow::Quit);
        };

        let line = self
            .library
            .search_borrower(&name)
            .map(|borrower| format!("找到借閱者: {}", borrower.name));
        match line {
            Ok(line) => {
                writeln!(self.out, "{}", line)?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }

    fn list_borrowers(&mut self) -> Result<Flow> {
        writeln!(self.out, "借閱者列表:")?;
        for borrower in self.library.borrowers() {
            write!(self.out, "姓名: {}", borrower.name)?;
            for id in &borrower.borrowed_books {
                write!(self.out, " 圖書編號: {}", id)?;
            }
            writeln!(self.out)?;
        }
        Ok(Flow::Continue)
    }
}
