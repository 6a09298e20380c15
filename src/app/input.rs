use crate::utils::error::Result;
use std::io::BufRead;

/// 逐詞或逐行讀取標準輸入。
///
/// 讀取一個詞之後，同一行剩下的內容會保留給下一次讀取。
pub struct Scanner<R: BufRead> {
    reader: R,
    pending: String,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: String::new(),
        }
    }

    /// 跳過空白（包含空行），回傳下一個以空白分隔的詞。輸入結束時回傳 `None`。
    pub fn next_token(&mut self) -> Result<Option<String>> {
        if !self.fill_non_blank()? {
            return Ok(None);
        }

        let rest = self.pending.trim_start();
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = rest[..end].to_string();
        self.pending = rest[end..].to_string();
        Ok(Some(token))
    }

    /// 跳過空白（包含空行），回傳目前這一行剩餘的內容，不含換行符號。
    pub fn next_line(&mut self) -> Result<Option<String>> {
        if !self.fill_non_blank()? {
            return Ok(None);
        }

        // 只去掉一個行結尾（`\n` 或 `\r\n`）
        let rest = self.pending.trim_start();
        let rest = rest.strip_suffix('\n').unwrap_or(rest);
        let line = rest.strip_suffix('\r').unwrap_or(rest).to_string();
        self.pending.clear();
        Ok(Some(line))
    }

    /// 確保 `pending` 含有非空白字元；輸入結束時回傳 false。
    /// 非 UTF-8 的位元組以 U+FFFD 取代，不視為錯誤。
    fn fill_non_blank(&mut self) -> Result<bool> {
        let mut buf = Vec::new();
        while self.pending.trim_start().is_empty() {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                self.pending.clear();
                return Ok(false);
            }
            self.pending = String::from_utf8_lossy(&buf).into_owned();
        }
        Ok(true)
    }
}
