use crate::domain::model::{Book, BookId, Borrower};
use crate::utils::error::Result;

const SEED_BOOKS: [(&str, &str, &str); 10] = [
    ("紅樓夢", "曹雪芹", "A1234"),
    ("西遊記", "吳承恩", "B2345"),
    ("水滸傳", "施耐庵", "B3456"),
    ("三國演義", "羅貫中", "C4567"),
    ("金瓶梅", "蘭陵笑笑生", "C5678"),
    ("聊齋志異", "蒲松齡", "D6789"),
    ("儒林外史", "吳敬梓", "D7890"),
    ("封神演義", "許仲琳", "E8901"),
    ("鏡花緣", "李汝珍", "E9012"),
    ("老殘遊記", "劉鶚", "F0123"),
];

/// 依加入順序排列；載入時逐一放到最前面
const SEED_BORROWERS: [(&str, &[&str]); 5] = [
    ("小明", &["A1234", "B2345"]),
    ("小華", &["C4567"]),
    ("小美", &["D6789", "E8901"]),
    ("小強", &["F0123"]),
    ("小麗", &["B3456", "C5678"]),
];

pub fn default_books() -> Result<Vec<Book>> {
    SEED_BOOKS
        .iter()
        .map(|(title, author, id)| Ok(Book::new(*title, *author, BookId::parse(id)?)))
        .collect()
}

pub fn default_borrowers() -> Vec<Borrower> {
    SEED_BORROWERS
        .iter()
        .map(|(name, books)| Borrower::with_books(*name, books.iter().copied()))
        .collect()
}
