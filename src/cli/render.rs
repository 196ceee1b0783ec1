use crate::catalog::{Book, BookEntry};
use crate::Result;
use std::collections::BTreeMap;

/// Numbered listing with a total, as shown by the shell and `list`
pub fn book_listing(books: &BTreeMap<u64, BookEntry>) -> String {
    let mut out = String::new();
    for (counter, (id, entry)) in books.iter().enumerate() {
        out.push_str(&format!("---------------({})---------------\n", counter + 1));
        out.push_str(&Book::from_entry(*id, entry).to_string());
        out.push('\n');
    }
    out.push_str(&format!("---------- Total: {} books ----------", books.len()));
    out
}

/// Id to record mapping in the same shape as the library file
pub fn books_json(books: &BTreeMap<u64, BookEntry>) -> Result<String> {
    Ok(serde_json::to_string_pretty(books)?)
}
