use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Availability of a single book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    Available,
    /// Older catalogs spelled this with a space, sometimes with a Cyrillic "С"
    #[serde(alias = "Checked out", alias = "Сhecked out")]
    CheckedOut,
}

impl BookStatus {
    /// Human readable label used by the shell
    pub fn label(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::CheckedOut => "Checked out",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(BookStatus::Available),
            "checkedout" | "checked-out" | "checked out" | "checked_out" => {
                Ok(BookStatus::CheckedOut)
            }
            other => Err(format!(
                "Unknown status '{}'. Expected 'available' or 'checked-out'",
                other
            )),
        }
    }
}

/// A book record as persisted under `books` in the catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    pub title: String,
    pub author: String,
    /// Kept as text so it matches the keys of the year index
    pub year: String,
    pub status: BookStatus,
}

impl BookEntry {
    /// Create a new entry with the default `Available` status
    pub fn new(title: String, author: String, year: String) -> Self {
        Self {
            title,
            author,
            year,
            status: BookStatus::Available,
        }
    }
}

/// A book together with its catalog id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: String,
    pub status: BookStatus,
}

impl Book {
    pub fn from_entry(id: u64, entry: &BookEntry) -> Self {
        Self {
            id,
            title: entry.title.clone(),
            author: entry.author.clone(),
            year: entry.year.clone(),
            status: entry.status,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Publication date: {}", self.year)?;
        writeln!(f, "Status: {}", self.status)?;
        write!(f, "ID: {}", self.id)
    }
}

/// Indexed field that can be searched without a full scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Author,
    Year,
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Author => f.write_str("author"),
            SearchField::Year => f.write_str("year"),
        }
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "author" => Ok(SearchField::Author),
            "year" => Ok(SearchField::Year),
            other => Err(format!("Unknown search field '{}'", other)),
        }
    }
}

/// Full persisted state of one catalog.
///
/// Field names match the on-disk document exactly:
/// `current_id`, `books`, `years`, `authors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogData {
    /// Last id handed out; the next book gets `current_id + 1`
    pub current_id: u64,
    pub books: BTreeMap<u64, BookEntry>,
    pub years: BTreeMap<String, Vec<u64>>,
    pub authors: BTreeMap<String, Vec<u64>>,
}

impl CatalogData {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Index list for the given field
    pub fn index(&self, field: SearchField) -> &BTreeMap<String, Vec<u64>> {
        match field {
            SearchField::Author => &self.authors,
            SearchField::Year => &self.years,
        }
    }

    /// Store a new entry under a freshly allocated id and index it
    pub fn insert(&mut self, entry: BookEntry) -> u64 {
        let id = self.current_id + 1;
        index_push(&mut self.years, &entry.year, id);
        index_push(&mut self.authors, &entry.author, id);
        self.books.insert(id, entry);
        self.current_id = id;
        id
    }

    /// Remove an entry and drop its id from both indexes.
    /// `current_id` is left untouched so ids are never reused.
    pub fn remove(&mut self, id: u64) -> Option<BookEntry> {
        let entry = self.books.remove(&id)?;
        index_remove(&mut self.years, &entry.year, id);
        index_remove(&mut self.authors, &entry.author, id);
        Some(entry)
    }

    /// Update the status of an entry in place
    pub fn set_status(&mut self, id: u64, status: BookStatus) -> Option<&BookEntry> {
        let entry = self.books.get_mut(&id)?;
        entry.status = status;
        Some(entry)
    }

    /// Check that records and both indexes agree with each other
    pub fn check_consistency(&self) -> Result<(), String> {
        if let Some(max_id) = self.books.keys().next_back() {
            if *max_id > self.current_id {
                return Err(format!(
                    "current_id {} is below the largest book id {}",
                    self.current_id, max_id
                ));
            }
        }

        for (name, index) in [("years", &self.years), ("authors", &self.authors)] {
            let mut seen = BTreeSet::new();
            for (key, ids) in index {
                if ids.is_empty() {
                    return Err(format!("{} index has an empty list for '{}'", name, key));
                }
                for id in ids {
                    let entry = self
                        .books
                        .get(id)
                        .ok_or_else(|| format!("{} index refers to missing book {}", name, id))?;
                    let indexed_value = if name == "years" {
                        &entry.year
                    } else {
                        &entry.author
                    };
                    if indexed_value != key {
                        return Err(format!(
                            "{} index lists book {} under '{}' but the book has '{}'",
                            name, id, key, indexed_value
                        ));
                    }
                    if !seen.insert(*id) {
                        return Err(format!("{} index lists book {} more than once", name, id));
                    }
                }
            }
            if let Some(missing) = self.books.keys().find(|id| !seen.contains(*id)) {
                return Err(format!("{} index has no entry for book {}", name, missing));
            }
        }

        Ok(())
    }
}

fn index_push(index: &mut BTreeMap<String, Vec<u64>>, key: &str, id: u64) {
    index.entry(key.to_string()).or_default().push(id);
}

fn index_remove(index: &mut BTreeMap<String, Vec<u64>>, key: &str, id: u64) {
    if let Some(ids) = index.get_mut(key) {
        ids.retain(|existing| *existing != id);
        if ids.is_empty() {
            index.remove(key);
        }
    }
}
