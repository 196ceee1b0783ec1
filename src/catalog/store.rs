use crate::catalog::query::CatalogQuery;
use crate::catalog::types::{Book, BookEntry, BookStatus, CatalogData, SearchField};
use crate::catalog::validation;
use crate::io::paths::BookshelfPaths;
use crate::{BookshelfError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// One catalog file and its in-memory mirror.
///
/// Every mutation is applied to a copy of the catalog, written to disk, and
/// only then swapped in, so a failed write leaves memory matching the file.
#[derive(Debug)]
pub struct CatalogStore {
    name: String,
    path: PathBuf,
    data: CatalogData,
}

impl CatalogStore {
    /// Open the catalog called `name` inside the configured data directory
    pub fn open_named(paths: &BookshelfPaths, name: &str) -> Result<Self> {
        validation::validate_catalog_name(name)?;
        Self::open(&paths.catalog_file(name.trim()))
    }

    /// Load the catalog at `path`, or create and persist an empty one when
    /// the file is missing or has no content
    pub fn open(path: &Path) -> Result<Self> {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                BookshelfError::Path(format!("Invalid catalog path: {}", path.display()))
            })?
            .to_string();

        let store = match Self::load(path)? {
            Some(data) => {
                debug!(catalog = %name, books = data.len(), "Loaded catalog");
                Self {
                    name,
                    path: path.to_path_buf(),
                    data,
                }
            }
            None => {
                let data = CatalogData::new();
                Self::write_file(path, &data)?;
                info!(catalog = %name, path = %path.display(), "Created new catalog");
                Self {
                    name,
                    path: path.to_path_buf(),
                    data,
                }
            }
        };

        Ok(store)
    }

    /// Read and check the catalog file; `None` when there is nothing to load
    fn load(path: &Path) -> Result<Option<CatalogData>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| BookshelfError::storage(path, format!("Failed to read: {}", e)))?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: CatalogData = serde_json::from_str(&content).map_err(|e| {
            BookshelfError::storage(path, format!("Not a valid catalog file: {}", e))
        })?;
        data.check_consistency()
            .map_err(|msg| BookshelfError::storage(path, format!("Inconsistent catalog: {}", msg)))?;

        Ok(Some(data))
    }

    /// Rewrite the whole file through a temp file and an atomic rename
    fn write_file(path: &Path, data: &CatalogData) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let io_err = |e: std::io::Error| BookshelfError::storage(path, format!("Failed to write: {}", e));

        fs::create_dir_all(dir).map_err(io_err)?;

        let mut content = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut content, formatter);
        data.serialize(&mut serializer)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(&content).map_err(io_err)?;
        if let Some(existing) = fs::metadata(path).ok().filter(|m| m.is_file()) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(io_err)?;
        }
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(path).map_err(|e| io_err(e.error))?;

        debug!(path = %path.display(), bytes = content.len(), "Catalog written");
        Ok(())
    }

    /// Persist `next` and make it the current state
    fn commit(&mut self, next: CatalogData) -> Result<()> {
        Self::write_file(&self.path, &next)?;
        self.data = next;
        Ok(())
    }

    /// Add a book and return it with its newly allocated id
    pub fn add(&mut self, title: &str, author: &str, year: &str) -> Result<Book> {
        validation::validate_title(title)?;
        validation::validate_author(author)?;
        validation::validate_year(year, validation::current_year())?;

        let entry = BookEntry::new(
            title.trim().to_string(),
            author.trim().to_string(),
            year.trim().to_string(),
        );

        let mut next = self.data.clone();
        let id = next.insert(entry.clone());
        self.commit(next)?;

        info!(catalog = %self.name, id, "Book added");
        Ok(Book::from_entry(id, &entry))
    }

    /// Remove a book from the records and both indexes
    pub fn delete(&mut self, id: u64) -> Result<Book> {
        let mut next = self.data.clone();
        let entry = next.remove(id).ok_or(BookshelfError::NotFound(id))?;
        self.commit(next)?;

        info!(catalog = %self.name, id, "Book deleted");
        Ok(Book::from_entry(id, &entry))
    }

    /// Set the availability of a book
    pub fn change_status(&mut self, id: u64, status: BookStatus) -> Result<Book> {
        let current = self.find_by_id(id).ok_or(BookshelfError::NotFound(id))?;
        if current.status == status {
            return Ok(current);
        }

        let mut next = self.data.clone();
        let entry = next
            .set_status(id, status)
            .cloned()
            .ok_or(BookshelfError::NotFound(id))?;
        self.commit(next)?;

        info!(catalog = %self.name, id, status = %status, "Book status changed");
        Ok(Book::from_entry(id, &entry))
    }

    pub fn get_all(&self) -> &BTreeMap<u64, BookEntry> {
        self.query().all()
    }

    pub fn find_by_id(&self, id: u64) -> Option<Book> {
        self.query().by_id(id)
    }

    pub fn find_by_author_or_year(&self, value: &str, field: SearchField) -> BTreeMap<u64, BookEntry> {
        self.query().by_author_or_year(value, field)
    }

    pub fn find_by_title(&self, title: &str) -> BTreeMap<u64, BookEntry> {
        self.query().by_title(title)
    }

    fn query(&self) -> CatalogQuery<'_> {
        CatalogQuery::new(&self.data)
    }

    /// Catalog name (the file stem)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current in-memory state
    pub fn data(&self) -> &CatalogData {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
