use crate::catalog::types::{Book, BookEntry, CatalogData, SearchField};
use std::collections::BTreeMap;

/// Read-only lookups over a catalog
pub struct CatalogQuery<'a> {
    data: &'a CatalogData,
}

impl<'a> CatalogQuery<'a> {
    pub fn new(data: &'a CatalogData) -> Self {
        Self { data }
    }

    /// Every record keyed by id
    pub fn all(&self) -> &'a BTreeMap<u64, BookEntry> {
        &self.data.books
    }

    /// Direct lookup by id
    pub fn by_id(&self, id: u64) -> Option<Book> {
        self.data
            .books
            .get(&id)
            .map(|entry| Book::from_entry(id, entry))
    }

    /// Exact, case-sensitive match on the author or year index.
    /// Cost is proportional to the number of matches.
    pub fn by_author_or_year(&self, value: &str, field: SearchField) -> BTreeMap<u64, BookEntry> {
        self.data
            .index(field)
            .get(value)
            .into_iter()
            .flatten()
            .filter_map(|id| self.data.books.get(id).map(|entry| (*id, entry.clone())))
            .collect()
    }

    /// Case-insensitive exact title match; titles are not indexed so this scans
    pub fn by_title(&self, title: &str) -> BTreeMap<u64, BookEntry> {
        let wanted = title.to_lowercase();
        self.data
            .books
            .iter()
            .filter(|(_, entry)| entry.title.to_lowercase() == wanted)
            .map(|(id, entry)| (*id, entry.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> CatalogData {
        let mut data = CatalogData::new();
        for (title, author, year) in [
            ("Dune", "Herbert", "1965"),
            ("Foundation", "Asimov", "1951"),
            ("I, Robot", "Asimov", "1950"),
            ("Children of Dune", "Herbert", "1976"),
        ] {
            data.insert(BookEntry::new(
                title.to_string(),
                author.to_string(),
                year.to_string(),
            ));
        }
        data
    }

    #[test]
    fn test_by_author() {
        let data = sample();
        let query = CatalogQuery::new(&data);

        let found = query.by_author_or_year("Asimov", SearchField::Author);
        assert_eq!(found.keys().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert!(query
            .by_author_or_year("asimov", SearchField::Author)
            .is_empty());
    }

    #[test]
    fn test_by_year() {
        let data = sample();
        let query = CatalogQuery::new(&data);

        let found = query.by_author_or_year("1965", SearchField::Year);
        assert_eq!(found.len(), 1);
        assert_eq!(found[&1].title, "Dune");
        assert!(query.by_author_or_year("1800", SearchField::Year).is_empty());
    }

    #[test]
    fn test_by_title_ignores_case_only() {
        let data = sample();
        let query = CatalogQuery::new(&data);

        assert_eq!(
            query.by_title("dune").keys().copied().collect::<Vec<_>>(),
            vec![1]
        );
        assert_eq!(query.by_title("CHILDREN OF DUNE").len(), 1);
        assert!(query.by_title("Dune ").is_empty());
        assert!(query.by_title("Dun").is_empty());
    }

    #[test]
    fn test_by_id() {
        let data = sample();
        let query = CatalogQuery::new(&data);

        assert_eq!(query.by_id(2).map(|b| b.title), Some("Foundation".to_string()));
        assert!(query.by_id(0).is_none());
        assert!(query.by_id(5).is_none());
        assert_eq!(query.all().len(), 4);
    }
}
