use super::prompt::Choice;
use super::{user_message, Shell};
use crate::catalog::validation;
use crate::catalog::{Book, BookStatus, CatalogStore, SearchField};
use crate::cli::app::SearchBy;
use crate::cli::render;
use crate::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Shell<R, W> {
    pub(super) fn add_book(&mut self, store: &mut CatalogStore) -> Result<()> {
        let Some(title) = self.prompt.ask("Enter book title: ")? else {
            return Ok(());
        };
        validation::validate_title(&title)?;

        let Some(author) = self.prompt.ask("Enter author name: ")? else {
            return Ok(());
        };
        validation::validate_author(&author)?;

        let Some(year) = self.prompt.ask("Enter publication year: ")? else {
            return Ok(());
        };
        validation::validate_year(&year, validation::current_year())?;

        let book = store.add(&title, &author, &year)?;
        self.prompt
            .say("The following book was added to the library:")?;
        self.prompt.say(book.to_string())?;
        self.prompt.blank()
    }

    pub(super) fn delete_book(&mut self, store: &mut CatalogStore) -> Result<()> {
        let Some(book) = self.ask_for_book(store, "Enter book ID to delete: ")? else {
            return Ok(());
        };

        self.prompt.say("Are you sure you want to delete book:")?;
        self.prompt.say(book.to_string())?;
        self.prompt.menu(&["Delete", "Cancel deletion"])?;

        match self.prompt.ask_choice("Enter required option: ")? {
            Choice::Number(1) => {
                store.delete(book.id)?;
                self.prompt.say(format!(
                    "The book with id: {} was deleted from the library",
                    book.id
                ))?;
            }
            Choice::Number(2) => {
                self.prompt.say(format!(
                    "The deletion of book with id: {} was canceled",
                    book.id
                ))?;
            }
            Choice::Closed => return Ok(()),
            _ => self.prompt.say("Incorrect input")?,
        }
        self.prompt.blank()
    }

    pub(super) fn list_books(&mut self, store: &CatalogStore) -> Result<()> {
        let books = store.get_all();
        if books.is_empty() {
            self.prompt.say("There are no books in the library")?;
            return self.prompt.blank();
        }

        let listing = render::book_listing(books);
        self.prompt
            .say(format!("'{}' Library Books:", store.name()))?;
        self.prompt.say(listing)?;
        self.prompt.blank()
    }

    pub(super) fn search_books(&mut self, store: &CatalogStore) -> Result<()> {
        self.prompt.say("Specify the search criteria")?;
        self.prompt.menu(&[
            "Search by author",
            "Search by title",
            "Search by publication year",
            "Cancel the search",
        ])?;

        let criterion = match self.prompt.ask_choice("Enter required option: ")? {
            Choice::Number(1) => SearchBy::Author,
            Choice::Number(2) => SearchBy::Title,
            Choice::Number(3) => SearchBy::Year,
            Choice::Number(4) | Choice::Closed => {
                self.prompt.say("Canceling the search...")?;
                return self.prompt.blank();
            }
            _ => {
                self.prompt.say("Incorrect input")?;
                return self.prompt.blank();
            }
        };

        loop {
            let question = match criterion {
                SearchBy::Author => "Enter author name for search: ",
                SearchBy::Title => "Enter title for search: ",
                SearchBy::Year => "Enter publication year for search: ",
            };
            let Some(value) = self.prompt.ask(question)? else {
                return Ok(());
            };

            let books = match criterion {
                SearchBy::Author => store.find_by_author_or_year(&value, SearchField::Author),
                SearchBy::Year => store.find_by_author_or_year(&value, SearchField::Year),
                SearchBy::Title => store.find_by_title(&value),
            };

            if books.is_empty() {
                self.prompt.say("Search result: 0 books")?;
            } else {
                self.prompt.say(render::book_listing(&books))?;
            }
            self.prompt.blank()?;

            let label = criterion.label();
            self.prompt
                .say(format!("Do you want to repeat the search by {}?", label))?;
            self.prompt.menu(&[
                format!("Yes, repeat the search by {}", label).as_str(),
                "No, finish the search",
            ])?;
            if self.prompt.ask_choice("Enter required option: ")? != Choice::Number(1) {
                self.prompt.say("Canceling the search...")?;
                return self.prompt.blank();
            }
        }
    }

    pub(super) fn change_status(&mut self, store: &mut CatalogStore) -> Result<()> {
        let Some(book) = self.ask_for_book(store, "Enter book ID: ")? else {
            return Ok(());
        };

        self.prompt
            .say("You want to change status for the following book:")?;
        self.prompt.say(book.to_string())?;
        self.prompt
            .say("Enter new status for the book from the listed below:")?;
        self.prompt.say(format!("1 - '{}'", BookStatus::Available))?;
        self.prompt.say(format!("2 - '{}'", BookStatus::CheckedOut))?;

        let status = match self.prompt.ask_choice("Enter required option: ")? {
            Choice::Number(1) => BookStatus::Available,
            Choice::Number(2) => BookStatus::CheckedOut,
            Choice::Closed => return Ok(()),
            _ => {
                self.prompt.say("Incorrect input")?;
                return self.prompt.blank();
            }
        };

        let changed = store.change_status(book.id, status)?;
        self.prompt.say(format!(
            "The status for book id: {} was changed to '{}'",
            changed.id, changed.status
        ))?;
        self.prompt.blank()
    }

    /// Read an id and look the book up, reporting bad input and misses
    fn ask_for_book(&mut self, store: &CatalogStore, question: &str) -> Result<Option<Book>> {
        let id = match self.prompt.ask_number(question)? {
            Choice::Number(id) => id,
            Choice::Closed => return Ok(None),
            Choice::Invalid => {
                self.prompt
                    .say("Incorrect ID input. ID must be a number.")?;
                self.prompt.blank()?;
                return Ok(None);
            }
        };

        match store.find_by_id(id) {
            Some(book) => Ok(Some(book)),
            None => {
                let missing = crate::BookshelfError::NotFound(id);
                self.prompt.say(user_message(&missing))?;
                self.prompt.blank()?;
                Ok(None)
            }
        }
    }
}
