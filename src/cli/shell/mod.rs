//! Interactive menu-driven session.
//!
//! The shell only gathers and checks raw input, calls into
//! [`CatalogStore`], and prints the results. It is generic over its reader
//! and writer so whole sessions can be scripted.

mod actions;
pub mod prompt;

use crate::catalog::validation;
use crate::catalog::CatalogStore;
use crate::io::paths::BookshelfPaths;
use crate::{BookshelfError, Result};
use prompt::{Choice, Prompt};
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const APP_NAME: &str = "My Library";

pub struct Shell<R, W> {
    prompt: Prompt<R, W>,
    paths: BookshelfPaths,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, paths: BookshelfPaths) -> Self {
        Self {
            prompt: Prompt::new(input, output),
            paths,
        }
    }

    /// Run a full session: pick a library, then serve the library menu
    pub fn run(&mut self) -> Result<()> {
        self.prompt.say("***************************")?;
        self.prompt.say(format!("Welcome to {} App", APP_NAME))?;
        self.prompt.say("***************************")?;

        let Some(name) = self.select_catalog()? else {
            return self.goodbye();
        };

        let mut store = CatalogStore::open_named(&self.paths, &name)?;
        info!(catalog = %store.name(), "Shell session started");
        self.prompt
            .say(format!("Start working with library '{}'", store.name()))?;

        self.catalog_loop(&mut store)?;
        self.goodbye()
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    fn goodbye(&mut self) -> Result<()> {
        self.prompt.say(format!("'{} App' was closed", APP_NAME))
    }

    /// Top-level menu; `None` means the user chose to leave
    fn select_catalog(&mut self) -> Result<Option<String>> {
        loop {
            self.prompt
                .say("Do you want to work with one of the current libraries?")?;
            self.prompt.say("Answer options:")?;
            self.prompt.say("1 - 'Yes'")?;
            self.prompt.say("2 - 'No. I want to create new library'")?;
            self.prompt.say(format!("3 - 'Leave {} App'", APP_NAME))?;

            match self.prompt.ask_choice("Enter your answer: ")? {
                Choice::Closed | Choice::Number(3) => return Ok(None),
                Choice::Number(1) => return self.choose_existing(),
                Choice::Number(2) => return self.ask_new_name(),
                Choice::Number(_) | Choice::Invalid => {
                    self.prompt.say("Incorrect input. It must be digit from 1 to 3.")?;
                    self.prompt.blank()?;
                }
            }
        }
    }

    fn choose_existing(&mut self) -> Result<Option<String>> {
        let names = self.paths.list_catalog_names()?;
        debug!(count = names.len(), "Found libraries");

        if names.is_empty() {
            self.prompt
                .say("There are no available libraries at the moment")?;
            self.prompt.say("Create new?")?;
            self.prompt
                .menu(&[format!("No, leave {} App", APP_NAME).as_str(), "Yes"])?;
            return match self.prompt.ask_choice("Enter required option: ")? {
                Choice::Number(2) => self.ask_new_name(),
                _ => Ok(None),
            };
        }

        self.prompt.say("Available Libraries")?;
        for (number, name) in names.iter().enumerate() {
            self.prompt.say(format!("{}. {}", number + 1, name))?;
        }

        let Some(answer) = self
            .prompt
            .ask("Enter the library name from the listed above: ")?
        else {
            return Ok(None);
        };

        // the list number works as well as the name
        let picked = names.iter().find(|name| **name == answer).cloned().or_else(|| {
            answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| names.get(index).cloned())
        });

        if picked.is_none() {
            self.prompt.say(format!(
                "There is no '{}' library in available libraries list",
                answer
            ))?;
        }
        Ok(picked)
    }

    fn ask_new_name(&mut self) -> Result<Option<String>> {
        loop {
            let Some(name) = self.prompt.ask("Enter new library name: ")? else {
                return Ok(None);
            };
            match validation::validate_catalog_name(&name) {
                Ok(()) => return Ok(Some(name)),
                Err(e) => self.prompt.say(user_message(&e))?,
            }
        }
    }

    fn catalog_loop(&mut self, store: &mut CatalogStore) -> Result<()> {
        loop {
            self.prompt.say("**** Library manager ****")?;
            self.prompt.menu(&[
                "Add book",
                "Delete book",
                "Get all books",
                "Search book",
                "Change status",
                format!("Leave {} App", APP_NAME).as_str(),
            ])?;

            let outcome = match self.prompt.ask_choice("Enter required option: ")? {
                Choice::Closed | Choice::Number(6) => return Ok(()),
                Choice::Number(1) => self.add_book(store),
                Choice::Number(2) => self.delete_book(store),
                Choice::Number(3) => self.list_books(store),
                Choice::Number(4) => self.search_books(store),
                Choice::Number(5) => self.change_status(store),
                Choice::Number(_) | Choice::Invalid => {
                    self.prompt
                        .say("Incorrect input. It must be digit from 1 to 6.")?;
                    self.prompt.blank()
                }
            };
            self.report(outcome)?;
        }
    }

    /// Print recoverable errors and carry on; anything else ends the session
    fn report(&mut self, outcome: Result<()>) -> Result<()> {
        match outcome {
            Err(e) if e.is_recoverable() => {
                self.prompt.say(user_message(&e))?;
                self.prompt.blank()
            }
            other => other,
        }
    }
}

/// Message shown to the user for an error, without the kind prefix
fn user_message(error: &BookshelfError) -> String {
    match error {
        BookshelfError::Validation(message) => message.clone(),
        other => other.to_string(),
    }
}
