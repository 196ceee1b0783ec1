use super::{CommandContext, CommandHandler};
use crate::Result;

/// Handler for the `add` command
pub struct AddCommand {
    context: CommandContext,
    pub catalog: Option<String>,
    pub title: String,
    pub author: String,
    pub year: String,
}

impl CommandHandler for AddCommand {
    fn execute(&self) -> Result<()> {
        let mut store = self.context.open_catalog(self.catalog.as_deref())?;
        let book = store.add(&self.title, &self.author, &self.year)?;

        println!("The following book was added to the library:");
        println!("{}", book);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "add"
    }
}

impl AddCommand {
    pub fn new(
        context: CommandContext,
        catalog: Option<String>,
        title: String,
        author: String,
        year: String,
    ) -> Self {
        Self {
            context,
            catalog,
            title,
            author,
            year,
        }
    }
}
