use super::{CommandContext, CommandHandler};
use crate::Result;

/// Handler for the `delete` command; unlike the shell it does not ask for confirmation
pub struct DeleteCommand {
    context: CommandContext,
    pub catalog: Option<String>,
    pub id: u64,
}

impl CommandHandler for DeleteCommand {
    fn execute(&self) -> Result<()> {
        let mut store = self.context.open_catalog(self.catalog.as_deref())?;
        let book = store.delete(self.id)?;
        println!("The book with id: {} was deleted from the library", book.id);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "delete"
    }
}

impl DeleteCommand {
    pub fn new(context: CommandContext, catalog: Option<String>, id: u64) -> Self {
        Self {
            context,
            catalog,
            id,
        }
    }
}
