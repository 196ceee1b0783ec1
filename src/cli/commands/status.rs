use super::{CommandContext, CommandHandler};
use crate::catalog::BookStatus;
use crate::Result;

/// Handler for the `status` command
pub struct StatusCommand {
    context: CommandContext,
    pub catalog: Option<String>,
    pub id: u64,
    pub status: BookStatus,
}

impl CommandHandler for StatusCommand {
    fn execute(&self) -> Result<()> {
        let mut store = self.context.open_catalog(self.catalog.as_deref())?;
        let book = store.change_status(self.id, self.status)?;
        println!(
            "The status for book id: {} was changed to '{}'",
            book.id, book.status
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "status"
    }
}

impl StatusCommand {
    pub fn new(context: CommandContext, catalog: Option<String>, id: u64, status: BookStatus) -> Self {
        Self {
            context,
            catalog,
            id,
            status,
        }
    }
}
