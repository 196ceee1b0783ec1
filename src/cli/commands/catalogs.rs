use super::{CommandContext, CommandHandler};
use crate::Result;

/// Handler for the `catalogs` command
pub struct CatalogsCommand {
    context: CommandContext,
}

impl CommandHandler for CatalogsCommand {
    fn execute(&self) -> Result<()> {
        for name in self.context.paths.list_catalog_names()? {
            println!("{}", name);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "catalogs"
    }
}

impl CatalogsCommand {
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }
}
