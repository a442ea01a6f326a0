use crate::commands::CmdResult;
use crate::draft::categories::CategoryRegistry;
use crate::error::Result;

pub fn run(registry: &CategoryRegistry) -> Result<CmdResult> {
    Ok(CmdResult::default().with_categories(registry.all()))
}
