//! Node command implementation.

use crate::cli::NodeArgs;
use crate::error::Result;
use crate::output::Formatter;
use neorest_sdk::Database;

/// Execute the node command.
pub async fn execute_node(args: NodeArgs, db: &Database, formatter: &Formatter) -> Result<()> {
    let node = db.nodes().get(args.id).await?;
    println!("{}", formatter.format_node(&node)?);
    Ok(())
}
