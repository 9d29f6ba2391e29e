//! Properties command implementation.

use crate::cli::{EntityKind, PropertiesArgs};
use crate::error::Result;
use crate::output::Formatter;
use neorest_sdk::Database;

/// Execute the properties command.
pub async fn execute_properties(
    args: PropertiesArgs,
    db: &Database,
    formatter: &Formatter,
) -> Result<()> {
    let properties = match args.kind {
        EntityKind::Node => {
            let node = db.nodes().get(args.id).await?;
            db.properties(&node).await?
        }
        EntityKind::Relationship => {
            let rel = db.relationships().get(args.id).await?;
            db.properties(&rel).await?
        }
    };

    println!("{}", formatter.format_properties(&properties)?);
    Ok(())
}
