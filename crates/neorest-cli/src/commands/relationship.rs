//! Relationship command implementation.

use crate::cli::RelationshipArgs;
use crate::error::Result;
use crate::output::Formatter;
use neorest_sdk::Database;

/// Execute the relationship command.
pub async fn execute_relationship(
    args: RelationshipArgs,
    db: &Database,
    formatter: &Formatter,
) -> Result<()> {
    let rel = db.relationships().get(args.id).await?;

    if args.resolve {
        let start = rel.start(db).await?;
        let end = rel.end(db).await?;
        println!("{}", formatter.format_resolved_relationship(&rel, &start, &end)?);
    } else {
        println!("{}", formatter.format_relationship(&rel)?);
    }

    Ok(())
}
