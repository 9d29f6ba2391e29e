//! Info command implementation.

use crate::error::Result;
use crate::output::Formatter;
use neorest_sdk::Database;

/// Execute the info command.
pub async fn execute_info(db: &Database, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.success(&format!("Connected to {}", db.url())));
    println!("{}", formatter.format_service_root(db.service_root())?);
    Ok(())
}
