//! Types command implementation.

use crate::error::Result;
use crate::output::Formatter;
use neorest_sdk::{Database, SdkError};

/// Execute the types command.
pub async fn execute_types(db: &Database, formatter: &Formatter) -> Result<()> {
    match db.relationships().types().await {
        Ok(types) => {
            println!("{}", formatter.format_types(&types)?);
            Ok(())
        }
        Err(SdkError::FeatureUnavailable(feature)) => {
            eprintln!(
                "{}",
                formatter.warning(&format!("Server does not support listing {}", feature))
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
