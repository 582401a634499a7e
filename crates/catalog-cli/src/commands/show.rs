//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::output::Formatter;
use catalog_browser::{BrowserError, CatalogBrowser};
use catalog_domain::RecordId;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, browser: &CatalogBrowser, formatter: &Formatter) -> Result<()> {
    let id = RecordId::new(args.id.trim());
    let record = browser
        .record(&id)
        .ok_or_else(|| BrowserError::UnknownRecord(id.to_string()))?;

    let selected = browser.selection() == Some(&id);
    println!("{}", formatter.format_record(record, selected)?);
    Ok(())
}
