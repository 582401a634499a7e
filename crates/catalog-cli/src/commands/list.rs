//! List command implementation.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::output::Formatter;
use catalog_browser::CatalogBrowser;

/// Execute the list command.
///
/// Tags and search given on the command line replace the browser's current
/// filters; with neither, the current filters are kept.
pub fn execute_list(args: ListArgs, browser: &mut CatalogBrowser, formatter: &Formatter) -> Result<()> {
    if !args.tags.is_empty() {
        browser.set_active_tags(args.tags);
    }
    if let Some(query) = args.search {
        browser.set_search_query(query);
    }

    println!("{}", formatter.format_view(&browser.view())?);
    Ok(())
}
