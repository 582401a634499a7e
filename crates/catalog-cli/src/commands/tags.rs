//! Tags command implementation.

use crate::cli::TagsArgs;
use crate::error::Result;
use crate::output::Formatter;
use catalog_browser::CatalogBrowser;
use catalog_domain::search_tags;

/// Execute the tags command.
pub fn execute_tags(args: TagsArgs, browser: &CatalogBrowser, formatter: &Formatter) -> Result<()> {
    let view = browser.view();
    let term = args.search.unwrap_or_default();
    let tags = search_tags(&view.available_tags, &term);

    println!("{}", formatter.format_tags(&tags, &view.active_tags)?);
    Ok(())
}
