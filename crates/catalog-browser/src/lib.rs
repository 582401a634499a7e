//! Use Case Catalog Browser
//!
//! Application layer that owns the catalog and the user's filter/selection
//! state, and hands the presentation layer a freshly computed view after
//! every change.
//!
//! # Overview
//!
//! The browser is responsible for:
//! - **Loading**: one best-effort catalog load; failures are logged and leave
//!   the catalog empty
//! - **Filter state**: active tags, search query and tag mode
//! - **Selection**: single-select toggle keyed by record id
//! - **Views**: recomputing the [`FilteredView`] from current state
//!
//! # Usage
//!
//! ```no_run
//! use catalog_browser::{BrowserConfig, CatalogBrowser, Message};
//! use catalog_store::CatalogSource;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = BrowserConfig::default();
//!     let source = CatalogSource::from_location(&config.data_source);
//!
//!     let mut browser = CatalogBrowser::new(config);
//!     browser.load(&source).await;
//!
//!     let view = browser
//!         .handle(Message::SetSearchQuery("course".to_string()))
//!         .expect("search never fails");
//!     println!("{}", view.summary());
//! }
//! ```
//!
//! # Configuration
//!
//! The browser can be configured via TOML:
//!
//! ```toml
//! [browser]
//! tag_mode = "any"        # or "all"
//! data_source = "data/use-case-data.json"
//! ```

#![warn(missing_docs)]

mod browser;
mod config;
mod error;
mod message;
mod view;

pub use browser::CatalogBrowser;
pub use config::{BrowserConfig, DEFAULT_DATA_SOURCE};
pub use error::{BrowserError, Result};
pub use message::Message;
pub use view::FilteredView;
