//! Fetch an HTML page, pull fields out of it with CSS selectors, line the
//! results up into a validated table, and write that table to CSV or JSON.
//!
//! Everything is synchronous and stateless: the only I/O is the single GET in
//! [`fetch`] and the file write in the export functions. Fetching is
//! fail-soft (an empty string means "no content", with the cause reported via
//! `tracing`); every other failure propagates as an [`Error`].
//!
//! ```no_run
//! use tabscrape::{fetch, extract_text, extract_attribute};
//! use tabscrape::{normalize, ColumnMap};
//! use tabscrape::export::{export_delimited, DelimitedOptions};
//!
//! # fn main() -> tabscrape::Result<()> {
//! let html = fetch("https://www.example.com");
//!
//! let mut columns = ColumnMap::new();
//! columns.insert("Title", extract_text(&html, "h1")?);
//! columns.insert("Link", extract_attribute(&html, "a", "href")?);
//!
//! let table = normalize(columns)?;
//! export_delimited(&table, "output.csv", &DelimitedOptions::default())?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod table;

pub use error::{Error, ExtractError, FetchError, Result, TableError};
pub use extract::{extract_attribute, extract_text, Extractor};
pub use fetch::{fetch, Fetcher, FetcherBuilder};
pub use table::{normalize, Cell, ColumnMap, Table};
