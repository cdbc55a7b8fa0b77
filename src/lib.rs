//! Litcatalog – a small in-memory catalog of literary works and the queries over it.
//!
//! The crate centers on two pieces:
//! * The item model in [`literature`]: the [`literature::Literature`] capability set
//!   (a title and a publication year) implemented by [`literature::Novel`],
//!   [`literature::Magazine`] and [`literature::ComicBook`], and the
//!   [`literature::LiteraryItem`] sum type for catalogs that mix them.
//! * The [`catalog::Catalog`], which owns items in insertion order alongside a
//!   title index and answers structured queries: substring search, alphabetical
//!   ordering, decade grouping, longest title, oldest item and so on.
//!
//! ## Validation
//! Items and catalogs are validated when constructed and are immutable afterwards.
//! The bounds used (maximum title length, earliest novel year, latest year) are
//! carried by [`settings::Limits`], which can be loaded from a TOML file and
//! `LITCATALOG_*` environment variables.
//!
//! ## Errors
//! Every fallible call returns [`Result`], with [`CatalogError`] telling apart
//! validation failures, queries that need a non-empty catalog, and missing
//! arguments.
//!
//! ## Quick Start
//! ```
//! use litcatalog::catalog::Catalog;
//! use litcatalog::literature::{LiteraryItem, Magazine, Novel};
//! let mut catalog: Catalog<LiteraryItem> = Catalog::new("Corner Books").unwrap();
//! catalog.add(Novel::new("Beloved", "Toni Morrison", 1987).unwrap().into());
//! catalog.add(Magazine::new("National Geographic", 2000).unwrap().into());
//! assert_eq!(catalog.longest_title().unwrap(), "National Geographic");
//! assert_eq!(catalog.percent_in_range(1980, 1989).unwrap(), 50);
//! ```
//!
//! ## Concurrency
//! A catalog is a plain owned value with no internal locking. Callers that share
//! one across threads wrap it themselves, e.g. in an `Arc<RwLock<Catalog>>`.

pub mod catalog;
pub mod error;
pub mod literature;
pub mod settings;

pub use error::{CatalogError, Result};
