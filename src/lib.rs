//! Convenience loaders for the GoodReads corpus CSV files.
//!
//! Reads the five raw CSVs (`ratings.csv`, `books.csv`, `to_read.csv`,
//! `book_tags.csv`, `tags.csv`) from `{DATA_PATH:-./data}/raw/` into
//! in-memory [`Table`](data::model::Table)s and renders descriptive
//! statistics over whatever subset is present.
//!
//! ```no_run
//! use bookdata::data::{loader::load_all, summary::summarize};
//!
//! let collection = load_all(None)?;
//! println!("{}", summarize(&collection));
//! # Ok::<(), bookdata::data::loader::LoadError>(())
//! ```

pub mod config;
pub mod data;
