//! Inventory domain module.
//!
//! This crate contains the article model and the in-memory inventory that owns
//! it. No I/O beyond `tracing` events: prompting and rendering tables belong
//! to the front end.

pub mod article;
pub mod store;

pub use article::Article;
pub use store::{ArticleUpdate, FieldOutcome, Inventory, NameLookup, UpdateOutcome};
