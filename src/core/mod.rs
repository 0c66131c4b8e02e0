// src/core/mod.rs

pub mod csv;
pub mod markup;
pub mod net;

pub use csv::{parse_records, Record};
pub use markup::{inject_link, Inline, Rich};
pub use net::{FeedSource, HttpSource};
