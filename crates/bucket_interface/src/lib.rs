//! Trait definitions for the Bucket page rendering library.
//!
//! The renderer never reaches into the host wiki directly. Text escaping,
//! message lookup and query dispatch are injected through the traits in
//! this crate so formatting can run and be tested without a wiki.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod escaper;
mod executor;
mod messages;

pub use escaper::TextEscaper;
pub use executor::QueryExecutor;
pub use messages::MessageResolver;
