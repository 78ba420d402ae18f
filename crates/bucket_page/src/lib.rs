//! Renders bucket query results as wiki markup.
//!
//! The [`ResultFormatter`] turns a schema and result set into a wiki table,
//! formats individual values by declared column type, builds the
//! pagination button row and wraps error messages. [`run_query`] reaches
//! the query engine through an injected [`QueryExecutor`], and
//! [`BucketPageView`] puts the pieces together into a query page.
//!
//! [`QueryExecutor`]: bucket_interface::QueryExecutor

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod escape;
mod formatter;
mod messages;
mod pagination;
mod query;
mod table;
mod title;
mod view;
mod widget;

pub use escape::{WikiTextEscaper, escape_html};
pub use formatter::ResultFormatter;
pub use messages::{
    MSG_NEXT, MSG_NEXT_RESULTS, MSG_PREVIOUS, MSG_PREVIOUS_RESULTS, StaticMessages,
};
pub use query::{run_bucket_query, run_query};
pub use title::PageTitle;
pub use view::BucketPageView;
pub use widget::{ButtonGroupWidget, ButtonWidget, ButtonWidgetBuilder};
