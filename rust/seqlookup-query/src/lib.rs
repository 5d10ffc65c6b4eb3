//! Positional and circular lookups against an immutable, shareable sequence.
//!
//! - [`Sequence`] is the read-only data being queried.
//! - [`Query`] pairs a [`QueryKind`] with a [`QueryParam`].
//! - [`resolve`] maps one query to a [`QueryResult`]: an element, a subsequence, or
//!   one of the lookup tokens (`OutOfRange`, `NoData`, `WrongFormat`,
//!   `UnknownQueryType`). Lookup conditions are values, never errors.

pub mod query;
pub mod resolver;
pub mod result;
pub mod sequence;

pub use query::{Query, QueryKind, QueryParam};
pub use resolver::{resolve, resolve_query};
pub use result::QueryResult;
pub use sequence::Sequence;
