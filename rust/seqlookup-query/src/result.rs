use std::fmt;

/// Outcome of resolving one query.
///
/// The last four variants are lookup tokens: they report conditions of the query
/// itself and are returned as ordinary values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryResult<T> {
    /// A single element (point lookup).
    Element(T),
    /// A subsequence (range lookup). May be empty.
    Slice(Vec<T>),
    /// Positional point lookup outside `[0, len)`.
    OutOfRange,
    /// Circular lookup against an empty sequence.
    NoData,
    /// The parameter is neither an integer nor a pair of integers.
    WrongFormat,
    /// The query kind is not recognized.
    UnknownQueryType,
}

impl<T> QueryResult<T> {
    /// Returns `true` for the lookup tokens.
    pub fn is_token(&self) -> bool {
        !matches!(self, QueryResult::Element(_) | QueryResult::Slice(_))
    }

    pub fn element(&self) -> Option<&T> {
        match self {
            QueryResult::Element(value) => Some(value),
            _ => None,
        }
    }

    pub fn slice(&self) -> Option<&[T]> {
        match self {
            QueryResult::Slice(values) => Some(values),
            _ => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for QueryResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryResult::Element(value) => write!(f, "{value}"),
            QueryResult::Slice(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
            QueryResult::OutOfRange => f.write_str("Out of range"),
            QueryResult::NoData => f.write_str("No Data"),
            QueryResult::WrongFormat => f.write_str("Wrong Format"),
            QueryResult::UnknownQueryType => f.write_str("Unknown query type"),
        }
    }
}
