//! Query model and its text forms.
//!
//! | Form            | Parsed as                        |
//! |-----------------|----------------------------------|
//! | `7`, `-3`       | [`QueryParam::Index`]            |
//! | `3..1`, `(3,1)`, `3,1` | [`QueryParam::Range`]     |
//! | anything else   | [`QueryParam::Malformed`]        |
//!
//! A whole query is written `<kind>:<param>`, e.g. `circular:3..1`.

use std::{convert::Infallible, fmt, str::FromStr};

use seqlookup_common::{Error, Result};

/// The lookup discipline of a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Direct index or half-open slice access.
    Positional,
    /// Index arithmetic modulo the sequence length.
    Circular,
    /// Any unrecognized kind name, kept verbatim.
    Unknown(String),
}

impl QueryKind {
    pub fn as_str(&self) -> &str {
        match self {
            QueryKind::Positional => "positional",
            QueryKind::Circular => "circular",
            QueryKind::Unknown(name) => name,
        }
    }
}

impl FromStr for QueryKind {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim();
        Ok(if name.eq_ignore_ascii_case("positional") {
            QueryKind::Positional
        } else if name.eq_ignore_ascii_case("circular") {
            QueryKind::Circular
        } else {
            QueryKind::Unknown(name.to_string())
        })
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parameter of a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryParam {
    /// Point lookup.
    Index(i64),
    /// Range lookup `(start, end)`.
    Range(i64, i64),
    /// A parameter of any other shape, kept as text for reporting.
    Malformed(String),
}

impl From<i64> for QueryParam {
    fn from(index: i64) -> Self {
        QueryParam::Index(index)
    }
}

impl From<(i64, i64)> for QueryParam {
    fn from((start, end): (i64, i64)) -> Self {
        QueryParam::Range(start, end)
    }
}

/// Converts a tuple of arbitrary arity. Only pairs are ranges: a one-element tuple
/// is not a point lookup.
impl From<Vec<i64>> for QueryParam {
    fn from(values: Vec<i64>) -> Self {
        match values.as_slice() {
            &[start, end] => QueryParam::Range(start, end),
            other => QueryParam::Malformed(format!(
                "({})",
                other
                    .iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(",")
            )),
        }
    }
}

impl FromStr for QueryParam {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let text = s.trim();
        if let Ok(index) = text.parse::<i64>() {
            return Ok(QueryParam::Index(index));
        }

        let inner = text
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .unwrap_or(text);
        let parts: Option<Vec<i64>> = if let Some((start, end)) = inner.split_once("..") {
            [start, end].iter().map(|p| p.trim().parse().ok()).collect()
        } else if inner.contains(',') {
            inner.split(',').map(|p| p.trim().parse().ok()).collect()
        } else {
            None
        };

        Ok(match parts {
            Some(values) if values.len() == 2 => QueryParam::from(values),
            _ => QueryParam::Malformed(text.to_string()),
        })
    }
}

impl fmt::Display for QueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryParam::Index(index) => write!(f, "{index}"),
            QueryParam::Range(start, end) => write!(f, "({start}, {end})"),
            QueryParam::Malformed(text) => f.write_str(text),
        }
    }
}

/// A single lookup request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    pub kind: QueryKind,
    pub param: QueryParam,
}

impl Query {
    pub fn new(kind: QueryKind, param: impl Into<QueryParam>) -> Query {
        Query {
            kind,
            param: param.into(),
        }
    }

    pub fn positional(param: impl Into<QueryParam>) -> Query {
        Self::new(QueryKind::Positional, param)
    }

    pub fn circular(param: impl Into<QueryParam>) -> Query {
        Self::new(QueryKind::Circular, param)
    }
}

impl FromStr for Query {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, param) = s.split_once(':').ok_or_else(|| {
            Error::invalid_arg("query", format!("'{s}' is not of the form <kind>:<param>"))
        })?;
        let kind = kind.parse::<QueryKind>().unwrap_or_else(|never| match never {});
        let param = param.parse::<QueryParam>().unwrap_or_else(|never| match never {});
        Ok(Query { kind, param })
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.kind, self.param)
    }
}
