//! Resolution of a single query against a sequence.

use crate::{Query, QueryKind, QueryParam, QueryResult};

/// Resolves `query` against `sequence`. See [`resolve`].
pub fn resolve_query<T: Clone>(sequence: &[T], query: &Query) -> QueryResult<T> {
    resolve(sequence, &query.kind, &query.param)
}

/// Resolves one lookup against `sequence`.
///
/// - `Positional` + `Index(i)`: `sequence[i]` for `0 <= i < len`, otherwise
///   `OutOfRange`. Negative indices do not count from the end.
/// - `Positional` + `Range(start, end)`: a half-open slice that never fails. Negative
///   bounds count from the end, bounds are clamped to `[0, len]`, and a reversed
///   range is empty.
/// - `Circular` with an index or range on an empty sequence: `NoData`.
/// - `Circular` + `Index(i)`: `sequence[i mod len]`, with a non-negative modulo.
/// - `Circular` + `Range(start, end)`: with `s = start mod len` and `e = end mod len`,
///   `sequence[s..e]` if `s < e`, otherwise `sequence[s..]` followed by
///   `sequence[..e]`. Note `s == e` yields the whole sequence rotated to start at `s`.
/// - `Malformed` parameter: `WrongFormat`. Unknown kind: `UnknownQueryType`.
///
/// Never panics.
pub fn resolve<T: Clone>(sequence: &[T], kind: &QueryKind, param: &QueryParam) -> QueryResult<T> {
    match kind {
        QueryKind::Positional => resolve_positional(sequence, param),
        QueryKind::Circular => resolve_circular(sequence, param),
        QueryKind::Unknown(_) => QueryResult::UnknownQueryType,
    }
}

fn resolve_positional<T: Clone>(sequence: &[T], param: &QueryParam) -> QueryResult<T> {
    match *param {
        QueryParam::Index(index) => usize::try_from(index)
            .ok()
            .and_then(|i| sequence.get(i))
            .map_or(QueryResult::OutOfRange, |v| QueryResult::Element(v.clone())),
        QueryParam::Range(start, end) => {
            let len = sequence.len();
            let start = slice_bound(start, len);
            let end = slice_bound(end, len);
            if start < end {
                QueryResult::Slice(sequence[start..end].to_vec())
            } else {
                QueryResult::Slice(Vec::new())
            }
        }
        QueryParam::Malformed(_) => QueryResult::WrongFormat,
    }
}

fn resolve_circular<T: Clone>(sequence: &[T], param: &QueryParam) -> QueryResult<T> {
    let len = sequence.len();
    match *param {
        QueryParam::Malformed(_) => QueryResult::WrongFormat,
        _ if sequence.is_empty() => QueryResult::NoData,
        QueryParam::Index(index) => QueryResult::Element(sequence[wrap(index, len)].clone()),
        QueryParam::Range(start, end) => {
            let start = wrap(start, len);
            let end = wrap(end, len);
            if start < end {
                QueryResult::Slice(sequence[start..end].to_vec())
            } else {
                let mut values = Vec::with_capacity(len - start + end);
                values.extend_from_slice(&sequence[start..]);
                values.extend_from_slice(&sequence[..end]);
                QueryResult::Slice(values)
            }
        }
    }
}

/// Non-negative `index mod len`. `len` must be non-zero.
fn wrap(index: i64, len: usize) -> usize {
    match i64::try_from(len) {
        Ok(len) => index.rem_euclid(len) as usize,
        // `len` exceeds every i64, so any non-negative index is already in range.
        Err(_) => {
            if index >= 0 {
                index as usize
            } else {
                len - index.unsigned_abs() as usize
            }
        }
    }
}

/// Normalizes a slice bound: negative values count from the end, then the result
/// is clamped to `[0, len]`.
fn slice_bound(bound: i64, len: usize) -> usize {
    if bound >= 0 {
        usize::try_from(bound).map_or(len, |b| b.min(len))
    } else {
        len.saturating_sub(usize::try_from(bound.unsigned_abs()).unwrap_or(usize::MAX))
    }
}
