use seqlookup_query::{Query, QueryKind, QueryParam, QueryResult, Sequence, resolve, resolve_query};

fn random_sequence(len: usize) -> Sequence<i64> {
    (0..len).map(|_| fastrand::i64(-1000..1000)).collect()
}

fn random_param(len: usize) -> i64 {
    let bound = 3 * len as i64 + 3;
    fastrand::i64(-bound..=bound)
}

#[test]
fn test_positional_index_matches_direct_access() {
    fastrand::seed(2985745485);
    for len in 0..40 {
        let seq = random_sequence(len);
        for _ in 0..50 {
            let i = random_param(len);
            let expected = if i >= 0 && (i as usize) < len {
                QueryResult::Element(seq[i as usize])
            } else {
                QueryResult::OutOfRange
            };
            assert_eq!(resolve_query(&seq, &Query::positional(i)), expected, "len={len} i={i}");
        }
    }
}

#[test]
fn test_circular_index_uses_non_negative_modulo() {
    fastrand::seed(17);
    for len in 0..40 {
        let seq = random_sequence(len);
        for _ in 0..50 {
            let i = random_param(len);
            let res = resolve_query(&seq, &Query::circular(i));
            if len == 0 {
                assert_eq!(res, QueryResult::NoData);
            } else {
                let idx = i.rem_euclid(len as i64) as usize;
                assert_eq!(res, QueryResult::Element(seq[idx]), "len={len} i={i}");
            }
        }
    }
}

#[test]
fn test_circular_range_matches_rotation_formula() {
    fastrand::seed(99);
    for len in 1..30 {
        let seq = random_sequence(len);
        for _ in 0..50 {
            let (start, end) = (random_param(len), random_param(len));
            let s = start.rem_euclid(len as i64) as usize;
            let e = end.rem_euclid(len as i64) as usize;
            let expected: Vec<i64> = if s < e {
                seq[s..e].to_vec()
            } else {
                seq[s..].iter().chain(&seq[..e]).copied().collect()
            };
            assert_eq!(
                resolve_query(&seq, &Query::circular((start, end))),
                QueryResult::Slice(expected),
                "len={len} start={start} end={end}"
            );
        }
    }
}

#[test]
fn test_positional_range_never_reports_out_of_range() {
    fastrand::seed(5);
    for len in 0..30 {
        let seq = random_sequence(len);
        for _ in 0..50 {
            let start = fastrand::i64(0..=2 * len as i64 + 1);
            let end = fastrand::i64(0..=2 * len as i64 + 1);
            let (s, e) = ((start as usize).min(len), (end as usize).min(len));
            let expected = if s < e { seq[s..e].to_vec() } else { Vec::new() };
            assert_eq!(
                resolve_query(&seq, &Query::positional((start, end))),
                QueryResult::Slice(expected)
            );
        }
    }
}

#[test]
fn test_malformed_and_unknown() {
    let seq = Sequence::from(vec![10, 20, 30]);
    for param in [
        QueryParam::from(vec![1]),
        QueryParam::from(vec![1, 2, 3]),
        "abc".parse().unwrap(),
    ] {
        assert_eq!(resolve(&seq, &QueryKind::Positional, &param), QueryResult::WrongFormat);
        assert_eq!(resolve(&seq, &QueryKind::Circular, &param), QueryResult::WrongFormat);
        assert_eq!(
            resolve(&seq, &"bogus".parse().unwrap(), &param),
            QueryResult::UnknownQueryType
        );
    }
}

#[test]
fn test_concrete_scenarios() {
    let seq = Sequence::one_based(5);
    assert_eq!(resolve_query(&seq, &Query::positional(2i64)), QueryResult::Element(3));
    assert_eq!(resolve_query(&seq, &Query::positional(10i64)), QueryResult::OutOfRange);
    assert_eq!(resolve_query(&seq, &Query::circular(7i64)), QueryResult::Element(3));
    assert_eq!(
        resolve_query(&seq, &Query::circular((3i64, 1i64))),
        QueryResult::Slice(vec![4, 5, 1])
    );
    assert_eq!(
        resolve_query(&Sequence::<i64>::empty(), &Query::circular(5i64)),
        QueryResult::NoData
    );
}

#[test]
fn test_non_copy_elements() {
    let seq: Sequence<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    assert_eq!(
        resolve_query(&seq, &Query::circular((2i64, 1i64))),
        QueryResult::Slice(vec!["c".to_string(), "a".to_string()])
    );
}
