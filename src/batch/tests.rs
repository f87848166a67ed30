#![cfg(test)]

use std::cell::Cell;

use super::*;
use crate::outcome::Outcome::{self, Failure, Success};
use crate::util::panic::assert_panics;

fn sparse() -> Vec<Option<Outcome<i32, &'static str>>> {
    vec![
        Some(Success(1)),
        None,
        Some(Failure("e1")),
        Some(Success(2)),
        None,
        Some(Failure("e2")),
    ]
}

#[test]
fn test_all_collects_in_order() {
    let dense: Vec<Outcome<i32, &str>> = vec![Success(1), Success(2), Success(3)];
    assert_eq!(
        all(dense),
        Success(vec![1, 2, 3]),
        "An all-success sequence should reduce to every payload in order."
    );

    let gappy = vec![Some(Success(1)), None, Some(Success(3))];
    assert_eq!(
        all(gappy),
        Success::<_, &str>(vec![1, 3]),
        "Missing entries should be skipped without affecting the collected payloads."
    );

    let empty: Vec<Outcome<i32, &str>> = Vec::new();
    assert_eq!(
        all(empty),
        Success(vec![]),
        "An empty sequence should reduce to a Success of nothing."
    );
    assert_eq!(
        all(vec![None::<Outcome<i32, &str>>, None]),
        Success(vec![]),
        "An all-None sequence should reduce to a Success of nothing."
    );
}

#[test]
fn test_all_fails_fast() {
    let mixed: Vec<Outcome<i32, String>> =
        vec![Success(1), Failure("e1".to_string()), Success(3), Failure("e2".to_string())];
    assert_eq!(
        all(mixed),
        Failure("e1".to_string()),
        "The first failure in scan order should be returned as-is."
    );

    let visited = Cell::new(0);
    let counted = sparse().into_iter().inspect(|_| visited.set(visited.get() + 1));
    assert_eq!(all(counted), Failure("e1"));
    assert_eq!(
        visited.get(),
        3,
        "Scanning should stop at the first failure rather than draining the input."
    );
}

#[test]
fn test_first_prefers_any_success() {
    let late: Vec<Outcome<&str, &str>> = vec![Failure("e1"), Failure("e2"), Success("s")];
    assert_eq!(
        first(late),
        Success("s"),
        "The first success should be returned unmodified, however late it appears."
    );

    let none: Vec<Outcome<&str, &str>> = vec![Failure("e1"), Failure("e2")];
    assert_eq!(
        first(none),
        Failure(vec!["e1", "e2"]),
        "With no success, every failure payload should be collected in order."
    );

    let visited = Cell::new(0);
    let counted = [Some(Failure::<i32, _>("e1")), None, Some(Success(7)), Some(Failure("e2"))]
        .into_iter()
        .inspect(|_| visited.set(visited.get() + 1));
    assert_eq!(first(counted), Success(7));
    assert_eq!(
        visited.get(),
        3,
        "Scanning should stop at the first success rather than draining the input."
    );
}

#[test]
fn test_oks_and_errs_preserve_order() {
    assert_eq!(
        oks(sparse()),
        vec![1, 2],
        "oks should collect every success payload in original order."
    );
    assert_eq!(
        errs(sparse()),
        vec!["e1", "e2"],
        "errs should collect every failure payload in original order."
    );
}

#[test]
fn test_partition_matches_single_sided_collection() {
    let parts = partition(sparse());
    assert_eq!(
        parts.oks,
        oks(sparse()),
        "partition's success side should agree with oks."
    );
    assert_eq!(
        parts.errors,
        errs(sparse()),
        "partition's failure side should agree with errs."
    );

    let empty: Vec<Outcome<i32, &str>> = Vec::new();
    assert_eq!(partition(empty), Partition::new());
}

#[test]
fn test_partition_with_counts_raw_length() {
    let counted = partition_with(sparse());
    assert_eq!(
        counted.total, 6,
        "total should be the raw sequence length, missing entries included."
    );
    assert_eq!(counted.ok_count(), 2);
    assert_eq!(counted.error_count(), 2);
    assert_eq!(
        counted.clone().into_partition(),
        partition(sparse()),
        "Dropping the counts should leave exactly the partition."
    );
}

#[test]
fn test_analyze_counts() {
    let stats = analyze(sparse());
    assert_eq!(stats.ok_count, 2);
    assert_eq!(stats.error_count, 2);
    assert_eq!(stats.total, 6);
    assert!(stats.has_errors());
    assert!(!stats.is_empty());
    assert!(
        stats.ok_count + stats.error_count < stats.total,
        "Variant counts should fall short of total when entries are missing."
    );

    let dense: Vec<Outcome<i32, &str>> = vec![Success(1), Failure("e")];
    let stats = analyze(dense);
    assert_eq!(
        stats.ok_count + stats.error_count,
        stats.total,
        "Variant counts should sum to total for dense input."
    );

    let stats = analyze(Vec::<Outcome<i32, &str>>::new());
    assert!(stats.is_empty());
    assert!(!stats.has_errors());
}

#[test]
fn test_find_first_locates_both_sides_independently() {
    let scanned: Vec<Outcome<&str, &str>> =
        vec![Failure("e1"), Success("s1"), Failure("e2"), Success("s2")];
    let found = find_first(scanned);
    assert_eq!(
        found.first_success,
        Some((1, "s1")),
        "The first success should be reported with its index."
    );
    assert_eq!(
        found.first_failure,
        Some((0, "e1")),
        "The first failure should be reported with its index."
    );

    let visited = Cell::new(0);
    let counted = [
        Some(Failure::<&str, _>("e1")),
        Some(Success("s1")),
        Some(Failure("e2")),
        Some(Success("s2")),
    ]
    .into_iter()
    .inspect(|_| visited.set(visited.get() + 1));
    find_first(counted);
    assert_eq!(
        visited.get(),
        2,
        "Scanning should stop once both sides have been found."
    );

    let one_sided: Vec<Outcome<i32, &str>> = vec![Success(1), Success(2)];
    let found = find_first(one_sided);
    assert_eq!(found.first_success, Some((0, 1)));
    assert_eq!(
        found.first_failure, None,
        "A side that never appears should be reported as absent after a full pass."
    );

    assert_eq!(
        find_first(Vec::<Outcome<i32, &str>>::new()),
        FirstOfEach::default()
    );
}

#[test]
fn test_find_first_indexes_count_missing_entries() {
    let gappy = vec![None, None, Some(Success::<_, &str>("s"))];
    assert_eq!(
        find_first(gappy).first_success,
        Some((2, "s")),
        "Indices should be positions in the raw input, counting missing entries."
    );
}

#[test]
fn test_reduce_folds_both_variants_with_raw_indexes() {
    let totals: Vec<Outcome<i32, &str>> = vec![Success(5), Failure("x"), Success(10)];
    let sum = reduce(totals, 0, |acc, value, _| acc + value, |acc, _, _| acc);
    assert_eq!(sum, 15, "Failures should pass the accumulator through untouched.");

    let seen = reduce(
        sparse(),
        Vec::new(),
        |mut acc, value, index| {
            acc.push((index, format!("ok {value}")));
            acc
        },
        |mut acc, error, index| {
            acc.push((index, format!("err {error}")));
            acc
        },
    );
    assert_eq!(
        seen,
        vec![
            (0, "ok 1".to_string()),
            (2, "err e1".to_string()),
            (3, "ok 2".to_string()),
            (5, "err e2".to_string()),
        ],
        "Handlers should run in original order with raw positional indexes."
    );
}

#[test]
fn test_batch_operations_are_idempotent() {
    let input = sparse();
    assert_eq!(
        partition(input.clone()),
        partition(input.clone()),
        "Repeated partition of equal input should be structurally equal."
    );
    assert_eq!(analyze(input.clone()), analyze(input.clone()));
    assert_eq!(all(input.clone()), all(input.clone()));
    assert_eq!(find_first(input.clone()), find_first(input));
}

#[cfg(feature = "future")]
mod async_ops {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::task::Poll;

    use futures::FutureExt;
    use futures::executor::block_on;
    use futures::future::{self, LocalBoxFuture, ready};

    use crate::batch::{all_async, all_settled_async};
    use crate::outcome::Outcome::{self, Failure, Success};
    use crate::util::panic::assert_panics;

    #[test]
    fn test_all_async_reduces_like_all() {
        let pending = vec![ready(Success::<_, &str>(1)), ready(Success(2))];
        assert_eq!(
            block_on(all_async(pending)),
            Success(vec![1, 2]),
            "Resolved successes should be collected in input order."
        );

        let pending = vec![
            Some(ready(Success(1))),
            None,
            Some(ready(Failure("e1"))),
            Some(ready(Failure("e2"))),
        ];
        assert_eq!(
            block_on(all_async::<i32, &str, _, future::Ready<Outcome<i32, &str>>>(pending)),
            Failure("e1"),
            "The fail-fast reduction should apply to the resolved sequence."
        );

        let pending: Vec<Option<future::Ready<Outcome<i32, &str>>>> = vec![None, None];
        assert_eq!(
            block_on(all_async::<i32, &str, _, future::Ready<Outcome<i32, &str>>>(pending)),
            Success(vec![])
        );
    }

    #[test]
    fn test_all_async_starts_every_future_before_awaiting() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let slow = {
            let log = Rc::clone(&log);
            let mut polls = 0;
            future::poll_fn(move |cx| {
                log.borrow_mut().push("slow");
                polls += 1;
                if polls < 2 {
                    cx.waker().wake_by_ref();
                    Poll::Pending
                } else {
                    Poll::Ready(Success::<i32, &'static str>(1))
                }
            })
        };
        let fast = {
            let log = Rc::clone(&log);
            future::poll_fn(move |_| {
                log.borrow_mut().push("fast");
                Poll::Ready(Success::<i32, &'static str>(2))
            })
        };
        let pending: Vec<LocalBoxFuture<'_, Outcome<i32, &str>>> =
            vec![slow.boxed_local(), fast.boxed_local()];

        assert_eq!(block_on(all_async(pending)), Success(vec![1, 2]));
        assert_eq!(
            &log.borrow()[..2],
            ["slow", "fast"],
            "The second future should be started before the first completes."
        );
    }

    #[test]
    fn test_all_settled_async_never_short_circuits() {
        let pending = vec![
            Some(ready(Failure("e1"))),
            None,
            Some(ready(Success(1))),
            Some(ready(Failure("e2"))),
        ];
        let parts =
            block_on(all_settled_async::<i32, &str, _, future::Ready<Outcome<i32, &str>>>(pending));
        assert_eq!(
            parts.oks,
            vec![1],
            "A modeled failure should not disturb the other resolved Outcomes."
        );
        assert_eq!(parts.errors, vec!["e1", "e2"]);
    }

    // Per-item capture covers modeled failures only. A panicking future takes
    // the whole aggregation down with it, settled or not.
    #[test]
    fn test_panicking_future_aborts_the_whole_aggregation() {
        async fn settle() -> Outcome<i32, &'static str> {
            Success(1)
        }
        async fn explode() -> Outcome<i32, &'static str> {
            panic!("worker gave up")
        }

        assert_panics!(
            {
                let pending: Vec<LocalBoxFuture<'_, Outcome<i32, &str>>> =
                    vec![settle().boxed_local(), explode().boxed_local()];
                let _ = block_on(all_settled_async(pending));
            },
            "A panicking future should abort all_settled_async entirely."
        );

        assert_panics!(
            {
                let pending: Vec<LocalBoxFuture<'_, Outcome<i32, &str>>> =
                    vec![settle().boxed_local(), explode().boxed_local()];
                let _ = block_on(all_async(pending));
            },
            "A panicking future should abort all_async entirely."
        );
    }
}
