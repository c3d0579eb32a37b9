use partitioned_sum::input::seeded_input;
use partitioned_sum::{
    accumulate_sum, partitioned_sum, partitioned_sum_with, reduce_sum, serial_sum, Partitions,
    Strategy, SumError,
};
use rand::random;

#[test]
fn test_partitioned_matches_serial() {
    for len in (0..10).chain(100..110).chain(10_000..10_010) {
        let v: Vec<i32> = (0..len).map(|_| random::<i32>() % 1_000).collect();
        let expected = serial_sum(&v);
        for workers in 1..10 {
            assert_eq!(partitioned_sum(&v, workers).expect("no worker panics"), expected);
        }
    }
}

#[test]
fn test_seven_elements() {
    let v = [1, 2, 3, 4, 5, 6, 7];
    let partial_sums: Vec<i64> = Partitions::new(v.len(), 3)
        .map(|p| serial_sum(&v[p.range()]))
        .collect();
    assert_eq!(partial_sums, vec![3, 7, 18]);
    assert_eq!(partitioned_sum(&v, 3).expect("no worker panics"), 28);
    assert_eq!(serial_sum(&v), 28);
}

#[test]
fn test_more_workers_than_elements() {
    let v = [-10, 10];
    assert_eq!(partitioned_sum(&v, 4).expect("no worker panics"), 0);
    let v = [-10, 11];
    assert_eq!(partitioned_sum(&v, 4).expect("no worker panics"), 1);
}

#[test]
fn test_empty_input() {
    for workers in 0..8 {
        assert_eq!(partitioned_sum(&[], workers).expect("no worker panics"), 0);
    }
}

#[test]
fn test_zero_workers_is_one_worker() {
    let v = seeded_input(1_000, -10..=10, 7);
    assert_eq!(
        partitioned_sum(&v, 0).expect("no worker panics"),
        partitioned_sum(&v, 1).expect("no worker panics")
    );
}

#[test]
fn test_idempotence() {
    let v = seeded_input(100_003, -10..=10, 42);
    let first = partitioned_sum(&v, 6).expect("no worker panics");
    let second = partitioned_sum(&v, 6).expect("no worker panics");
    assert_eq!(first, second);
}

#[test]
fn test_wide_accumulator() {
    // would overflow an i32 accumulator
    let v = vec![i32::MAX; 16];
    let expected = 16 * i64::from(i32::MAX);
    assert_eq!(serial_sum(&v), expected);
    assert_eq!(partitioned_sum(&v, 5).expect("no worker panics"), expected);
    // element width accumulations wrap
    let wrapped = i64::from((0..16).fold(0i32, |acc, _| acc.wrapping_add(i32::MAX)));
    assert_eq!(accumulate_sum(&v), wrapped);
    assert_eq!(reduce_sum(&v), wrapped);
}

#[test]
fn test_all_strategies_agree_on_small_values() {
    let v = seeded_input(250_000, -10..=10, 3);
    let expected = serial_sum(&v);
    for strategy in Strategy::ALL.iter() {
        assert_eq!(strategy.sum(&v, 4).expect("no worker panics"), expected);
    }
}

#[test]
fn test_worker_panic_is_reported() {
    let v: Vec<i32> = (0..100).collect();
    // worker 1 owns [25, 50)
    let result = partitioned_sum_with(&v, 4, |slice| {
        if slice.first() == Some(&25) {
            panic!("boom");
        }
        serial_sum(slice)
    });
    match result {
        Err(SumError::WorkerPanicked { worker }) => assert_eq!(worker, 1),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_every_worker_count_on_large_values() {
    let v = vec![i32::MAX; 1_024];
    let expected = serial_sum(&v);
    for workers in 0..40 {
        assert_eq!(partitioned_sum(&v, workers).expect("no worker panics"), expected);
    }
}

#[test]
fn test_many_more_workers_than_elements() {
    let v = [1, 2, 3, 4];
    assert_eq!(partitioned_sum(&v, 100).expect("no worker panics"), 10);
    assert_eq!(partitioned_sum(&v[..1], 1).expect("no worker panics"), 1);
}

#[test]
fn test_first_panicking_worker_is_reported() {
    let v: Vec<i32> = (0..100).collect();
    // workers 1 and 2 own [20, 40) and [40, 60)
    let result = partitioned_sum_with(&v, 5, |slice| {
        if slice.first() == Some(&20) || slice.first() == Some(&40) {
            panic!("boom");
        }
        serial_sum(slice)
    });
    match result {
        Err(SumError::WorkerPanicked { worker }) => assert_eq!(worker, 1),
        other => panic!("unexpected result {:?}", other),
    }
}
