fn main() {
    println!("Run `cargo test -p cyclic-contract` to execute buffer contract tests.");
}

#[cfg(test)]
mod tests {
    use cyclic_buffer::{BoundedFifo, BufferConfig, BufferError, Strategy};

    const STRATEGIES: [Strategy; 2] = [Strategy::Array, Strategy::Deque];

    /// Builds an empty buffer of the given strategy.
    fn build(strategy: Strategy, capacity: i64) -> Box<dyn BoundedFifo<i64>> {
        BufferConfig { capacity, strategy }
            .build()
            .unwrap_or_else(|e| panic!("failed to build {strategy:?} buffer: {e}"))
    }

    /// Deterministic, non-monotonic value sequence so order bugs can't hide
    /// behind sorted input.
    fn scrambled(n: usize) -> Vec<i64> {
        (0..n as i64).map(|i| (i * 7919) % 101 - 50).collect()
    }

    /// The last `capacity` items of `appended`, in insertion order.
    fn expected_window(appended: &[i64], capacity: usize) -> Vec<i64> {
        appended[appended.len().saturating_sub(capacity)..].to_vec()
    }

    /// Runs `check` for every strategy, capacity 1..=6 and 0..=20 appends.
    fn for_each_case(mut check: impl FnMut(Strategy, usize, &[i64], &dyn BoundedFifo<i64>)) {
        for strategy in STRATEGIES {
            for capacity in 1..=6usize {
                let values = scrambled(20);
                for n in 0..=values.len() {
                    let mut fifo = build(strategy, capacity as i64);
                    for &v in &values[..n] {
                        fifo.append(v);
                    }
                    check(strategy, capacity, &values[..n], &*fifo);
                }
            }
        }
    }

    // --- Testable properties ---

    #[test]
    fn contents_never_exceed_capacity() {
        for_each_case(|strategy, capacity, appended, fifo| {
            let contents = fifo.get_contents();
            assert!(contents.len() <= capacity, "{strategy:?}");
            assert_eq!(contents.len(), appended.len().min(capacity), "{strategy:?}");
            assert_eq!(fifo.len(), contents.len(), "{strategy:?}");
        });
    }

    #[test]
    fn fifo_overwrite_of_increasing_values() {
        for strategy in STRATEGIES {
            for capacity in 1..=5i64 {
                for k in 0..=12i64 {
                    let mut fifo = build(strategy, capacity);
                    for v in 0..capacity + k {
                        fifo.append(v);
                    }
                    let expected: Vec<i64> = (k..capacity + k).collect();
                    assert_eq!(
                        fifo.get_contents(),
                        expected,
                        "{strategy:?} capacity={capacity} k={k}"
                    );
                }
            }
        }
    }

    #[test]
    fn order_matches_last_insertions() {
        for_each_case(|strategy, capacity, appended, fifo| {
            assert_eq!(
                fifo.get_contents(),
                expected_window(appended, capacity),
                "{strategy:?} capacity={capacity} n={}",
                appended.len()
            );
        });
    }

    #[test]
    fn peeks_agree_with_contents() {
        for_each_case(|strategy, _, appended, fifo| {
            let contents = fifo.get_contents();
            if appended.is_empty() {
                assert_eq!(fifo.peek_newest(), Err(BufferError::EmptyBuffer));
                assert_eq!(fifo.peek_oldest(), Err(BufferError::EmptyBuffer));
            } else {
                assert_eq!(fifo.peek_newest().ok(), contents.last(), "{strategy:?}");
                assert_eq!(fifo.peek_oldest().ok(), contents.first(), "{strategy:?}");
            }
        });
    }

    #[test]
    fn strategies_are_indistinguishable() {
        let values = scrambled(40);
        let mut array = build(Strategy::Array, 4);
        let mut deque = build(Strategy::Deque, 4);
        for &v in &values {
            array.append(v);
            deque.append(v);
            assert_eq!(array.get_contents(), deque.get_contents());
            assert_eq!(array.peek_newest(), deque.peek_newest());
            assert_eq!(array.peek_oldest(), deque.peek_oldest());
            assert_eq!(array.is_full(), deque.is_full());
        }
    }

    #[test]
    fn fresh_buffer_peeks_fail() {
        for strategy in STRATEGIES {
            let fifo = build(strategy, 3);
            assert!(fifo.is_empty());
            assert_eq!(fifo.peek_newest(), Err(BufferError::EmptyBuffer));
            assert_eq!(fifo.peek_oldest(), Err(BufferError::EmptyBuffer));
            assert!(fifo.get_contents().is_empty());
        }
    }

    #[test]
    fn invalid_capacity_rejected() {
        for strategy in STRATEGIES {
            for capacity in [0, -1, i64::MIN] {
                let result = BufferConfig { capacity, strategy }.build::<i64>();
                assert_eq!(result.err(), Some(BufferError::InvalidCapacity(capacity)));
            }
        }
    }

    // --- Concrete scenarios ---

    #[test]
    fn scenario_wraparound() {
        for strategy in STRATEGIES {
            let mut fifo = build(strategy, 3);
            for v in 1..=5 {
                fifo.append(v);
            }
            assert_eq!(fifo.get_contents(), vec![3, 4, 5]);
            assert_eq!(fifo.peek_oldest(), Ok(&3));
            assert_eq!(fifo.peek_newest(), Ok(&5));

            fifo.append(6);
            assert_eq!(fifo.get_contents(), vec![4, 5, 6]);
        }
    }

    #[test]
    fn scenario_partial_fill() {
        for strategy in STRATEGIES {
            let mut fifo = build(strategy, 5);
            fifo.append(7);
            fifo.append(8);
            assert_eq!(fifo.get_contents(), vec![7, 8]);
            assert_eq!(fifo.peek_oldest(), Ok(&7));
            assert_eq!(fifo.peek_newest(), Ok(&8));
        }
    }

    #[test]
    fn returned_contents_are_independent() {
        for strategy in STRATEGIES {
            let mut fifo = build(strategy, 2);
            fifo.append(1);
            fifo.append(2);
            let mut contents = fifo.get_contents();
            contents.clear();
            assert_eq!(fifo.get_contents(), vec![1, 2]);
        }
    }
}
