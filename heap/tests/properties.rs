//! Property-based tests using proptest
//!
//! Random operation sequences are replayed against the heap and a plain
//! `Vec` model; heap order and the model's multiset must agree after every step.

use pow2_heap::{HeapError, Key, PowerOfTwoMaxHeap};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(Key),
    Pop,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-100i64..100).prop_map(Op::Insert),
        2 => Just(Op::Pop),
    ]
}

fn sorted_desc(mut v: Vec<Key>) -> Vec<Key> {
    v.sort_by(|a, b| b.cmp(a));
    v
}

fn heap_order_holds(h: &PowerOfTwoMaxHeap) -> bool {
    let d = h.fanout();
    let s = h.snapshot();
    (0..s.len()).all(|i| {
        (1..=d)
            .filter_map(|j| i.checked_mul(d)?.checked_add(j))
            .take_while(|&c| c < s.len())
            .all(|c| s[i] >= s[c])
    })
}

fn run_ops(k: u32, cap: usize, ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut heap = PowerOfTwoMaxHeap::new(k, cap).unwrap();
    let mut model: Vec<Key> = Vec::new();
    let mut last_pop: Option<Key> = None;

    for op in ops {
        let before = heap.snapshot().to_vec();
        match op {
            Op::Insert(v) => match heap.insert(v) {
                Ok(()) => {
                    model.push(v);
                    last_pop = None;
                }
                Err(e) => {
                    prop_assert_eq!(model.len(), cap);
                    prop_assert_eq!(e, HeapError::CapacityExceeded { value: v, capacity: cap });
                    prop_assert_eq!(heap.snapshot(), &before[..]);
                }
            },
            Op::Pop => match heap.pop_max() {
                Ok(v) => {
                    let max = *model.iter().max().unwrap();
                    prop_assert_eq!(v, max);
                    let pos = model.iter().position(|&m| m == v).unwrap();
                    model.swap_remove(pos);
                    if let Some(prev) = last_pop {
                        prop_assert!(v <= prev);
                    }
                    last_pop = Some(v);
                }
                Err(e) => {
                    prop_assert!(model.is_empty());
                    prop_assert_eq!(e, HeapError::Empty);
                    prop_assert!(heap.snapshot().is_empty());
                }
            },
        }

        prop_assert!(heap_order_holds(&heap));
        prop_assert!(heap.is_heap());
        prop_assert_eq!(heap.len(), model.len());
        prop_assert!(heap.len() <= heap.capacity());
        prop_assert_eq!(sorted_desc(heap.snapshot().to_vec()), sorted_desc(model.clone()));
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_random_ops_keep_invariants(
        k in 0u32..5,
        cap in 0usize..40,
        ops in prop::collection::vec(op(), 0..200),
    ) {
        run_ops(k, cap, ops)?;
    }

    #[test]
    fn test_sort_law(values in prop::collection::vec(any::<Key>(), 0..100)) {
        let expected = sorted_desc(values.clone());
        for k in 0..5 {
            let mut heap = PowerOfTwoMaxHeap::new(k, values.len()).unwrap();
            for &v in &values {
                heap.insert(v).unwrap();
            }
            let mut popped = Vec::new();
            while let Ok(v) = heap.pop_max() {
                popped.push(v);
            }
            prop_assert_eq!(&popped, &expected);
        }
    }

    #[test]
    fn test_from_keys_matches_inserts(
        k in 0u32..5,
        values in prop::collection::vec(-50i64..50, 0..60),
    ) {
        let mut heap = PowerOfTwoMaxHeap::from_keys(k, values.len() + 3, &values).unwrap();
        prop_assert!(heap_order_holds(&heap));
        let mut popped = Vec::new();
        while let Ok(v) = heap.pop_max() {
            popped.push(v);
        }
        prop_assert_eq!(popped, sorted_desc(values));
    }

    #[test]
    fn test_full_heap_rejects(k in 0u32..5, values in prop::collection::vec(any::<Key>(), 1..30), extra in any::<Key>()) {
        let mut heap = PowerOfTwoMaxHeap::new(k, values.len()).unwrap();
        for &v in &values {
            heap.insert(v).unwrap();
        }
        let before = heap.snapshot().to_vec();
        prop_assert!(heap.insert(extra).is_err());
        prop_assert_eq!(heap.snapshot(), &before[..]);
        prop_assert_eq!(heap.len(), values.len());
    }
}

#[test]
fn test_unary_is_descending_prefix() {
    let mut heap = PowerOfTwoMaxHeap::new(0, 8).unwrap();
    for v in [5, 1, 8, 3, 8, 2, 7, 6] {
        heap.insert(v).unwrap();
    }
    assert_eq!(heap.snapshot(), &[8, 8, 7, 6, 5, 3, 2, 1]);
}
