use thiserror::Error;

use crate::d_way_heap::Key;

/// Reasons a heap cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("children exponent must be non-negative, got {0}")]
    NegativeExponent(i64),
    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),
    #[error("children exponent {0} is too large, 2^{0} children do not fit in a usize")]
    ExponentTooLarge(i64),
    #[error("cannot allocate storage for capacity {0}")]
    CapacityTooLarge(u64),
    #[error("{len} initial keys do not fit in capacity {capacity}")]
    TooManyKeys { len: usize, capacity: usize },
}

/// Errors reported by heap operations. None of them leave the heap modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("invalid heap configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("Heap is full, cannot insert {value}")]
    CapacityExceeded { value: Key, capacity: usize },
    #[error("Heap is empty, cannot pop max.")]
    Empty,
}
