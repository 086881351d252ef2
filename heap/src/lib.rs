//! A fixed-capacity max-heap of integer keys where every internal node has
//! exactly `2^k` children.
//!
//! ```rust
//! use pow2_heap::PowerOfTwoMaxHeap;
//!
//! let mut heap = PowerOfTwoMaxHeap::new(2, 8).unwrap();
//! for v in [10, 20, 15, 30] {
//!     heap.insert(v).unwrap();
//! }
//! assert_eq!(heap.fanout(), 4);
//! assert_eq!(heap.pop_max(), Ok(30));
//! assert_eq!(heap.peek(), Some(20));
//! ```

pub mod d_way_heap;
pub mod error;

pub use d_way_heap::{HeapConfig, Key, PowerOfTwoMaxHeap};
pub use error::{ConfigError, HeapError};
