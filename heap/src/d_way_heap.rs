use crate::error::{ConfigError, HeapError};

pub type Key = i64;

/// Raw, signed heap parameters as they arrive from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    pub children_exponent: i64,
    pub capacity: i64,
}

impl HeapConfig {
    pub fn new(children_exponent: i64, capacity: i64) -> Self {
        HeapConfig {
            children_exponent,
            capacity,
        }
    }

    /// Checks the parameters and converts them to the typed form taken by
    /// [`PowerOfTwoMaxHeap::new`].
    pub fn validate(&self) -> Result<(u32, usize), ConfigError> {
        if self.children_exponent < 0 {
            return Err(ConfigError::NegativeExponent(self.children_exponent));
        }
        if self.capacity < 0 {
            return Err(ConfigError::NegativeCapacity(self.capacity));
        }
        let exponent = u32::try_from(self.children_exponent)
            .ok()
            .filter(|k| *k < usize::BITS)
            .ok_or(ConfigError::ExponentTooLarge(self.children_exponent))?;
        let capacity = usize::try_from(self.capacity)
            .map_err(|_| ConfigError::CapacityTooLarge(self.capacity as u64))?;
        Ok((exponent, capacity))
    }

    pub fn build(&self) -> Result<PowerOfTwoMaxHeap, HeapError> {
        let (exponent, capacity) = self.validate()?;
        PowerOfTwoMaxHeap::new(exponent, capacity)
    }
}

/// A max-heap on an implicit array where every internal node has `2^k`
/// children.
///
/// Storage is allocated once at construction and never grows: inserting into
/// a full heap is rejected with [`HeapError::CapacityExceeded`]. With `k = 0`
/// every node has a single child and the live keys form a descending run.
#[derive(Debug, Clone)]
pub struct PowerOfTwoMaxHeap {
    exponent: u32,
    fanout: usize,
    data: Box<[Key]>,
    len: usize,
}

impl PowerOfTwoMaxHeap {
    pub fn new(children_exponent: u32, capacity: usize) -> Result<Self, HeapError> {
        if children_exponent >= usize::BITS {
            return Err(ConfigError::ExponentTooLarge(children_exponent as i64).into());
        }
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| ConfigError::CapacityTooLarge(capacity as u64))?;
        data.resize(capacity, 0);
        Ok(PowerOfTwoMaxHeap {
            exponent: children_exponent,
            fanout: 1 << children_exponent,
            data: data.into_boxed_slice(),
            len: 0,
        })
    }

    /// Builds a heap holding `keys`, restoring heap order bottom-up.
    pub fn from_keys(
        children_exponent: u32,
        capacity: usize,
        keys: &[Key],
    ) -> Result<Self, HeapError> {
        if keys.len() > capacity {
            return Err(ConfigError::TooManyKeys {
                len: keys.len(),
                capacity,
            }
            .into());
        }
        let mut h = Self::new(children_exponent, capacity)?;
        h.data[..keys.len()].copy_from_slice(keys);
        h.len = keys.len();
        if h.len > 1 {
            for i in (0..=h.parent(h.len - 1)).rev() {
                let v = h.data[i];
                h.sift_down(i, v);
            }
        }
        Ok(h)
    }

    // i > 0
    fn parent(&self, i: usize) -> usize {
        (i - 1) >> self.exponent
    }

    // (i << k) + 1, or None once the index no longer fits
    fn first_child(&self, i: usize) -> Option<usize> {
        i.checked_mul(self.fanout)?.checked_add(1)
    }

    /// Moves the hole at `i` towards the root until `v` fits, then writes `v`.
    fn sift_up(&mut self, mut i: usize, v: Key) {
        while i > 0 {
            let pi = self.parent(i);
            if self.data[pi] >= v {
                break;
            }
            self.data[i] = self.data[pi];
            i = pi;
        }
        self.data[i] = v;
    }

    fn highest_priority_child(&self, i: usize) -> Option<usize> {
        let first = self.first_child(i).filter(|&c| c < self.len)?;
        let end = first.saturating_add(self.fanout).min(self.len);
        let mut ret = first;
        for ci in first + 1..end {
            // strict comparison keeps the lowest index on ties
            if self.data[ci] > self.data[ret] {
                ret = ci;
            }
        }
        Some(ret)
    }

    /// Moves the hole at `i` towards the leaves until `v` fits, then writes `v`.
    fn sift_down(&mut self, mut i: usize, v: Key) {
        while let Some(ci) = self.highest_priority_child(i) {
            if self.data[ci] <= v {
                break;
            }
            self.data[i] = self.data[ci];
            i = ci;
        }
        self.data[i] = v;
    }

    pub fn insert(&mut self, value: Key) -> Result<(), HeapError> {
        if self.is_full() {
            return Err(HeapError::CapacityExceeded {
                value,
                capacity: self.capacity(),
            });
        }
        self.sift_up(self.len, value);
        self.len += 1;
        debug_assert!(self.is_heap());
        Ok(())
    }

    pub fn pop_max(&mut self) -> Result<Key, HeapError> {
        if self.len == 0 {
            return Err(HeapError::Empty);
        }
        let max = self.data[0];
        self.len -= 1;
        if self.len > 0 {
            let last = self.data[self.len];
            self.sift_down(0, last);
        }
        debug_assert!(self.is_heap());
        Ok(max)
    }

    pub fn peek(&self) -> Option<Key> {
        self.snapshot().first().copied()
    }

    /// Live keys in array order.
    pub fn snapshot(&self) -> &[Key] {
        &self.data[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.data.len()
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn fanout(&self) -> usize {
        self.fanout
    }

    pub fn children_exponent(&self) -> u32 {
        self.exponent
    }

    /// Whether every live key is `>=` each of its live children.
    pub fn is_heap(&self) -> bool {
        (1..self.len).all(|c| self.data[self.parent(c)] >= self.data[c])
    }
}
