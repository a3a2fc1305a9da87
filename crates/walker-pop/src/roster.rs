//! `WalkerRoster` — the live set and black-list of managed walker handles.
//!
//! Both sequences need O(1) append and O(1) swap-remove-by-index; order
//! within a sequence carries no meaning, but indices must stay stable within
//! a single tick so the sweep cursor can address the element it just
//! inspected.  Every state transition removes a handle from one sequence
//! before inserting it into the other, so a handle is never present in both.

/// The two sequences of managed walker handles.
pub struct WalkerRoster<W> {
    live:       Vec<W>,
    black_list: Vec<W>,
}

impl<W: Copy + PartialEq> WalkerRoster<W> {
    /// Create a roster with live-set capacity reserved for `capacity`
    /// walkers.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            live:       Vec::with_capacity(capacity),
            black_list: Vec::new(),
        }
    }

    #[inline]
    pub fn live(&self) -> &[W] {
        &self.live
    }

    #[inline]
    pub fn black_list(&self) -> &[W] {
        &self.black_list
    }

    pub fn live_len(&self) -> usize {
        self.live.len()
    }

    pub fn black_list_len(&self) -> usize {
        self.black_list.len()
    }

    /// Add a freshly spawned walker to the live set.
    pub fn add_live(&mut self, walker: W) {
        debug_assert!(!self.live.contains(&walker));
        debug_assert!(!self.black_list.contains(&walker));
        self.live.push(walker);
    }

    /// Remove the live walker at `idx` (swap-remove; the last element takes
    /// its place).
    pub fn swap_remove_live(&mut self, idx: usize) -> W {
        self.live.swap_remove(idx)
    }

    /// Remove the black-listed walker at `idx`.
    pub fn swap_remove_black_listed(&mut self, idx: usize) -> W {
        self.black_list.swap_remove(idx)
    }

    /// Move the live walker at `idx` onto the black-list.
    pub fn black_list_from_live(&mut self, idx: usize) -> W {
        let walker = self.live.swap_remove(idx);
        self.black_list.push(walker);
        walker
    }

    /// Move the black-listed walker at `idx` back to the live set.
    pub fn rehabilitate(&mut self, idx: usize) -> W {
        let walker = self.black_list.swap_remove(idx);
        self.live.push(walker);
        walker
    }
}
