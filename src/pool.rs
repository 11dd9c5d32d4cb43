// Ordered candidate cells with O(1) membership, shared by the deployment
// planner and the targeting logic. Removal is lazy: a removed index keeps
// its queue slot and is skipped when it surfaces on pop.

use alloc::collections::VecDeque;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::BoardSet;

/// A FIFO of cell indices where front means highest priority.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    queue: VecDeque<u32>,
    members: BoardSet,
}

impl CandidatePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live candidates.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` when no live candidates remain.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if `index` is a live candidate.
    pub fn contains(&self, index: u32) -> bool {
        self.members.contains(index)
    }

    /// Append `index` with the lowest priority. No-op if already present.
    pub fn push_back(&mut self, index: u32) {
        if !self.members.contains(index) {
            self.members.insert(index);
            self.queue.push_back(index);
        }
    }

    /// Make `index` the next candidate. No-op if already present anywhere
    /// in the pool, so repeated inserts never duplicate.
    pub fn push_front(&mut self, index: u32) {
        if !self.members.contains(index) {
            self.members.insert(index);
            self.queue.push_front(index);
        }
    }

    /// Drop `index` from the pool. Returns `true` if it was live. The queue
    /// entry stays behind until pop walks over it.
    pub fn remove(&mut self, index: u32) -> bool {
        self.members.remove(index)
    }

    /// Take the highest-priority live candidate, skipping stale entries.
    pub fn pop_front(&mut self) -> Option<u32> {
        while let Some(index) = self.queue.pop_front() {
            if self.members.remove(index) {
                return Some(index);
            }
        }
        None
    }

    /// Drop every candidate.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.members = BoardSet::new();
    }

    /// Live candidates in priority order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        let members = self.members;
        self.queue.iter().copied().filter(move |&i| members.contains(i))
    }

    /// Shuffle the live candidates into a fresh uniform order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let members = self.members;
        self.queue.retain(|&i| members.contains(i));
        self.queue.make_contiguous().shuffle(rng);
    }
}
