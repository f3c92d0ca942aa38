//! Ready queue.

use std::collections::HashSet;

/// Processes that have arrived and are waiting for the CPU.
///
/// Keeps insertion order (HRRN breaks ratio ties by it) and an id set for
/// constant-time membership checks.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    order: Vec<u32>,
    members: HashSet<u32>,
}

impl ReadyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `pid`. Returns `false` if it was already queued.
    pub fn push(&mut self, pid: u32) -> bool {
        if !self.members.insert(pid) {
            return false;
        }
        self.order.push(pid);
        true
    }

    /// Removes `pid`, preserving the order of the others.
    pub fn remove(&mut self, pid: u32) -> bool {
        if !self.members.remove(&pid) {
            return false;
        }
        self.order.retain(|&p| p != pid);
        true
    }

    /// Whether `pid` is queued.
    pub fn contains(&self, pid: u32) -> bool {
        self.members.contains(&pid)
    }

    /// Queued ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
