//! A min-priority queue keyed by payload, supporting removal of arbitrary entries.
//!
//! Backed by a [BinaryHeap] with lazy deletion: removing or re-enqueueing a payload only forgets
//! its live entry, and stale heap entries are skipped when popped. Insert and extract-min are
//! logarithmic, removal is constant time.
use fxhash::FxHashMap;
use num_traits::float::TotalOrder;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// Heap entries are compacted once stale ones outnumber live ones by this margin.
const STALE_SLACK: usize = 64;

struct SmallestPriorityHolder<N, P> {
    priority: P,
    sequence: u64,
    payload: N,
}

impl<N, P: Float + TotalOrder> Eq for SmallestPriorityHolder<N, P> {}

impl<N, P: Float + TotalOrder> PartialEq for SmallestPriorityHolder<N, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, P: Float + TotalOrder> PartialOrd for SmallestPriorityHolder<N, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, P: Float + TotalOrder> Ord for SmallestPriorityHolder<N, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed since BinaryHeap is a max-heap. Equal priorities pop in insertion order.
        match other.priority.total_cmp(&self.priority) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Min-priority queue where each payload is present at most once.
pub struct PriorityQueue<N, P> {
    heap: BinaryHeap<SmallestPriorityHolder<N, P>>,
    live: FxHashMap<N, u64>,
    next_sequence: u64,
}

impl<N, P> Default for PriorityQueue<N, P>
where
    N: Eq + Hash + Clone,
    P: Float + TotalOrder,
{
    fn default() -> Self {
        PriorityQueue::new()
    }
}

impl<N, P> PriorityQueue<N, P>
where
    N: Eq + Hash + Clone,
    P: Float + TotalOrder,
{
    pub fn new() -> PriorityQueue<N, P> {
        PriorityQueue {
            heap: BinaryHeap::new(),
            live: FxHashMap::default(),
            next_sequence: 0,
        }
    }

    /// Inserts `payload` with the given priority. If the payload is already enqueued its old entry
    /// is replaced, which is equivalent to [remove](Self::remove) followed by a fresh insert.
    pub fn enqueue(&mut self, payload: N, priority: P) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.live.insert(payload.clone(), sequence);
        self.heap.push(SmallestPriorityHolder {
            priority,
            sequence,
            payload,
        });
    }

    /// Removes and returns the entry with the smallest priority, or [None] if the queue is empty.
    pub fn dequeue_min(&mut self) -> Option<(N, P)> {
        while let Some(SmallestPriorityHolder {
            priority,
            sequence,
            payload,
        }) = self.heap.pop()
        {
            if self.live.get(&payload) == Some(&sequence) {
                self.live.remove(&payload);
                return Some((payload, priority));
            }
        }
        None
    }

    /// Removes the entry for `payload`. Returns whether it was present.
    pub fn remove(&mut self, payload: &N) -> bool {
        let removed = self.live.remove(payload).is_some();
        if self.heap.len() > 2 * self.live.len() + STALE_SLACK {
            let live = &self.live;
            self.heap
                .retain(|e| live.get(&e.payload) == Some(&e.sequence));
        }
        removed
    }

    pub fn contains(&self, payload: &N) -> bool {
        self.live.contains_key(payload)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.live.clear();
    }
}
