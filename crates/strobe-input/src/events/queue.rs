use super::InputEvent;

/// A fixed-capacity FIFO. Overflow policy is drop-newest: once full, further
/// pushes are discarded and counted, never blocking the producer.
pub struct BoundedQueue<T> {
    items: Vec<T>,
    capacity: usize,
    dropped: u64,
}

impl<T> BoundedQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    /// Append an item. Returns false (and drops the item) when the queue is full.
    pub fn push(&mut self, item: T) -> bool {
        if self.items.len() < self.capacity {
            self.items.push(item);
            true
        } else {
            self.dropped += 1;
            log::trace!("bounded queue full (capacity {}), dropping item", self.capacity);
            false
        }
    }

    /// Remove and return the oldest item.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Drain all pending items in FIFO order, leaving the queue empty.
    pub fn drain(&mut self) -> std::vec::Drain<'_, T> {
        self.items.drain(..)
    }

    /// Iterate over pending items without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Discard all pending items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of pending items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no pending items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of items the queue holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total items discarded due to overflow since construction.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

/// The queue of raw backend events.
/// The host writes events into the queue; the runner drains them each frame.
pub type InputQueue = BoundedQueue<InputEvent>;
