use std::collections::VecDeque;

use crate::error::{BufferError, Result, check_capacity};
use crate::fifo::BoundedFifo;

/// Fixed-capacity circular buffer backed by a `VecDeque`.
///
/// When the buffer is full, the front (oldest) element is popped before each
/// append. Iteration order is oldest → newest.
#[derive(Debug, Clone)]
pub struct DequeRingBuffer<T> {
    buf: VecDeque<T>,
    capacity: usize,
}

impl<T> DequeRingBuffer<T> {
    /// Create an empty deque buffer holding at most `capacity` elements.
    ///
    /// Fails with [`BufferError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = check_capacity(capacity)?;
        tracing::debug!(capacity, "deque ring buffer created");
        Ok(Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append a value, evicting the oldest entry when at capacity.
    pub fn append(&mut self, item: T) {
        if self.buf.len() == self.capacity {
            tracing::trace!("evicting oldest entry");
            self.buf.pop_front();
        }
        self.buf.push_back(item);
    }

    /// The most recently appended value.
    pub fn peek_newest(&self) -> Result<&T> {
        self.buf.back().ok_or(BufferError::EmptyBuffer)
    }

    /// The oldest value still retained.
    pub fn peek_oldest(&self) -> Result<&T> {
        self.buf.front().ok_or(BufferError::EmptyBuffer)
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer contains no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Maximum number of elements the buffer can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the buffer is at full capacity.
    pub fn is_full(&self) -> bool {
        self.buf.len() == self.capacity
    }
}

impl<T: Clone> DequeRingBuffer<T> {
    /// Copy of the retained elements, oldest first.
    pub fn get_contents(&self) -> Vec<T> {
        self.buf.iter().cloned().collect()
    }
}

impl<T: Clone> BoundedFifo<T> for DequeRingBuffer<T> {
    fn append(&mut self, item: T) {
        DequeRingBuffer::append(self, item);
    }

    fn get_contents(&self) -> Vec<T> {
        DequeRingBuffer::get_contents(self)
    }

    fn peek_newest(&self) -> Result<&T> {
        DequeRingBuffer::peek_newest(self)
    }

    fn peek_oldest(&self) -> Result<&T> {
        DequeRingBuffer::peek_oldest(self)
    }

    fn len(&self) -> usize {
        DequeRingBuffer::len(self)
    }

    fn capacity(&self) -> usize {
        DequeRingBuffer::capacity(self)
    }
}
