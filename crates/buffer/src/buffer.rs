use crate::error::{BufferError, Result, check_capacity};
use crate::fifo::BoundedFifo;

/// Fixed-capacity circular buffer with manual index arithmetic.
///
/// Storage grows by pushing until `capacity` slots exist, after which every
/// append overwrites the slot under the write cursor. Slots that were never
/// written do not exist, so `T` needs no placeholder value.
///
/// Invariants: `head < capacity` and `buf.len() <= capacity`. While the
/// buffer is filling, `head == buf.len() % capacity`; once full, `head`
/// points at the oldest element, which is also the next one overwritten.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    buf: Vec<T>,
    capacity: usize,
    head: usize,
}

impl<T> RingBuffer<T> {
    /// Create an empty ring buffer holding at most `capacity` elements.
    ///
    /// Fails with [`BufferError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = check_capacity(capacity)?;
        tracing::debug!(capacity, "ring buffer created");
        Ok(Self {
            buf: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        })
    }

    /// Append `item` as the newest element, overwriting the oldest when full.
    pub fn append(&mut self, item: T) {
        if self.buf.len() < self.capacity {
            self.buf.push(item);
        } else {
            tracing::trace!(slot = self.head, "overwriting oldest entry");
            self.buf[self.head] = item;
        }
        self.head = (self.head + 1) % self.capacity;
    }

    /// The most recently appended element.
    pub fn peek_newest(&self) -> Result<&T> {
        if self.buf.is_empty() {
            return Err(BufferError::EmptyBuffer);
        }
        // `head - 1` modulo capacity without going below zero.
        let idx = (self.head + self.capacity - 1) % self.capacity;
        Ok(&self.buf[idx])
    }

    /// The oldest element still retained.
    pub fn peek_oldest(&self) -> Result<&T> {
        if self.buf.is_empty() {
            return Err(BufferError::EmptyBuffer);
        }
        if self.is_full() {
            Ok(&self.buf[self.head])
        } else {
            Ok(&self.buf[0])
        }
    }

    /// Iterate from oldest to newest without copying.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (older, newer) = if self.is_full() {
            (&self.buf[self.head..], &self.buf[..self.head])
        } else {
            (&self.buf[..], &self.buf[..0])
        };
        older.iter().chain(newer)
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

impl<T: Clone> RingBuffer<T> {
    /// Copy of the retained elements, oldest first.
    ///
    /// Before the first wraparound the storage is already in order. Once full,
    /// the order starts at the write cursor and wraps back to index zero.
    pub fn get_contents(&self) -> Vec<T> {
        if !self.is_full() {
            return self.buf.clone();
        }
        let mut out = Vec::with_capacity(self.capacity);
        out.extend_from_slice(&self.buf[self.head..]);
        out.extend_from_slice(&self.buf[..self.head]);
        out
    }
}

impl<T: Clone> BoundedFifo<T> for RingBuffer<T> {
    fn append(&mut self, item: T) {
        RingBuffer::append(self, item);
    }

    fn get_contents(&self) -> Vec<T> {
        RingBuffer::get_contents(self)
    }

    fn peek_newest(&self) -> Result<&T> {
        RingBuffer::peek_newest(self)
    }

    fn peek_oldest(&self) -> Result<&T> {
        RingBuffer::peek_oldest(self)
    }

    fn len(&self) -> usize {
        RingBuffer::len(self)
    }

    fn capacity(&self) -> usize {
        RingBuffer::capacity(self)
    }
}
