use crate::error::Result;

/// Bounded FIFO that keeps the most recent `capacity` items.
///
/// Appending to a full buffer silently discards the oldest item. Both
/// [`RingBuffer`](crate::RingBuffer) and [`DequeRingBuffer`](crate::DequeRingBuffer)
/// implement this with identical observable behavior, so callers can pick a
/// strategy at runtime through [`BufferConfig`](crate::BufferConfig).
pub trait BoundedFifo<T: Clone> {
    /// Store `item` as the newest element, overwriting the oldest when full.
    fn append(&mut self, item: T);

    /// Copy of the retained elements, oldest first.
    fn get_contents(&self) -> Vec<T>;

    /// The most recently appended element.
    fn peek_newest(&self) -> Result<&T>;

    /// The oldest element still retained.
    fn peek_oldest(&self) -> Result<&T>;

    /// Number of elements currently stored.
    fn len(&self) -> usize;

    /// Maximum number of elements the buffer can hold.
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}
