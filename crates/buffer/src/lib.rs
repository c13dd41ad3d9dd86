//! Fixed-capacity, overwrite-on-full FIFO ring buffers.
//!
//! A buffer keeps the most recent `capacity` items. Appending is O(1) and
//! never fails; once full, each append discards the oldest item. Two
//! interchangeable strategies are provided behind the [`BoundedFifo`] trait:
//! [`RingBuffer`] (fixed storage, wrapping write cursor) and
//! [`DequeRingBuffer`] (bounded `VecDeque`).
//!
//! Buffers are not internally synchronized; wrap them in a `Mutex` to share
//! across threads.

pub mod buffer;
pub mod config;
pub mod deque;
pub mod error;
pub mod fifo;

pub use buffer::RingBuffer;
pub use config::{BufferConfig, Strategy};
pub use deque::DequeRingBuffer;
pub use error::{BufferError, Result};
pub use fifo::BoundedFifo;
