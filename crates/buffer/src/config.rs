//! Buffer construction settings.
//!
//! The capacity is kept signed so a settings file can express (and have
//! rejected) a zero or negative request instead of failing to parse.

use serde::{Deserialize, Serialize};

use crate::buffer::RingBuffer;
use crate::deque::DequeRingBuffer;
use crate::error::{BufferError, Result};
use crate::fifo::BoundedFifo;

/// Which storage strategy backs the buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Fixed storage with a wrapping write cursor ([`RingBuffer`]).
    #[default]
    Array,
    /// Bounded `VecDeque` ([`DequeRingBuffer`]).
    Deque,
}

/// Settings for constructing a bounded FIFO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferConfig {
    /// Maximum number of retained items.
    #[serde(default = "default_capacity")]
    pub capacity: i64,

    #[serde(default)]
    pub strategy: Strategy,
}

fn default_capacity() -> i64 {
    10
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            strategy: Strategy::default(),
        }
    }
}

impl BufferConfig {
    /// The configured capacity, if it is a positive integer.
    pub fn validated_capacity(&self) -> Result<usize> {
        match usize::try_from(self.capacity) {
            Ok(capacity) if capacity > 0 => Ok(capacity),
            _ => {
                tracing::warn!(capacity = self.capacity, "rejected buffer capacity");
                Err(BufferError::InvalidCapacity(self.capacity))
            }
        }
    }

    /// Construct an empty buffer using the configured strategy.
    pub fn build<T: Clone + 'static>(&self) -> Result<Box<dyn BoundedFifo<T>>> {
        let capacity = self.validated_capacity()?;
        Ok(match self.strategy {
            Strategy::Array => Box::new(RingBuffer::new(capacity)?),
            Strategy::Deque => Box::new(DequeRingBuffer::new(capacity)?),
        })
    }
}
