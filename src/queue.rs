use std::fmt::{self, Display, Formatter};

use thiserror::Error;

pub use self::circular::{CircularQueue, Slot};
pub use self::linear::LinearQueue;

pub mod circular;
pub mod linear;

/// Discharge order: which end of the queue is next to leave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
	#[default]
	Fifo,
	Lifo,
}

impl Order {
	pub fn toggled(self) -> Self {
		match self {
			Self::Fifo => Self::Lifo,
			Self::Lifo => Self::Fifo,
		}
	}

	pub fn is_fifo(self) -> bool {
		matches!(self, Self::Fifo)
	}
}

impl Display for Order {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str(match self {
			Self::Fifo => "FIFO",
			Self::Lifo => "LIFO",
		})
	}
}

/// Failed operations never mutate the queue they were called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
	#[error("overflow: the queue is full")]
	Overflow,
	#[error("underflow: the queue is empty")]
	Underflow,
	#[error("the queue is empty")]
	Empty,
}
