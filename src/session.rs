use std::fmt::{self, Display, Formatter};

use crate::queue::{CircularQueue, Error, LinearQueue, Order};

#[cfg(test)]
mod test;

/// Which queue variant is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Kind {
	#[default]
	Linear,
	Circular,
}

impl Kind {
	pub fn toggled(self) -> Self {
		match self {
			Self::Linear => Self::Circular,
			Self::Circular => Self::Linear,
		}
	}
}

impl Display for Kind {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str(match self {
			Self::Linear => "linear",
			Self::Circular => "circular",
		})
	}
}

#[derive(Debug)]
pub enum ActiveQueue {
	Linear(LinearQueue<String>),
	Circular(CircularQueue<String>),
}

/// Holds the one live queue a frontend interacts with. Switching kinds
/// builds a fresh queue through the factory; contents are discarded but the
/// capacity and discharge order carry over.
#[derive(Debug)]
pub struct Session {
	queue: ActiveQueue,
}

fn make_queue(kind: Kind, capacity: usize, order: Order) -> ActiveQueue {
	match kind {
		Kind::Linear => ActiveQueue::Linear(LinearQueue::new(capacity, order)),
		Kind::Circular => ActiveQueue::Circular(CircularQueue::new(capacity, order)),
	}
}

impl Session {
	pub fn new(kind: Kind, capacity: usize, order: Order) -> Self {
		Self {
			queue: make_queue(kind, capacity, order),
		}
	}

	pub fn kind(&self) -> Kind {
		match self.queue {
			ActiveQueue::Linear(_) => Kind::Linear,
			ActiveQueue::Circular(_) => Kind::Circular,
		}
	}

	pub fn order(&self) -> Order {
		match &self.queue {
			ActiveQueue::Linear(queue) => queue.order(),
			ActiveQueue::Circular(queue) => queue.order(),
		}
	}

	pub fn capacity(&self) -> usize {
		match &self.queue {
			ActiveQueue::Linear(queue) => queue.capacity(),
			ActiveQueue::Circular(queue) => queue.capacity(),
		}
	}

	pub fn queue(&self) -> &ActiveQueue {
		&self.queue
	}

	pub fn len(&self) -> usize {
		match &self.queue {
			ActiveQueue::Linear(queue) => queue.len(),
			ActiveQueue::Circular(queue) => queue.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		match &self.queue {
			ActiveQueue::Linear(queue) => queue.is_empty(),
			ActiveQueue::Circular(queue) => queue.is_empty(),
		}
	}

	pub fn is_full(&self) -> bool {
		match &self.queue {
			ActiveQueue::Linear(queue) => queue.is_full(),
			ActiveQueue::Circular(queue) => queue.is_full(),
		}
	}

	pub fn enqueue(&mut self, value: String) -> Result<(), Error> {
		match &mut self.queue {
			ActiveQueue::Linear(queue) => queue.enqueue(value),
			ActiveQueue::Circular(queue) => queue.enqueue(value),
		}
	}

	pub fn dequeue(&mut self) -> Result<String, Error> {
		match &mut self.queue {
			ActiveQueue::Linear(queue) => queue.dequeue(),
			ActiveQueue::Circular(queue) => queue.dequeue(),
		}
	}

	pub fn front(&self) -> Result<&str, Error> {
		match &self.queue {
			ActiveQueue::Linear(queue) => queue.front().map(String::as_str),
			ActiveQueue::Circular(queue) => queue.front().map(String::as_str),
		}
	}

	pub fn rear(&self) -> Result<&str, Error> {
		match &self.queue {
			ActiveQueue::Linear(queue) => queue.rear().map(String::as_str),
			ActiveQueue::Circular(queue) => queue.rear().map(String::as_str),
		}
	}

	pub fn clear(&mut self) {
		match &mut self.queue {
			ActiveQueue::Linear(queue) => queue.clear(),
			ActiveQueue::Circular(queue) => queue.clear(),
		}
	}

	pub fn toggle_order(&mut self) {
		match &mut self.queue {
			ActiveQueue::Linear(queue) => queue.toggle_order(),
			ActiveQueue::Circular(queue) => queue.toggle_order(),
		}
	}

	pub fn toggle_kind(&mut self) {
		self.queue = make_queue(self.kind().toggled(), self.capacity(), self.order());
	}
}
