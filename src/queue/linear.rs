use super::{Error, Order};

/// Array-backed queue with a fixed logical capacity.
///
/// The front index only ever advances; removed slots go stale instead of
/// shifting the live window down. Storage is released as soon as the queue
/// drains, so a long-lived queue does not accumulate stale slots forever.
#[derive(Debug)]
pub struct LinearQueue<T> {
	elements: Vec<Option<T>>,
	capacity: usize,
	front: usize,
	order: Order,
}

impl<T> LinearQueue<T> {
	pub fn new(capacity: usize, order: Order) -> Self {
		assert!(capacity > 0, "capacity must be positive");
		Self {
			elements: Vec::new(),
			capacity,
			front: 0,
			order,
		}
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn order(&self) -> Order {
		self.order
	}

	pub fn len(&self) -> usize {
		self.elements.len() - self.front
	}

	pub fn is_empty(&self) -> bool {
		self.front >= self.elements.len()
	}

	pub fn is_full(&self) -> bool {
		self.len() >= self.capacity
	}

	pub fn enqueue(&mut self, value: T) -> Result<(), Error> {
		if self.is_full() {
			return Err(Error::Overflow);
		}
		self.elements.push(Some(value));
		Ok(())
	}

	pub fn dequeue(&mut self) -> Result<T, Error> {
		if self.is_empty() {
			return Err(Error::Underflow);
		}

		let value = match self.order {
			Order::Fifo => {
				let value = self.elements[self.front].take();
				self.front += 1;
				value
			}
			Order::Lifo => self.elements.pop().flatten(),
		};

		if self.is_empty() {
			// Drop the stale prefix along with the rest of the storage.
			self.elements = Vec::new();
			self.front = 0;
		}

		Ok(value.unwrap_or_else(|| unreachable!()))
	}

	/// The element that would leave on the next `dequeue`.
	pub fn front(&self) -> Result<&T, Error> {
		if self.is_empty() {
			return Err(Error::Empty);
		}
		let index = match self.order {
			Order::Fifo => self.front,
			Order::Lifo => self.elements.len() - 1,
		};
		Ok(self.slot(index))
	}

	/// The element that would leave last.
	pub fn rear(&self) -> Result<&T, Error> {
		if self.is_empty() {
			return Err(Error::Empty);
		}
		let index = match self.order {
			Order::Fifo => self.elements.len() - 1,
			Order::Lifo => self.front,
		};
		Ok(self.slot(index))
	}

	pub fn clear(&mut self) {
		self.elements = Vec::new();
		self.front = 0;
	}

	/// Live window in storage order, regardless of discharge order.
	pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
		self.elements[self.front..]
			.iter()
			.map(|slot| slot.as_ref().unwrap_or_else(|| unreachable!()))
	}

	/// Flips the discharge order. The live window is re-laid-out in the new
	/// direction so the index arithmetic stays the same in both orders.
	pub fn toggle_order(&mut self) {
		self.order = self.order.toggled();
		if !self.is_empty() {
			let mut live = self.elements.split_off(self.front);
			live.reverse();
			self.elements = live;
			self.front = 0;
		}
	}

	fn slot(&self, index: usize) -> &T {
		self.elements[index]
			.as_ref()
			.unwrap_or_else(|| unreachable!())
	}
}
