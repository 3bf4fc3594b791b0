use super::{ActiveQueue, Kind, Session};
use crate::queue::{Error, Order};

#[test]
fn factory_builds_the_requested_kind() {
	let session = Session::new(Kind::Linear, 10, Order::Fifo);
	assert!(matches!(session.queue(), ActiveQueue::Linear(_)));
	assert_eq!(session.kind(), Kind::Linear);

	let session = Session::new(Kind::Circular, 10, Order::Lifo);
	assert!(matches!(session.queue(), ActiveQueue::Circular(_)));
	assert_eq!(session.order(), Order::Lifo);
}

#[test]
fn operations_reach_the_active_queue() {
	let mut session = Session::new(Kind::Circular, 2, Order::Fifo);
	session.enqueue("a".to_owned()).unwrap();
	session.enqueue("b".to_owned()).unwrap();
	assert!(session.is_full());
	assert_eq!(session.enqueue("c".to_owned()), Err(Error::Overflow));
	assert_eq!(session.front(), Ok("a"));
	assert_eq!(session.rear(), Ok("b"));
	assert_eq!(session.dequeue(), Ok("a".to_owned()));
	assert_eq!(session.len(), 1);

	session.clear();
	assert!(session.is_empty());
	assert_eq!(session.dequeue(), Err(Error::Underflow));
}

#[test]
fn toggle_kind_discards_contents_and_keeps_settings() {
	let mut session = Session::new(Kind::Linear, 5, Order::Fifo);
	session.enqueue("a".to_owned()).unwrap();
	session.toggle_order();

	session.toggle_kind();
	assert_eq!(session.kind(), Kind::Circular);
	assert_eq!(session.order(), Order::Lifo);
	assert_eq!(session.capacity(), 5);
	assert!(session.is_empty());

	session.toggle_kind();
	assert_eq!(session.kind(), Kind::Linear);
	assert_eq!(session.order(), Order::Lifo);
}

#[test]
fn toggle_order_stays_within_the_active_queue() {
	let mut session = Session::new(Kind::Linear, 3, Order::Fifo);
	session.enqueue("a".to_owned()).unwrap();
	session.enqueue("b".to_owned()).unwrap();
	session.toggle_order();
	assert_eq!(session.order(), Order::Lifo);
	assert_eq!(session.len(), 2);
}
