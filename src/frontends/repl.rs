use std::fmt::Write as _;
use std::io::{self, BufRead as _, Write as _};

use crate::queue::{CircularQueue, LinearQueue};
use crate::session::{ActiveQueue, Kind, Session};

pub fn run(mut session: Session) -> anyhow::Result<()> {
	println!(
		"{} queue activated - {} order, capacity {}",
		session.kind(),
		session.order(),
		session.capacity()
	);
	println!("type `help` for the command list");
	render(&session);

	let mut stdin = io::stdin().lock();
	let mut line = String::new();

	loop {
		print!("> ");
		io::stdout().flush()?;

		line.clear();
		if stdin.read_line(&mut line)? == 0 {
			break;
		}

		let input = line.trim();
		let (command, argument) = match input.split_once(char::is_whitespace) {
			Some((command, argument)) => (command, argument.trim()),
			None => (input, ""),
		};

		match command {
			"" => {}
			"enqueue" | "e" => {
				if argument.is_empty() {
					println!("error: enter a value before adding");
				} else {
					match session.enqueue(argument.to_owned()) {
						Ok(()) => {
							println!("added {argument:?} to the queue");
							render(&session);
						}
						Err(error) => println!("error: {error}"),
					}
				}
			}
			"dequeue" | "d" => match session.dequeue() {
				Ok(value) => {
					println!("removed {value:?} from the queue");
					render(&session);
				}
				Err(error) => println!("error: {error}"),
			},
			"front" | "f" => match session.front() {
				Ok(value) => println!("front element: {value:?}"),
				Err(error) => println!("error: {error}"),
			},
			"rear" | "r" => match session.rear() {
				Ok(value) => println!("rear element: {value:?}"),
				Err(error) => println!("error: {error}"),
			},
			"size" | "s" => println!("current size: {}", size_text(&session)),
			"clear" => {
				session.clear();
				println!("queue cleared");
				render(&session);
			}
			"order" => {
				session.toggle_order();
				println!("order switched to {}", session.order());
				render(&session);
			}
			"kind" => {
				session.toggle_kind();
				println!(
					"switched to the {} queue (contents discarded)",
					session.kind()
				);
				render(&session);
			}
			"show" => render(&session),
			"info" => info(&session),
			"help" | "?" => help(),
			"quit" | "exit" | "q" => break,
			_ => {
				println!("error: unknown command {command:?}; type `help` for the command list");
			}
		}
	}

	Ok(())
}

fn size_text(session: &Session) -> String {
	let state = if session.is_full() {
		" (full)"
	} else if session.is_empty() {
		" (empty)"
	} else {
		""
	};
	format!("{} of {} element(s){state}", session.len(), session.capacity())
}

fn render(session: &Session) {
	match session.queue() {
		ActiveQueue::Linear(queue) => render_linear(queue),
		ActiveQueue::Circular(queue) => render_circular(queue),
	}
}

fn render_linear(queue: &LinearQueue<String>) {
	if queue.is_empty() {
		println!("(empty)");
		return;
	}

	let mut cells = String::new();
	let mut starts = Vec::new();
	for value in queue.iter() {
		if !cells.is_empty() {
			cells.push(' ');
		}
		starts.push(cells.chars().count());
		write!(cells, "[ {value} ]").unwrap();
	}
	println!("{cells}");

	// Which end is the front depends on the discharge order; the cells
	// themselves are always drawn in storage order.
	let last = starts.len() - 1;
	let labels: Vec<(usize, &str)> = if last == 0 {
		vec![(starts[0], "front/rear")]
	} else if queue.order().is_fifo() {
		vec![(starts[0], "front"), (starts[last], "rear")]
	} else {
		vec![(starts[0], "rear"), (starts[last], "front")]
	};
	println!("{}", marker_line(&labels));
}

fn marker_line(labels: &[(usize, &str)]) -> String {
	let mut line = String::new();
	for &(column, label) in labels {
		while line.chars().count() < column {
			line.push(' ');
		}
		line.push_str(label);
	}
	line
}

fn render_circular(queue: &CircularQueue<String>) {
	let slots = queue.slots();
	if slots.is_empty() {
		println!("(empty)");
		return;
	}

	let front = slots.first().map(|slot| slot.index);
	let rear = slots.last().map(|slot| slot.index);

	for index in 0..queue.capacity() {
		let occupied = slots.iter().find(|slot| slot.index == index);
		let mut line = format!("slot {index:>2}: ");
		match occupied {
			Some(slot) => write!(line, "[ {} ]", slot.value).unwrap(),
			None => line.push_str("( )"),
		}
		if front == Some(index) && rear == Some(index) {
			line.push_str(" <- front/rear");
		} else if front == Some(index) {
			line.push_str(" <- front");
		} else if rear == Some(index) {
			line.push_str(" <- rear");
		}
		println!("{line}");
	}

	let values = slots
		.iter()
		.map(|slot| slot.value.as_str())
		.collect::<Vec<_>>();
	println!("front -> rear: {}", values.join(", "));
}

fn info(session: &Session) {
	println!(
		"{} queue - {} order, {}",
		session.kind(),
		session.order(),
		size_text(session)
	);
	println!("- front and rear point at the first and last element to leave");
	println!("- overflow and underflow are reported instead of mutating the queue");
	println!("- operations: enqueue, dequeue, front, rear, size, clear");
	match session.kind() {
		Kind::Linear => {
			println!("- removed slots go stale; storage resets once the queue drains");
		}
		Kind::Circular => {
			println!("- freed slots are reused in place; removal never shifts elements");
		}
	}
}

fn help() {
	println!("enqueue <value>  add a value at the rear (e)");
	println!("dequeue          remove the next value to leave (d)");
	println!("front            show the next value to leave (f)");
	println!("rear             show the value that leaves last (r)");
	println!("size             show the current element count (s)");
	println!("clear            empty the queue");
	println!("order            toggle between FIFO and LIFO");
	println!("kind             switch between the linear and circular queue");
	println!("show             redraw the queue");
	println!("info             describe the active queue");
	println!("quit             exit (q)");
}
