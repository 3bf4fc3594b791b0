use std::time::{Duration, Instant};

use egui::{Align2, Color32, FontId, Frame, RichText, Sense, Stroke, Vec2};

use crate::queue::{CircularQueue, LinearQueue, Order};
use crate::session::{ActiveQueue, Kind, Session};

const STATUS_RESET: Duration = Duration::from_secs(4);

const FRONT_COLOR: Color32 = Color32::LIGHT_GREEN;
const REAR_COLOR: Color32 = Color32::LIGHT_RED;

pub fn run(session: Session) -> anyhow::Result<()> {
	let native_options = eframe::NativeOptions::default();
	eframe::run_native(
		"quevis",
		native_options,
		Box::new(|_| Box::new(App::new(session))),
	)
	.map_err(|error| anyhow::anyhow!("running the gui: {error}"))
}

#[derive(Debug, Clone, Copy)]
enum StatusKind {
	Success,
	Error,
	Info,
}

struct Status {
	kind: StatusKind,
	text: String,
	since: Instant,
}

struct App {
	session: Session,
	input: String,
	status: Option<Status>,
}

impl App {
	fn new(session: Session) -> Self {
		Self {
			session,
			input: String::new(),
			status: None,
		}
	}

	fn set_status(&mut self, kind: StatusKind, text: String) {
		self.status = Some(Status {
			kind,
			text,
			since: Instant::now(),
		});
	}

	fn enqueue(&mut self) {
		let value = self.input.trim().to_owned();
		if value.is_empty() {
			self.set_status(StatusKind::Error, "enter a value before adding".to_owned());
			return;
		}
		match self.session.enqueue(value.clone()) {
			Ok(()) => {
				self.set_status(StatusKind::Success, format!("added {value:?} to the queue"));
				self.input.clear();
			}
			Err(error) => self.set_status(StatusKind::Error, error.to_string()),
		}
	}

	fn dequeue(&mut self) {
		match self.session.dequeue() {
			Ok(value) => {
				self.set_status(
					StatusKind::Success,
					format!("removed {value:?} from the queue"),
				);
			}
			Err(error) => self.set_status(StatusKind::Error, error.to_string()),
		}
	}

	fn front(&mut self) {
		let (kind, text) = match self.session.front() {
			Ok(value) => (StatusKind::Info, format!("front element: {value:?}")),
			Err(error) => (StatusKind::Error, error.to_string()),
		};
		self.set_status(kind, text);
	}

	fn rear(&mut self) {
		let (kind, text) = match self.session.rear() {
			Ok(value) => (StatusKind::Info, format!("rear element: {value:?}")),
			Err(error) => (StatusKind::Error, error.to_string()),
		};
		self.set_status(kind, text);
	}
}

impl eframe::App for App {
	fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
		if let Some(status) = &self.status {
			let elapsed = status.since.elapsed();
			if elapsed >= STATUS_RESET {
				self.status = None;
			} else {
				ctx.request_repaint_after(STATUS_RESET - elapsed);
			}
		}

		egui::CentralPanel::default().show(ctx, |ui| {
			ui.heading("Queues");
			let state = if self.session.is_full() {
				" (full)"
			} else if self.session.is_empty() {
				" (empty)"
			} else {
				""
			};
			ui.label(format!(
				"{} queue - {} order, {} of {} element(s){state}",
				self.session.kind(),
				self.session.order(),
				self.session.len(),
				self.session.capacity()
			));

			ui.horizontal(|ui| {
				ui.text_edit_singleline(&mut self.input);
				if ui.button("Enqueue").clicked() {
					self.enqueue();
				}
			});

			ui.horizontal(|ui| {
				if ui.button("Dequeue").clicked() {
					self.dequeue();
				}
				if ui.button("Front").clicked() {
					self.front();
				}
				if ui.button("Rear").clicked() {
					self.rear();
				}
				if ui.button("Size").clicked() {
					let text = format!(
						"current size: {} of {} element(s)",
						self.session.len(),
						self.session.capacity()
					);
					self.set_status(StatusKind::Info, text);
				}
				if ui.button("Clear").clicked() {
					self.session.clear();
					self.set_status(StatusKind::Success, "queue cleared".to_owned());
				}
			});

			ui.horizontal(|ui| {
				let kind_label = match self.session.kind() {
					Kind::Linear => "Switch to circular queue",
					Kind::Circular => "Switch to linear queue",
				};
				if ui.button(kind_label).clicked() {
					self.session.toggle_kind();
					let text = format!(
						"{} queue activated - {} order",
						self.session.kind(),
						self.session.order()
					);
					self.set_status(StatusKind::Info, text);
				}

				let order_label = match self.session.order() {
					Order::Fifo => "Switch to LIFO",
					Order::Lifo => "Switch to FIFO",
				};
				if ui.button(order_label).clicked() {
					self.session.toggle_order();
					let text = format!("order switched to {}", self.session.order());
					self.set_status(StatusKind::Info, text);
				}
			});

			match &self.status {
				Some(status) => {
					let color = match status.kind {
						StatusKind::Success => Color32::LIGHT_GREEN,
						StatusKind::Error => Color32::LIGHT_RED,
						StatusKind::Info => Color32::LIGHT_BLUE,
					};
					ui.colored_label(color, &status.text);
				}
				None => {
					ui.weak("press a button to interact with the queue");
				}
			}

			match self.session.queue() {
				ActiveQueue::Linear(queue) => draw_linear(ui, queue),
				ActiveQueue::Circular(queue) => draw_circular(ui, queue),
			}

			ui.collapsing("About this queue", |ui| {
				ui.label("front and rear point at the first and last element to leave");
				ui.label("overflow and underflow are reported instead of mutating the queue");
				match self.session.kind() {
					Kind::Linear => {
						ui.label("removed slots go stale; storage resets once the queue drains");
					}
					Kind::Circular => {
						ui.label("freed slots are reused in place; removal never shifts elements");
					}
				}
			});
		});
	}
}

fn draw_linear(ui: &mut egui::Ui, queue: &LinearQueue<String>) {
	Frame::group(ui.style()).show(ui, |ui| {
		if queue.is_empty() {
			ui.label("(empty)");
			return;
		}

		let count = queue.len();
		let (front_at, rear_at) = if queue.order().is_fifo() {
			(0, count - 1)
		} else {
			(count - 1, 0)
		};

		ui.horizontal(|ui| {
			for (position, value) in queue.iter().enumerate() {
				let stroke = if position == front_at {
					Stroke::new(2.0, FRONT_COLOR)
				} else if position == rear_at {
					Stroke::new(2.0, REAR_COLOR)
				} else {
					ui.visuals().widgets.noninteractive.bg_stroke
				};
				ui.vertical(|ui| {
					Frame::none()
						.stroke(stroke)
						.inner_margin(8.0)
						.show(ui, |ui| {
							ui.label(RichText::new(value).font(FontId::monospace(18.0)));
						});
					if position == front_at {
						ui.small("front");
					}
					if position == rear_at {
						ui.small("rear");
					}
				});
			}
		});
	});
}

fn draw_circular(ui: &mut egui::Ui, queue: &CircularQueue<String>) {
	Frame::group(ui.style()).show(ui, |ui| {
		let (response, painter) = ui.allocate_painter(Vec2::splat(320.0), Sense::hover());
		let rect = response.rect;
		let center = rect.center();
		let radius = rect.width().min(rect.height()) / 2.0 - 40.0;
		painter.circle_stroke(center, radius, ui.visuals().widgets.noninteractive.bg_stroke);

		let slots = queue.slots();
		if slots.is_empty() {
			painter.text(
				center,
				Align2::CENTER_CENTER,
				"(empty)",
				FontId::proportional(16.0),
				ui.visuals().text_color(),
			);
			return;
		}

		// Elements are laid out by display position; the physical slot index
		// is printed under each one so wraparound stays visible.
		let step = std::f32::consts::TAU / slots.len() as f32;
		let start = -std::f32::consts::FRAC_PI_2;
		let last = slots.len() - 1;

		for (position, slot) in slots.iter().enumerate() {
			let angle = start + position as f32 * step;
			let at = center + radius * Vec2::new(angle.cos(), angle.sin());

			let fill = if position == 0 {
				FRONT_COLOR
			} else if position == last {
				REAR_COLOR
			} else {
				Color32::from_gray(200)
			};
			painter.circle_filled(at, 22.0, fill);
			painter.text(
				at,
				Align2::CENTER_CENTER,
				slot.value,
				FontId::monospace(14.0),
				Color32::BLACK,
			);
			painter.text(
				at + Vec2::new(0.0, 32.0),
				Align2::CENTER_CENTER,
				format!("slot {}", slot.index),
				FontId::proportional(11.0),
				ui.visuals().weak_text_color(),
			);

			let marker = if position == 0 && position == last {
				Some("front/rear")
			} else if position == 0 {
				Some("front")
			} else if position == last {
				Some("rear")
			} else {
				None
			};
			if let Some(marker) = marker {
				painter.text(
					at - Vec2::new(0.0, 34.0),
					Align2::CENTER_CENTER,
					marker,
					FontId::proportional(12.0),
					ui.visuals().text_color(),
				);
			}
		}
	});
}
