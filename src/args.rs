use std::str::FromStr;

use argh::FromArgs;
use thiserror::Error;

use crate::queue::Order;
use crate::session::Kind;

/// Interactive linear/circular queue visualizer.
#[derive(FromArgs, Debug)]
pub struct Args {
	/// capacity of the queue
	#[argh(option, short = 'c', default = "10")]
	pub capacity: usize,
	/// queue kind to start with: linear or circular
	#[argh(option, short = 'k', default = "<_>::default()")]
	pub kind: Kind,
	/// discharge order to start with: fifo or lifo
	#[argh(option, short = 'o', default = "<_>::default()")]
	pub order: Order,
	#[argh(subcommand)]
	pub frontend: Frontend,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Frontend {
	Repl(ReplArgs),
	Gui(GuiArgs),
}

/// Drive the queue from an interactive terminal prompt.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "repl")]
pub struct ReplArgs {}

/// Drive the queue from a native window.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "gui")]
pub struct GuiArgs {}

#[derive(Debug, Error)]
#[error("unrecognized queue kind; supported are: linear, circular")]
pub struct KindFromStrError;

impl FromStr for Kind {
	type Err = KindFromStrError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s {
			"linear" => Self::Linear,
			"circular" => Self::Circular,
			_ => return Err(KindFromStrError),
		})
	}
}

#[derive(Debug, Error)]
#[error("unrecognized discharge order; supported are: fifo, lifo")]
pub struct OrderFromStrError;

impl FromStr for Order {
	type Err = OrderFromStrError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s {
			"fifo" => Self::Fifo,
			"lifo" => Self::Lifo,
			_ => return Err(OrderFromStrError),
		})
	}
}

pub fn load() -> Args {
	argh::from_env()
}
