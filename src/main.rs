use anyhow::ensure;

use crate::args::Frontend;
use crate::session::Session;

mod args;
mod frontends;
mod queue;
mod session;

fn main() -> anyhow::Result<()> {
	let args = args::load();
	ensure!(args.capacity > 0, "capacity must be positive");

	let session = Session::new(args.kind, args.capacity, args.order);

	match args.frontend {
		Frontend::Repl(_) => frontends::repl::run(session),
		Frontend::Gui(_) => frontends::gui::run(session),
	}
}
