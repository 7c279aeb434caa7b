//! Flag-driven mode.

mod args;
mod context;
mod length;
mod prompts;

pub use args::Cli;
pub use context::Context;
pub use length::{coerce_length, parse_length};

pub fn run(flags: Cli) {
    Context::new(flags).run();
}
