//! The interpreter core.
//!
//! A script is scanned once, character by character. Each instruction is
//! handed to an [`Executor`] as soon as it is complete, and `{ … }` blocks are
//! entered or skipped based on the result of the instruction before them.
//! No syntax tree is ever built.
pub mod basic;
pub mod buffer;
pub mod context;
pub mod dispatch;
pub mod executor;
pub mod preprocess;
pub mod scanner;

pub use basic::BasicExecutor;
pub use executor::{ExecResult, Executor};

use crate::error::Result;
use crate::model::Outcome;
use scanner::Scanner;

/// Reset `executor`, then scan and execute `script` from start to finish.
///
/// Returns [`Outcome::Aborted`] if the executor stopped the script early.
pub fn run<E: Executor>(script: &str, executor: &mut E) -> Result<Outcome> {
    executor.reset();
    let script = preprocess::preprocess(script);
    Scanner::new(executor).run(&script)
}
