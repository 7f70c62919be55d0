pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

pub use error::{ScriptError, SyntaxErrorKind};
pub use model::{Outcome, Value};
pub use processor::{BasicExecutor, ExecResult, Executor};

use anyhow::Context;
use tracing::info;

use crate::model::Bindings;

pub fn run(args: &cli::Cli) -> anyhow::Result<Outcome> {
    // 1. ── Load ───────────────────────────────────────────────────────
    let script = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Reading {}", args.script.display()))?;
    let bindings = match &args.bindings {
        Some(path) => parser::load_bindings_file(path)?,
        None => Bindings::new(),
    };
    info!(
        "Loaded {} ({} bytes, {} bindings)",
        args.script.display(),
        script.len(),
        bindings.len()
    );

    // 2. ── Interpret ──────────────────────────────────────────────────
    let mut executor = BasicExecutor::new(bindings);
    let outcome = processor::run(&script, &mut executor)
        .with_context(|| format!("Running {}", args.script.display()))?;

    // 3. ── Write outputs ──────────────────────────────────────────────
    writer::output::emit(executor.output(), &mut std::io::stdout().lock())
        .with_context(|| "Writing output")?;
    if let Some(path) = &args.transcript {
        writer::transcript::emit(executor.transcript(), path)?;
    }

    match outcome {
        Outcome::Completed => info!(
            "Script completed, {} instructions executed",
            executor.transcript().len()
        ),
        Outcome::Aborted => info!("Script aborted by command"),
    }
    Ok(outcome)
}
