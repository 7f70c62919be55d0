//! Collects the components of the instruction being read and hands the
//! finished instruction to the executor.

use tracing::{debug, warn};

use super::executor::Executor;
use crate::model::{Value, truthy};

/// What happened to a finalized instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    /// Nothing had been collected.
    Noop,
    /// The enclosing context is inactive; the executor was not called.
    Skipped,
    /// The executor ran it and returned a result of this truthiness.
    Ran(bool),
    /// The executor asked for the script to stop.
    Aborted,
}

impl Dispatched {
    /// Activation for a block guarded by this instruction.
    pub fn is_truthy(self) -> bool {
        matches!(self, Dispatched::Ran(true))
    }
}

#[derive(Debug, Default)]
pub struct Dispatcher {
    components: Vec<Value>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, component: Value) {
        self.components.push(component);
    }

    /// True while an instruction is being assembled.
    pub fn is_interpreting(&self) -> bool {
        !self.components.is_empty()
    }

    /// Dispatch the collected components (if any) and start a new instruction.
    ///
    /// `conditional` marks the instruction guarding a `{`: an abort from the
    /// executor is then downgraded to a falsy result.
    pub fn finalize<E: Executor>(
        &mut self,
        executor: &mut E,
        active: bool,
        conditional: bool,
    ) -> Dispatched {
        if self.components.is_empty() {
            debug!("GScript: EXEC_NOOP_BLANK");
            return Dispatched::Noop;
        }

        let components = std::mem::take(&mut self.components);
        dispatch(executor, &components, active, conditional)
    }
}

fn dispatch<E: Executor>(
    executor: &mut E,
    components: &[Value],
    active: bool,
    conditional: bool,
) -> Dispatched {
    let prefix = match (active, conditional) {
        (false, _) => "EXEC/SKIP",
        (true, true) => "EXEC/CONDITIONAL",
        (true, false) => "EXEC",
    };
    let call = Value::from(components.to_vec());
    debug!("GScript {prefix}: {call}");

    if !active {
        return Dispatched::Skipped;
    }

    let result = executor.execute_command(components);
    debug!(" RET --> {}", result.op_result);

    if result.abort_execution {
        if conditional {
            debug!("GScript: conditional abort, ignoring the block");
            return Dispatched::Ran(false);
        }
        warn!("GScript: Abort script execution");
        return Dispatched::Aborted;
    }

    Dispatched::Ran(truthy(&result.op_result))
}
