//! The boundary between the interpreter and whatever actually runs commands.

use crate::model::Value;

/// What an executor reports back for one instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecResult {
    /// Its truthiness decides whether a guarded block is entered.
    pub op_result: Value,
    /// Ask the interpreter to stop the script.
    pub abort_execution: bool,
}

impl ExecResult {
    pub fn value(op_result: impl Into<Value>) -> Self {
        Self {
            op_result: op_result.into(),
            abort_execution: false,
        }
    }

    pub fn abort() -> Self {
        Self {
            op_result: Value::Null,
            abort_execution: true,
        }
    }
}

/// Resolves variables and runs instructions on behalf of the interpreter.
///
/// The interpreter calls [`Executor::reset`] once at the start of every run
/// and never inspects executor-internal failures: anything that goes wrong
/// inside a command has to be folded into the returned [`ExecResult`].
pub trait Executor {
    fn reset(&mut self);

    /// `None` means the variable is not defined.
    fn get_variable(&self, name: &str) -> Option<Value>;

    fn execute_command(&mut self, components: &[Value]) -> ExecResult;
}
