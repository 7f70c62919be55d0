//! Small executor used by the command-line tool.
//!
//! Supported commands:
//!
//!   set <name> <value>     bind a variable                    → true
//!   unset <name>           remove a variable                  → whether it existed
//!   echo <args…>           append a line to the output        → true
//!   eq <a> <b>, ne <a> <b> compare two values                 → bool
//!   not <v>                negate truthiness                  → bool
//!   defined <name>         is the variable bound?             → bool
//!   true, false            constants
//!   abort                  stop the script
//!
//! Anything else is logged and yields `null`.

use tracing::warn;

use super::executor::{ExecResult, Executor};
use crate::model::{Bindings, TranscriptEntry, Value, truthy};

#[derive(Debug, Default)]
pub struct BasicExecutor {
    seed: Bindings,
    vars: Bindings,
    output: Vec<String>,
    transcript: Vec<TranscriptEntry>,
}

impl BasicExecutor {
    pub fn new(seed: Bindings) -> Self {
        Self {
            vars: seed.clone(),
            seed,
            ..Self::default()
        }
    }

    /// Lines produced by `echo`, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn variables(&self) -> &Bindings {
        &self.vars
    }

    fn eval(&mut self, components: &[Value]) -> ExecResult {
        let Some((head, args)) = components.split_first() else {
            return ExecResult::value(Value::Null);
        };
        let Some(cmd) = head.as_str() else {
            warn!("command name must be a string, got {head}");
            return ExecResult::value(Value::Null);
        };

        match (cmd, args) {
            ("set", [name, value]) => {
                self.vars.insert(display(name), value.clone());
                ExecResult::value(true)
            }
            ("unset", [name]) => ExecResult::value(self.vars.remove(&display(name)).is_some()),
            ("echo", args) => {
                let line: Vec<String> = args.iter().map(display).collect();
                self.output.push(line.join(" "));
                ExecResult::value(true)
            }
            ("eq", [a, b]) => ExecResult::value(a == b),
            ("ne", [a, b]) => ExecResult::value(a != b),
            ("not", [v]) => ExecResult::value(!truthy(v)),
            ("defined", [name]) => ExecResult::value(self.vars.contains_key(&display(name))),
            ("true", []) => ExecResult::value(true),
            ("false", []) => ExecResult::value(false),
            ("abort", []) => ExecResult::abort(),
            ("set" | "unset" | "eq" | "ne" | "not" | "defined" | "true" | "false" | "abort", _) => {
                warn!("{cmd}: wrong number of arguments ({})", args.len());
                ExecResult::value(Value::Null)
            }
            _ => {
                warn!("unknown command: {cmd}");
                ExecResult::value(Value::Null)
            }
        }
    }
}

/// Strings print bare, everything else as JSON.
fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Executor for BasicExecutor {
    fn reset(&mut self) {
        self.vars = self.seed.clone();
        self.output.clear();
        self.transcript.clear();
    }

    fn get_variable(&self, name: &str) -> Option<Value> {
        self.vars.get(name).cloned()
    }

    fn execute_command(&mut self, components: &[Value]) -> ExecResult {
        let result = self.eval(components);
        self.transcript.push(TranscriptEntry {
            components: components.to_vec(),
            result: result.op_result.clone(),
            aborted: result.abort_execution,
        });
        result
    }
}
