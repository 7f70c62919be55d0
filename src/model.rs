use serde::Serialize;
use std::collections::BTreeMap;

/// Instruction components and variable values are plain JSON values.
/// Barewords and literals always arrive as `Value::String`.
pub type Value = serde_json::Value;

/// Initial variable bindings, as loaded from a bindings file.
pub type Bindings = BTreeMap<String, Value>;

/// Truthiness of an executor result: `null`, `false`, `0`, and `""` are
/// falsy, everything else (including empty arrays/objects) is truthy.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// How a run ended when no error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The whole script was scanned.
    Completed,
    /// The executor requested an early stop.
    Aborted,
}

/// One instruction as seen by the executor, kept for the transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptEntry {
    pub components: Vec<Value>,
    pub result: Value,
    pub aborted: bool,
}
