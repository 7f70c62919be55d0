//! Property-based tests for the scanner and the context stack.

use gscript::processor::{self, context::ContextStack};
use gscript::{ExecResult, Executor, Outcome, Value};
use proptest::prelude::*;

/// Records calls; `yes` is truthy, `no` is falsy, anything else is truthy.
#[derive(Default)]
struct Recorder {
    calls: Vec<Vec<Value>>,
}

impl Executor for Recorder {
    fn reset(&mut self) {
        self.calls.clear();
    }

    fn get_variable(&self, _name: &str) -> Option<Value> {
        None
    }

    fn execute_command(&mut self, components: &[Value]) -> ExecResult {
        self.calls.push(components.to_vec());
        ExecResult::value(components[0] != Value::from("no"))
    }
}

fn word() -> impl Strategy<Value = String> {
    "[a-z0-9_]{1,8}"
}

/// Literal body without quotes or escapes.
fn literal_body() -> impl Strategy<Value = String> {
    "[a-z ]{0,12}"
}

/// Nested blocks of marked instructions; the bool is the guard result.
#[derive(Debug, Clone)]
enum Item {
    Leaf(String),
    Block(bool, Vec<Item>),
}

fn item() -> impl Strategy<Value = Item> {
    let leaf = word().prop_map(Item::Leaf);
    leaf.prop_recursive(4, 32, 4, |inner| {
        (any::<bool>(), prop::collection::vec(inner, 0..4))
            .prop_map(|(guard, body)| Item::Block(guard, body))
    })
}

fn render(items: &[Item], out: &mut String) {
    for item in items {
        match item {
            Item::Leaf(w) => out.push_str(&format!("leaf {w};\n")),
            Item::Block(guard, body) => {
                out.push_str(if *guard { "yes {\n" } else { "no {\n" });
                render(body, out);
                out.push_str("}\n");
            }
        }
    }
}

/// Leaves that should reach the executor, in order.
fn expected_leaves(items: &[Item], active: bool, out: &mut Vec<String>) {
    for item in items {
        match item {
            Item::Leaf(w) if active => out.push(w.clone()),
            Item::Leaf(_) => {}
            Item::Block(guard, body) => expected_leaves(body, active && *guard, out),
        }
    }
}

proptest! {
    #[test]
    fn spaces_collapse_outside_literals(
        words in prop::collection::vec(word(), 1..6),
        gaps in prop::collection::vec(1usize..5, 6),
    ) {
        let mut script = String::new();
        for (w, gap) in words.iter().zip(&gaps) {
            script.push_str(w);
            script.push_str(&" ".repeat(*gap));
        }
        script.push(';');

        let mut rec = Recorder::default();
        processor::run(&script, &mut rec).unwrap();

        let expected: Vec<Value> = words.iter().map(|w| Value::from(w.as_str())).collect();
        prop_assert_eq!(&rec.calls, &vec![expected]);
    }

    #[test]
    fn literals_are_kept_verbatim(body in literal_body()) {
        let mut rec = Recorder::default();
        processor::run(&format!("say \"{body}\";"), &mut rec).unwrap();

        prop_assert_eq!(&rec.calls, &vec![vec![Value::from("say"), Value::from(body)]]);
    }

    #[test]
    fn inactive_blocks_never_reach_the_executor(items in prop::collection::vec(item(), 0..6)) {
        let mut script = String::new();
        render(&items, &mut script);

        let mut rec = Recorder::default();
        let outcome = processor::run(&script, &mut rec).unwrap();
        prop_assert_eq!(outcome, Outcome::Completed);

        let leaves: Vec<String> = rec
            .calls
            .iter()
            .filter(|c| c[0] == Value::from("leaf"))
            .map(|c| c[1].as_str().unwrap_or_default().to_string())
            .collect();
        let mut expected = Vec::new();
        expected_leaves(&items, true, &mut expected);
        prop_assert_eq!(leaves, expected);
    }

    #[test]
    fn close_restores_recorded_activation(ops in prop::collection::vec(prop::option::of(any::<bool>()), 0..64)) {
        // Some(b) opens a block with activation b, None closes one.
        let mut stack = ContextStack::new();
        let mut model = vec![true];

        for op in ops {
            match op {
                Some(active) => {
                    stack.open(active);
                    model.push(active);
                }
                None if model.len() > 1 => {
                    stack.close();
                    model.pop();
                }
                None => prop_assert!(stack.close().is_none()),
            }
            prop_assert_eq!(stack.is_active(), *model.last().unwrap());
            prop_assert_eq!(stack.depth(), model.len() - 1);
        }
    }
}
