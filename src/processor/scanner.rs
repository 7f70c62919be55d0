//! Single-pass scanner: reads the script one character at a time and
//! executes each instruction as soon as its terminator is seen.
//
//  Lexical items:
//
//      ;            instruction terminator
//      { }          open / close a conditional block
//      " '          literal delimiters (closed by the same character)
//      \            escape, only inside literals
//      #            comment until end of line, only between instructions
//      $name        variable reference, ended by space, newline or ';'
//
//  Outside literals CR is dropped and LF is buffered as a single space, so
//  a bareword may span lines. Repeated spaces are never buffered.

use std::ops::ControlFlow;

use super::buffer::Buffer;
use super::context::ContextStack;
use super::dispatch::{Dispatched, Dispatcher};
use super::executor::Executor;
use crate::error::{Result, ScriptError, SyntaxErrorKind};
use crate::model::{Outcome, Value};

const T_SPACE: char = ' ';
const T_COMMENT: char = '#';
const T_CONTEXT_OPEN: char = '{';
const T_CONTEXT_CLOSE: char = '}';
const T_INSTRUCTION_END: char = ';';
const T_STRING_DOUBLE_QUOTE: char = '"';
const T_STRING_SINGLE_QUOTE: char = '\'';
const T_RETURN: char = '\r';
const T_NEW_LINE: char = '\n';
const T_ESCAPE: char = '\\';
const T_VARIABLE_INDICATOR: char = '$';

/// What the scanner is currently reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingMode {
    Free,
    Comment,
    Literal { quote: char, escaped: bool },
    Variable,
}

/// `Break` means the executor aborted the script.
type Step = ControlFlow<()>;

pub struct Scanner<'e, E: Executor> {
    executor: &'e mut E,
    mode: ReadingMode,
    buffer: Buffer,
    dispatcher: Dispatcher,
    contexts: ContextStack,
    line: usize,
    column: usize,
}

impl<'e, E: Executor> Scanner<'e, E> {
    pub fn new(executor: &'e mut E) -> Self {
        Self {
            executor,
            mode: ReadingMode::Free,
            buffer: Buffer::new(),
            dispatcher: Dispatcher::new(),
            contexts: ContextStack::new(),
            line: 1,
            column: 0,
        }
    }

    /// Scan and execute an already preprocessed script.
    pub fn run(mut self, script: &str) -> Result<Outcome> {
        for c in script.chars() {
            self.column += 1;

            if self.step(c)?.is_break() {
                return Ok(Outcome::Aborted);
            }

            if c == T_NEW_LINE {
                self.line += 1;
                self.column = 0;
            }
        }

        self.column += 1;
        self.finish()?;
        Ok(Outcome::Completed)
    }

    fn step(&mut self, c: char) -> Result<Step> {
        match self.mode {
            ReadingMode::Literal { quote, escaped } => {
                self.read_literal(c, quote, escaped);
                Ok(Step::Continue(()))
            }
            _ if c == T_RETURN => Ok(Step::Continue(())),
            ReadingMode::Comment => {
                if c == T_NEW_LINE {
                    self.buffer.clear();
                    self.mode = ReadingMode::Free;
                }
                Ok(Step::Continue(()))
            }
            ReadingMode::Variable => self.read_variable(c),
            ReadingMode::Free => self.read_free(c),
        }
    }

    fn read_free(&mut self, c: char) -> Result<Step> {
        match c {
            T_INSTRUCTION_END => {
                self.flush_bareword();
                return Ok(self.finalize(false));
            }
            T_SPACE if self.buffer.ends_with_space() => {}
            T_SPACE => self.flush_bareword(),
            T_NEW_LINE => {
                if !self.buffer.ends_with_space() {
                    self.buffer.push(T_SPACE);
                }
            }
            T_COMMENT => {
                if self.mid_instruction() {
                    return Err(self.syntax_error(SyntaxErrorKind::CommentInInstruction));
                }
                self.mode = ReadingMode::Comment;
            }
            // Unflushed text before `{` or `}` is dropped.
            T_CONTEXT_OPEN => {
                if !self.dispatcher.is_interpreting() {
                    return Err(self.syntax_error(SyntaxErrorKind::ContextOpenWithoutInstruction));
                }
                let active = self.contexts.is_active();
                let result = self
                    .dispatcher
                    .finalize(&mut *self.executor, active, true);
                self.contexts.open(result.is_truthy());
                self.buffer.clear();
            }
            T_CONTEXT_CLOSE => {
                if self.contexts.close().is_none() {
                    return Err(self.syntax_error(SyntaxErrorKind::ContextCloseWithoutContext));
                }
                self.buffer.clear();
            }
            T_STRING_DOUBLE_QUOTE | T_STRING_SINGLE_QUOTE => {
                if self.buffer.is_blank() {
                    self.buffer.clear();
                }
                self.mode = ReadingMode::Literal {
                    quote: c,
                    escaped: false,
                };
            }
            T_VARIABLE_INDICATOR => {
                if !self.buffer.is_empty() {
                    return Err(self.syntax_error(SyntaxErrorKind::VariableMidToken));
                }
                self.mode = ReadingMode::Variable;
            }
            _ => self.buffer.push(c),
        }
        Ok(Step::Continue(()))
    }

    fn read_literal(&mut self, c: char, quote: char, escaped: bool) {
        if escaped {
            self.buffer.push(c);
            self.mode = ReadingMode::Literal {
                quote,
                escaped: false,
            };
        } else if c == T_ESCAPE {
            self.mode = ReadingMode::Literal {
                quote,
                escaped: true,
            };
        } else if c == quote {
            let text = self.buffer.take_literal();
            self.dispatcher.push(Value::String(text));
            self.mode = ReadingMode::Free;
        } else {
            self.buffer.push(c);
        }
    }

    fn read_variable(&mut self, c: char) -> Result<Step> {
        if !matches!(c, T_SPACE | T_NEW_LINE | T_INSTRUCTION_END) {
            self.buffer.push(c);
            return Ok(Step::Continue(()));
        }

        self.mode = ReadingMode::Free;
        let name = self.buffer.take_literal();
        let Some(value) = self.executor.get_variable(&name) else {
            return Err(ScriptError::Reference {
                name,
                line: self.line,
                column: self.column,
            });
        };
        self.dispatcher.push(value);

        if c == T_INSTRUCTION_END {
            return Ok(self.finalize(false));
        }
        Ok(Step::Continue(()))
    }

    fn finish(&self) -> Result<()> {
        let unterminated = match self.mode {
            ReadingMode::Comment => None,
            ReadingMode::Literal { .. } => Some(SyntaxErrorKind::UnterminatedLiteral),
            ReadingMode::Free | ReadingMode::Variable if self.mid_instruction() => {
                Some(SyntaxErrorKind::UnterminatedInstruction)
            }
            ReadingMode::Free | ReadingMode::Variable => None,
        };

        match unterminated {
            Some(kind) => Err(self.syntax_error(kind)),
            None => Ok(()),
        }
    }

    fn flush_bareword(&mut self) {
        if let Some(word) = self.buffer.take_bareword() {
            self.dispatcher.push(Value::String(word));
        }
    }

    fn finalize(&mut self, conditional: bool) -> Step {
        let active = self.contexts.is_active();
        match self
            .dispatcher
            .finalize(&mut *self.executor, active, conditional)
        {
            Dispatched::Aborted => Step::Break(()),
            _ => Step::Continue(()),
        }
    }

    /// A buffered line break alone does not start an instruction.
    fn mid_instruction(&self) -> bool {
        self.dispatcher.is_interpreting() || !self.buffer.is_blank()
    }

    fn syntax_error(&self, kind: SyntaxErrorKind) -> ScriptError {
        ScriptError::Syntax {
            kind,
            line: self.line,
            column: self.column,
        }
    }
}
