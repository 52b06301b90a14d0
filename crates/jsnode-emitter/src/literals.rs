//! Literal output: verbatim text, escaped string literals and host values.
//!
//! String escaping covers NUL, tab, `"`, `\\` and `$`, plus line terminators
//! when `EmitterOptions::escape_line_terminators` is set. Everything else is
//! written through unchanged.

use jsnode_common::Value;
use jsnode_common::numeric::{push_float, push_int};
use tracing::trace;

use crate::compiler::Compiler;
use crate::options::EmitterOptions;

impl Compiler {
    // =========================================================================
    // Text and Literals
    // =========================================================================

    /// Append `text` verbatim.
    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.source.push_str(text);
        self
    }

    /// Append `value` as a double-quoted string literal.
    pub fn string(&mut self, value: &str) -> &mut Self {
        self.source.reserve(value.len() + 2);
        self.source.push('"');
        write_escaped(&mut self.source, value, &self.options);
        self.source.push('"');
        self
    }

    /// Append the literal representation of a host value.
    ///
    /// Sequences render as array literals; map keys are dropped and only the
    /// values are emitted, in insertion order. Nesting is walked with an
    /// explicit work stack, so arbitrarily deep values cannot overflow the
    /// call stack.
    pub fn repr(&mut self, value: &Value) -> &mut Self {
        trace!(kind = value.kind(), "repr");
        let mut stack = vec![WorkItem::Value(value)];
        while let Some(item) = stack.pop() {
            match item {
                WorkItem::Text(text) => self.source.push_str(text),
                WorkItem::Value(Value::List(items)) => {
                    open_sequence(&mut self.source, &mut stack, items.iter());
                }
                WorkItem::Value(Value::Map(entries)) => {
                    open_sequence(&mut self.source, &mut stack, entries.values());
                }
                WorkItem::Value(Value::Int(n)) => push_int(&mut self.source, *n),
                WorkItem::Value(Value::Float(n)) => push_float(&mut self.source, *n),
                WorkItem::Value(Value::Null) => self.source.push_str("null"),
                WorkItem::Value(Value::Bool(b)) => {
                    self.source.push_str(if *b { "true" } else { "false" });
                }
                WorkItem::Value(Value::String(s)) => {
                    self.string(s);
                }
            }
        }
        self
    }
}

enum WorkItem<'v> {
    Value(&'v Value),
    Text(&'static str),
}

/// Write `[` and push the items with the closing `]` beneath them.
fn open_sequence<'v>(
    out: &mut String,
    stack: &mut Vec<WorkItem<'v>>,
    items: impl DoubleEndedIterator<Item = &'v Value>,
) {
    out.push('[');
    stack.push(WorkItem::Text("]"));
    for (i, item) in items.rev().enumerate() {
        if i > 0 {
            stack.push(WorkItem::Text(", "));
        }
        stack.push(WorkItem::Value(item));
    }
}

fn write_escaped(out: &mut String, value: &str, options: &EmitterOptions) {
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            // `\0` followed by a digit would read as a legacy octal escape.
            '\0' if chars.peek().is_some_and(char::is_ascii_digit) => out.push_str("\\x00"),
            '\0' => out.push_str("\\0"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '$' if options.escape_dollar => out.push_str("\\$"),
            '\n' if options.escape_line_terminators => out.push_str("\\n"),
            '\r' if options.escape_line_terminators => out.push_str("\\r"),
            '\u{2028}' if options.escape_line_terminators => out.push_str("\\u2028"),
            '\u{2029}' if options.escape_line_terminators => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
#[path = "../tests/literals.rs"]
mod tests;
