//! Built-in expression nodes.
//!
//! A closed set of node kinds covering the usual expression-language
//! constructs. Trees are built by the caller; each variant knows how to write
//! itself through the [`Compiler`]. Other node types can live alongside these
//! by implementing [`Node`] directly.

use jsnode_common::Value;

use crate::compiler::Compiler;
use crate::error::Result;
use crate::node::Node;

/// Expression node for JavaScript emission.
#[derive(Clone, Debug, PartialEq)]
pub enum JsNode {
    // =========================================================================
    // Leaves
    // =========================================================================
    /// Literal value: `42`, `"a"`, `[1, null]`
    Constant(Value),

    /// Variable reference, emitted as-is: `foo`
    Name(String),

    // =========================================================================
    // Composites
    // =========================================================================
    /// Array literal: `[a, b]`
    Array(Vec<Self>),

    /// Object literal with string keys: `{"a": 1}`
    Object(Vec<(String, Self)>),

    /// Prefix operator: `(!x)`, `(-x)`
    Unary { operator: String, operand: Box<Self> },

    /// Infix operator: `(a + b)`
    Binary {
        operator: String,
        left: Box<Self>,
        right: Box<Self>,
    },

    /// Ternary: `((test) ? (a) : (b))`
    Conditional {
        test: Box<Self>,
        consequent: Box<Self>,
        alternate: Box<Self>,
    },

    /// Named property access: `obj.prop` or `obj["not an ident"]`
    Member { object: Box<Self>, property: String },

    /// Computed access: `obj[index]`
    Index { object: Box<Self>, index: Box<Self> },

    /// Call of a function from the compiler's function table.
    ///
    /// Emits the descriptor's `native` name when present, otherwise the
    /// function name itself.
    Call {
        function: String,
        arguments: Vec<Self>,
    },
}

// =============================================================================
// Constructors
// =============================================================================

impl JsNode {
    pub fn constant(value: impl Into<Value>) -> Self {
        JsNode::Constant(value.into())
    }

    pub fn name(name: impl Into<String>) -> Self {
        JsNode::Name(name.into())
    }

    pub fn array(items: Vec<Self>) -> Self {
        JsNode::Array(items)
    }

    pub fn object<K: Into<String>>(entries: Vec<(K, Self)>) -> Self {
        JsNode::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn unary(operator: impl Into<String>, operand: Self) -> Self {
        JsNode::Unary {
            operator: operator.into(),
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Self, operator: impl Into<String>, right: Self) -> Self {
        JsNode::Binary {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn conditional(test: Self, consequent: Self, alternate: Self) -> Self {
        JsNode::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
    }

    pub fn member(object: Self, property: impl Into<String>) -> Self {
        JsNode::Member {
            object: Box::new(object),
            property: property.into(),
        }
    }

    pub fn index(object: Self, index: Self) -> Self {
        JsNode::Index {
            object: Box::new(object),
            index: Box::new(index),
        }
    }

    pub fn call(function: impl Into<String>, arguments: Vec<Self>) -> Self {
        JsNode::Call {
            function: function.into(),
            arguments,
        }
    }
}

// =============================================================================
// Emission
// =============================================================================

impl Node for JsNode {
    fn compile(&self, compiler: &mut Compiler) -> Result<()> {
        match self {
            JsNode::Constant(value) => {
                compiler.repr(value);
            }

            JsNode::Name(name) => {
                compiler.raw(name);
            }

            JsNode::Array(items) => {
                let elements = compile_list(compiler, items)?;
                compiler.raw("[").raw(&elements).raw("]");
            }

            JsNode::Object(entries) => {
                compiler.raw("{");
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        compiler.raw(", ");
                    }
                    compiler.string(key).raw(": ").compile(value)?;
                }
                compiler.raw("}");
            }

            JsNode::Unary { operator, operand } => {
                compiler
                    .raw("(")
                    .raw(unary_operator(operator))
                    .compile(operand.as_ref())?
                    .raw(")");
            }

            JsNode::Binary {
                operator,
                left,
                right,
            } => {
                compiler
                    .raw("(")
                    .compile(left.as_ref())?
                    .raw(" ")
                    .raw(binary_operator(operator))
                    .raw(" ")
                    .compile(right.as_ref())?
                    .raw(")");
            }

            JsNode::Conditional {
                test,
                consequent,
                alternate,
            } => {
                compiler
                    .raw("((")
                    .compile(test.as_ref())?
                    .raw(") ? (")
                    .compile(consequent.as_ref())?
                    .raw(") : (")
                    .compile(alternate.as_ref())?
                    .raw("))");
            }

            JsNode::Member { object, property } => {
                compiler.compile(object.as_ref())?;
                if is_identifier(property) {
                    compiler.raw(".").raw(property);
                } else {
                    compiler.raw("[").string(property).raw("]");
                }
            }

            JsNode::Index { object, index } => {
                compiler
                    .compile(object.as_ref())?
                    .raw("[")
                    .compile(index.as_ref())?
                    .raw("]");
            }

            JsNode::Call {
                function,
                arguments,
            } => {
                let callee = compiler
                    .get_function(function)?
                    .get_str("native")
                    .unwrap_or(function)
                    .to_string();
                let arguments = compile_list(compiler, arguments)?;
                compiler.raw(&callee).raw("(").raw(&arguments).raw(")");
            }
        }
        Ok(())
    }
}

/// Sub-compile each item and join the fragments with `, `.
fn compile_list(compiler: &mut Compiler, items: &[JsNode]) -> Result<String> {
    let parts = items
        .iter()
        .map(|item| compiler.subcompile(item))
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join(", "))
}

fn unary_operator(operator: &str) -> &str {
    match operator {
        "not" => "!",
        op => op,
    }
}

fn binary_operator(operator: &str) -> &str {
    match operator {
        "and" => "&&",
        "or" => "||",
        "~" => "+",
        op => op,
    }
}

/// Whether `name` can follow a `.` in a property access.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
#[path = "../tests/nodes.rs"]
mod tests;
