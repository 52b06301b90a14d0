//! JavaScript source emitter for expression-node trees.
//!
//! An upstream parser builds a tree of nodes; each node implements [`Node`]
//! and writes itself into a [`Compiler`]. The compiler owns the output
//! buffer, renders host values as literals and lets nodes compile children
//! into isolated buffers with [`Compiler::subcompile`].
//!
//! ```
//! use jsnode_emitter::{Compiler, FunctionDescriptor, FunctionTable, JsNode};
//!
//! let functions = FunctionTable::new()
//!     .with("max", FunctionDescriptor::new().with("native", "Math.max"));
//! let mut compiler = Compiler::new(functions);
//!
//! let tree = JsNode::call("max", vec![JsNode::constant(3.14), JsNode::name("limit")]);
//! compiler.reset().compile(&tree)?;
//! assert_eq!(compiler.source(), "Math.max(3.14, limit)");
//! # Ok::<(), jsnode_emitter::EmitError>(())
//! ```

pub mod compiler;
pub mod error;
pub mod functions;
mod literals;
pub mod node;
pub mod nodes;
pub mod options;

pub use compiler::Compiler;
pub use error::{EmitError, Result};
pub use functions::{FunctionDescriptor, FunctionTable};
pub use node::Node;
pub use nodes::JsNode;
pub use options::EmitterOptions;

// Re-export the value model so node implementations need a single dependency.
pub use jsnode_common::Value;
