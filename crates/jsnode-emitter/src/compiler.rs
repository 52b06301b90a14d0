//! The compiler: output buffer, function table and compilation entry points.
//!
//! Nodes drive emission by calling back into the compiler. Text accumulates
//! in a single buffer; `subcompile` swaps in a fresh buffer for the duration
//! of one node so composite nodes can build fragments (argument lists, array
//! elements) before deciding where they go.

use std::mem;
use std::ops::{Deref, DerefMut};

use jsnode_common::limits::SUBCOMPILE_BUFFER_CAPACITY;
use tracing::{debug, trace};

use crate::error::{EmitError, Result};
use crate::functions::{FunctionDescriptor, FunctionTable};
use crate::node::Node;
use crate::options::EmitterOptions;

/// JavaScript source emitter.
///
/// Constructed once with its function table, then reset and reused for each
/// independent compilation unit.
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    pub(crate) source: String,
    functions: FunctionTable,
    pub(crate) options: EmitterOptions,
    /// Number of `compile` frames currently on the stack.
    depth: u32,
}

impl Compiler {
    pub fn new(functions: FunctionTable) -> Self {
        Self::with_options(functions, EmitterOptions::default())
    }

    pub fn with_options(functions: FunctionTable, options: EmitterOptions) -> Self {
        Self {
            source: String::new(),
            functions,
            options,
            depth: 0,
        }
    }

    pub fn options(&self) -> &EmitterOptions {
        &self.options
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    /// Look up a function descriptor by exact name.
    pub fn get_function(&self, name: &str) -> Result<&FunctionDescriptor> {
        self.functions
            .get(name)
            .ok_or_else(|| EmitError::FunctionNotFound {
                name: name.to_string(),
            })
    }

    /// The JavaScript produced so far.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn into_source(self) -> String {
        self.source
    }

    /// Current `compile` nesting depth.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Clear the buffer for a new compilation unit.
    pub fn reset(&mut self) -> &mut Self {
        debug!(discarded = self.source.len(), "resetting compiler");
        self.source.clear();
        self.depth = 0;
        self
    }

    /// Compile `node` into the current buffer.
    pub fn compile<N: Node + ?Sized>(&mut self, node: &N) -> Result<&mut Self> {
        if self.depth >= self.options.max_depth {
            debug!(limit = self.options.max_depth, "emit recursion limit exceeded");
            return Err(EmitError::RecursionLimitExceeded {
                limit: self.options.max_depth,
            });
        }

        let mut scope = DepthScope::enter(self);
        trace!(depth = scope.compiler.depth, "compile");
        let result = node.compile(&mut *scope);
        drop(scope);

        result.map(|()| self)
    }

    /// Compile `node` into an isolated buffer and return its text.
    ///
    /// The current buffer is left exactly as it was, whether the node
    /// succeeds, fails or panics. The fragment is not appended.
    pub fn subcompile<N: Node + ?Sized>(&mut self, node: &N) -> Result<String> {
        let mut scope = BufferScope::enter(self);
        scope.compile(node)?;
        let fragment = scope.finish();
        trace!(depth = self.depth, len = fragment.len(), "subcompile");
        Ok(fragment)
    }
}

/// Scope guard that owns the caller's buffer while a sub-compile runs.
///
/// Dropping the guard puts the saved buffer and depth back, which covers the
/// early return of `?` and unwinding.
struct BufferScope<'c> {
    compiler: &'c mut Compiler,
    saved: Option<String>,
    depth: u32,
}

impl<'c> BufferScope<'c> {
    fn enter(compiler: &'c mut Compiler) -> Self {
        let saved = mem::replace(
            &mut compiler.source,
            String::with_capacity(SUBCOMPILE_BUFFER_CAPACITY),
        );
        let depth = compiler.depth;
        Self {
            compiler,
            saved: Some(saved),
            depth,
        }
    }

    /// Restore the caller's buffer and return what was written meanwhile.
    fn finish(mut self) -> String {
        let saved = self.saved.take().unwrap_or_default();
        mem::replace(&mut self.compiler.source, saved)
    }
}

impl Deref for BufferScope<'_> {
    type Target = Compiler;

    fn deref(&self) -> &Compiler {
        &*self.compiler
    }
}

impl DerefMut for BufferScope<'_> {
    fn deref_mut(&mut self) -> &mut Compiler {
        &mut *self.compiler
    }
}

impl Drop for BufferScope<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.compiler.source = saved;
        }
        self.compiler.depth = self.depth;
    }
}

/// Scope guard for one `compile` frame.
///
/// Raises the nesting depth on entry and puts the saved depth back when
/// dropped, so an unwinding node cannot leave the counter raised.
struct DepthScope<'c> {
    compiler: &'c mut Compiler,
    depth: u32,
}

impl<'c> DepthScope<'c> {
    fn enter(compiler: &'c mut Compiler) -> Self {
        let depth = compiler.depth;
        compiler.depth += 1;
        Self { compiler, depth }
    }
}

impl Deref for DepthScope<'_> {
    type Target = Compiler;

    fn deref(&self) -> &Compiler {
        &*self.compiler
    }
}

impl DerefMut for DepthScope<'_> {
    fn deref_mut(&mut self) -> &mut Compiler {
        &mut *self.compiler
    }
}

impl Drop for DepthScope<'_> {
    fn drop(&mut self) {
        self.compiler.depth = self.depth;
    }
}

#[cfg(test)]
#[path = "../tests/compiler.rs"]
mod tests;
