//! The capability every emittable node exposes.

use std::rc::Rc;
use std::sync::Arc;

use crate::compiler::Compiler;
use crate::error::Result;

/// A syntax node that can write itself as JavaScript.
///
/// Implementations append their text through `Compiler::raw`, `string`,
/// `repr` and `subcompile`, and delegate to children with
/// `Compiler::compile`. All output is a side effect on the compiler.
///
/// ```
/// use jsnode_emitter::{Compiler, FunctionTable, Node, Result};
///
/// struct Answer;
///
/// impl Node for Answer {
///     fn compile(&self, compiler: &mut Compiler) -> Result<()> {
///         compiler.raw("answer = ").repr(&42.into());
///         Ok(())
///     }
/// }
///
/// let mut compiler = Compiler::new(FunctionTable::new());
/// compiler.compile(&Answer)?;
/// assert_eq!(compiler.source(), "answer = 42");
/// # Ok::<(), jsnode_emitter::EmitError>(())
/// ```
pub trait Node {
    fn compile(&self, compiler: &mut Compiler) -> Result<()>;
}

impl<N: Node + ?Sized> Node for &N {
    fn compile(&self, compiler: &mut Compiler) -> Result<()> {
        (**self).compile(compiler)
    }
}

impl<N: Node + ?Sized> Node for Box<N> {
    fn compile(&self, compiler: &mut Compiler) -> Result<()> {
        (**self).compile(compiler)
    }
}

impl<N: Node + ?Sized> Node for Rc<N> {
    fn compile(&self, compiler: &mut Compiler) -> Result<()> {
        (**self).compile(compiler)
    }
}

impl<N: Node + ?Sized> Node for Arc<N> {
    fn compile(&self, compiler: &mut Compiler) -> Result<()> {
        (**self).compile(compiler)
    }
}
