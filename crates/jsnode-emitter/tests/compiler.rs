use super::*;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Appends fixed text.
struct Text(&'static str);

impl Node for Text {
    fn compile(&self, compiler: &mut Compiler) -> Result<()> {
        compiler.raw(self.0);
        Ok(())
    }
}

/// Writes some text, then fails.
struct Failing;

impl Node for Failing {
    fn compile(&self, compiler: &mut Compiler) -> Result<()> {
        compiler.raw("partial output");
        Err(EmitError::node("cannot compile"))
    }
}

/// Writes some text, then panics.
struct Panicking;

impl Node for Panicking {
    fn compile(&self, compiler: &mut Compiler) -> Result<()> {
        compiler.raw("partial output");
        panic!("node exploded");
    }
}

/// Sub-compiles each child and joins the fragments with `|`.
struct Joined(Vec<Box<dyn Node>>);

impl Node for Joined {
    fn compile(&self, compiler: &mut Compiler) -> Result<()> {
        let mut parts = Vec::new();
        for child in &self.0 {
            parts.push(compiler.subcompile(child)?);
        }
        compiler.raw("<").raw(&parts.join("|")).raw(">");
        Ok(())
    }
}

/// `name(child)`, built either inline or through a sub-compile.
struct Wrap {
    name: &'static str,
    child: Box<dyn Node>,
    isolated: bool,
}

impl Node for Wrap {
    fn compile(&self, compiler: &mut Compiler) -> Result<()> {
        compiler.raw(self.name).raw("(");
        if self.isolated {
            let inner = compiler.subcompile(&self.child)?;
            compiler.raw(&inner);
        } else {
            compiler.compile(&self.child)?;
        }
        compiler.raw(")");
        Ok(())
    }
}

/// `n` levels of directly nested compile calls.
struct Nest(u32);

impl Node for Nest {
    fn compile(&self, compiler: &mut Compiler) -> Result<()> {
        if self.0 == 0 {
            compiler.raw("0");
        } else {
            compiler.raw("[").compile(&Nest(self.0 - 1))?.raw("]");
        }
        Ok(())
    }
}

fn compiler() -> Compiler {
    Compiler::new(FunctionTable::new())
}

#[test]
fn test_raw_appends_and_chains() {
    let mut compiler = compiler();
    compiler.raw("a").raw(" + ").raw("b");
    assert_eq!(compiler.source(), "a + b");
}

#[test]
fn test_reset_clears_buffer_and_is_idempotent() {
    let mut compiler = compiler();
    compiler.raw("leftover");
    compiler.reset().reset();
    assert_eq!(compiler.source(), "");

    compiler.reset().raw("fresh");
    assert_eq!(compiler.source(), "fresh");
}

#[test]
fn test_compile_appends_in_place() {
    let mut compiler = compiler();
    compiler
        .raw("x = ")
        .compile(&Text("1"))
        .unwrap()
        .raw(";");
    assert_eq!(compiler.source(), "x = 1;");
    assert_eq!(compiler.depth(), 0);
}

#[test]
fn test_subcompile_leaves_buffer_untouched() {
    let mut compiler = compiler();
    compiler.raw("before");

    let fragment = compiler.subcompile(&Text("isolated")).unwrap();

    assert_eq!(fragment, "isolated");
    assert_eq!(compiler.source(), "before");
}

#[test]
fn test_subcompile_matches_compile_from_empty_buffer() {
    let node = Wrap {
        name: "f",
        child: Box::new(Text("x")),
        isolated: false,
    };

    let mut direct = compiler();
    direct.compile(&node).unwrap();

    let mut isolated = compiler();
    isolated.raw("unrelated");
    let fragment = isolated.subcompile(&node).unwrap();

    assert_eq!(fragment, direct.source());
    assert_eq!(isolated.source(), "unrelated");
}

#[test]
fn test_subcompile_restores_buffer_on_error() {
    let mut compiler = compiler();
    compiler.raw("prefix");

    let err = compiler.subcompile(&Failing).unwrap_err();

    assert!(matches!(err, EmitError::Node { ref message } if message == "cannot compile"));
    assert_eq!(compiler.source(), "prefix");
    assert_eq!(compiler.depth(), 0);

    // The caller can keep going with a different node.
    compiler.raw(" ").compile(&Text("next")).unwrap();
    assert_eq!(compiler.source(), "prefix next");
}

#[test]
fn test_subcompile_restores_buffer_on_panic() {
    let mut compiler = compiler();
    compiler.raw("prefix");

    let outcome = catch_unwind(AssertUnwindSafe(|| compiler.subcompile(&Panicking)));

    assert!(outcome.is_err());
    assert_eq!(compiler.source(), "prefix");
    assert_eq!(compiler.depth(), 0);
}

#[test]
fn test_compile_restores_depth_on_panic() {
    let options = EmitterOptions::new().max_depth(1);
    let mut compiler = Compiler::with_options(FunctionTable::new(), options);

    let outcome = catch_unwind(AssertUnwindSafe(|| compiler.compile(&Panicking).map(|_| ())));

    assert!(outcome.is_err());
    assert_eq!(compiler.depth(), 0);

    // A caught panic does not eat into the recursion budget.
    compiler.reset().compile(&Text("next")).unwrap();
    assert_eq!(compiler.source(), "next");
}

#[test]
fn test_error_in_nested_subcompile_restores_every_level() {
    let node = Joined(vec![
        Box::new(Text("ok")),
        Box::new(Joined(vec![Box::new(Text("deep")), Box::new(Failing)])),
    ]);

    let mut compiler = compiler();
    compiler.raw("outer");
    assert!(compiler.subcompile(&node).is_err());
    assert!(compiler.compile(&node).is_err());

    // compile leaves no isolated fragments behind either.
    assert_eq!(compiler.source(), "outer");
}

#[test]
fn test_nested_subcompile_stack_discipline() {
    let node = Joined(vec![
        Box::new(Text("a")),
        Box::new(Joined(vec![
            Box::new(Text("b")),
            Box::new(Joined(vec![Box::new(Text("c"))])),
        ])),
        Box::new(Text("d")),
    ]);

    let mut compiler = compiler();
    compiler.raw("= ");
    compiler.compile(&node).unwrap();

    assert_eq!(compiler.source(), "= <a|<b|<c>>|d>");
}

#[test]
fn test_subcompile_composes_with_inline_compile() {
    let build = |isolated: bool| Wrap {
        name: "outer",
        child: Box::new(Wrap {
            name: "inner",
            child: Box::new(Text("leaf")),
            isolated,
        }),
        isolated,
    };

    let mut inline = compiler();
    inline.raw("call ").compile(&build(false)).unwrap();

    let mut via_subcompile = compiler();
    via_subcompile.raw("call ").compile(&build(true)).unwrap();

    assert_eq!(inline.source(), "call outer(inner(leaf))");
    assert_eq!(via_subcompile.source(), inline.source());
}

#[test]
fn test_get_function() {
    let functions = FunctionTable::new().with(
        "upper",
        FunctionDescriptor::new().with("native", "toUpperCase"),
    );
    let compiler = Compiler::new(functions);

    let descriptor = compiler.get_function("upper").unwrap();
    assert_eq!(descriptor.get_str("native"), Some("toUpperCase"));

    let err = compiler.get_function("Upper").unwrap_err();
    assert!(matches!(err, EmitError::FunctionNotFound { ref name } if name == "Upper"));
    assert_eq!(err.to_string(), "function \"Upper\" does not exist");
}

#[test]
fn test_recursion_limit() {
    let options = EmitterOptions::new().max_depth(5);
    let mut compiler = Compiler::with_options(FunctionTable::new(), options);

    compiler.compile(&Nest(4)).unwrap();
    assert_eq!(compiler.source(), "[[[[0]]]]");

    compiler.reset();
    let err = compiler.compile(&Nest(5)).unwrap_err();
    assert!(matches!(err, EmitError::RecursionLimitExceeded { limit: 5 }));
    assert_eq!(compiler.depth(), 0);
}

#[test]
fn test_recursion_limit_inside_subcompile_keeps_outer_buffer() {
    let options = EmitterOptions::new().max_depth(3);
    let mut compiler = Compiler::with_options(FunctionTable::new(), options);
    compiler.raw("kept");

    assert!(compiler.subcompile(&Nest(10)).is_err());
    assert_eq!(compiler.source(), "kept");
    assert_eq!(compiler.depth(), 0);
}

#[test]
fn test_into_source() {
    let mut compiler = compiler();
    compiler.compile(&Text("done")).unwrap();
    assert_eq!(compiler.into_source(), "done");
}

#[test]
fn test_compiler_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Compiler>();
}
