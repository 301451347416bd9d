//! Generated kernels handed to a dynamic loader

use kernelgen_ir::{compile, CodeBuilder, CompileRequest, SourceLoader};
use pretty_assertions::assert_eq;

#[test]
fn test_builder_output_wrapped_in_template() {
    let mut builder = CodeBuilder::new();
    let x = builder.scalar("x");
    let y = builder.scalar("y");
    let s = builder.apply("+", &[x, y]).unwrap();
    let product = builder.apply("*", &[s, s]).unwrap();
    let out = builder.output(product).unwrap();

    let body = builder.to_source(&[out.into()]).unwrap();
    let request = CompileRequest::new("square_sum", body)
        .parameters(["x", "y"])
        .context("tests");
    let source = compile(&SourceLoader, request, ()).unwrap();

    assert_eq!(
        source,
        "\"use strict\";\n\
         // this is auto-generated code\n\
         \tvar sqrt = Math.sqrt;\n\
         \texports[\"square_sum\"] = function square_sum(x, y) {\n\
         \t\tlet temp0 = x + y;\n\
         return temp0 * temp0;\n\
         }"
    );
}
