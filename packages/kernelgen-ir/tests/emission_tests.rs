//! Emitted source text for complete kernels

#[path = "common/mod.rs"]
mod common;
use common::*;

use kernelgen_ir::api::VectorShape;
use kernelgen_ir::{
    BuilderConfig, CodeBuilder, NodeId, PhiTest, SinkError, SourceSink, Terminal,
};
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════════
// Round trips
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_single_use_is_inlined() {
    let mut builder = CodeBuilder::new();
    let (x, y) = scalars(&mut builder);
    let s = builder.apply("+", &[x, y]).unwrap();

    assert_eq!(source_returning(&mut builder, s), "return x + y;\n");
}

#[test]
fn test_double_use_is_declared() {
    let mut builder = CodeBuilder::new();
    let (x, y) = scalars(&mut builder);
    let s = builder.apply("+", &[x, y]).unwrap();

    builder.output(s).unwrap();
    let out = builder.output(s).unwrap();

    assert_eq!(
        builder.to_source(&[out.into()]).unwrap(),
        "let temp0 = x + y;\nreturn temp0;\n"
    );
}

#[test]
fn test_output_has_no_source_form() {
    let mut builder = CodeBuilder::new();
    let x = builder.scalar("x");
    let out = builder.output(x).unwrap();

    assert!(out.source().is_err());
    assert_eq!(builder.render_output(&out).unwrap(), "return x");
}

// ═══════════════════════════════════════════════════════════════════════════
// Kernels
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_dot_product() {
    let mut builder = CodeBuilder::new();
    let a = builder.vector(3usize, "a").unwrap();
    let b = builder.vector(3usize, "b").unwrap();

    let products = builder.map("*", &[a, b]).unwrap();
    let sums = builder.reduce("+", &[products]).unwrap();
    let dot = builder.get(sums, 0).unwrap();

    assert_eq!(
        source_returning(&mut builder, dot),
        "return a[0] * b[0] + a[1] * b[1] + a[2] * b[2];\n"
    );
}

#[test]
fn test_normalize_in_place() {
    let mut builder = CodeBuilder::new();
    let v = builder.vector(3usize, "v").unwrap();

    let squares = builder.map("*", &[v, v]).unwrap();
    let sums = builder.reduce("+", &[squares]).unwrap();
    let sum = builder.get(sums, 0).unwrap();
    let length = builder.apply("sqrt", &[sum]).unwrap();
    let normalized = builder.map("/", &[v, length]).unwrap();

    let out = builder.vector(3usize, "out").unwrap();
    builder.assign(out, normalized).unwrap();

    assert_eq!(
        builder.to_source(&[]).unwrap(),
        "let vx = v[0],\n\
         \tvy = v[1],\n\
         \tvz = v[2],\n\
         \ttemp0 = sqrt(vx * vx + vy * vy + vz * vz);\n\
         out[0] = vx / temp0;\n\
         out[1] = vy / temp0;\n\
         out[2] = vz / temp0;\n"
    );
}

fn matrix_product(builder: &mut CodeBuilder, a: NodeId, b: NodeId, n: usize) -> NodeId {
    let mut cells = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let terms = (0..n)
                .map(|k| {
                    let left = builder.get(a, i * n + k).unwrap();
                    let right = builder.get(b, k * n + j).unwrap();
                    builder.apply("*", &[left, right]).unwrap()
                })
                .collect::<Vec<_>>();
            cells.push(builder.apply("+", &terms).unwrap());
        }
    }
    builder
        .vector(VectorShape::Components(cells), "product")
        .unwrap()
}

#[test]
fn test_matrix_product_names_cells() {
    let mut builder = CodeBuilder::new();
    let a = builder.matrix(2usize, "a").unwrap();
    let b = builder.matrix(2usize, "b").unwrap();
    let c = builder.matrix(2usize, "c").unwrap();

    let product = matrix_product(&mut builder, a, b, 2);
    builder.assign(c, product).unwrap();

    assert_eq!(
        builder.to_source(&[]).unwrap(),
        "let a00 = a[0],\n\
         \ta01 = a[1],\n\
         \tb00 = b[0],\n\
         \tb10 = b[2],\n\
         \ta10 = a[2],\n\
         \tb01 = b[1],\n\
         \ta11 = a[3],\n\
         \tb11 = b[3];\n\
         c[0] = a00 * b00 + a01 * b10;\n\
         c[1] = a00 * b01 + a01 * b11;\n\
         c[2] = a10 * b00 + a11 * b10;\n\
         c[3] = a10 * b01 + a11 * b11;\n"
    );
}

#[test]
fn test_phi_merge() {
    let mut builder = CodeBuilder::new();
    let (x, y) = scalars(&mut builder);

    let smaller = builder.phi(PhiTest::new(x, "<", y), x, y, None).unwrap();
    let squared = builder.apply("*", &[smaller, smaller]).unwrap();

    assert_eq!(
        source_returning(&mut builder, squared),
        "let phi = x < y ? x : y;\nreturn phi * phi;\n"
    );
}

#[test]
fn test_phi_names_advance() {
    let mut builder = CodeBuilder::new();
    let (x, y) = scalars(&mut builder);

    let first = builder.phi(PhiTest::new(x, "<", y), x, y, None).unwrap();
    let second = builder.phi(PhiTest::new(x, ">", y), x, y, None).unwrap();
    let third = builder
        .phi(PhiTest::new(x, "==", y), first, second, Some("phi"))
        .unwrap();

    let names: Vec<_> = builder
        .assignments()
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["phi", "phi2", "phi0"]);
    assert_eq!(
        builder.assignments()[2].expression,
        "x == y ? phi : phi2"
    );
    assert_eq!(builder.identity_count(), 5);
    let _ = third;
}

#[test]
fn test_store_without_field_aliasing() {
    let config = BuilderConfig::default().alias_fields(false);
    let mut builder = CodeBuilder::with_config(config).unwrap();
    let out = builder.vector(2usize, "out").unwrap();
    let v = builder.vector(2usize, "v").unwrap();

    builder.assign(out, v).unwrap();
    let out0 = builder.get(out, 0).unwrap();
    let out1 = builder.get(out, 1).unwrap();
    let sum = builder.apply("+", &[out0, out1]).unwrap();

    assert_eq!(
        source_returning(&mut builder, sum),
        "out[0] = v[0];\nout[1] = v[1];\nreturn out[0] + out[1];\n"
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Emission settings and sinks
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_custom_keyword_and_indent() {
    let config = BuilderConfig::default().emit(|e| e.declaration_keyword("var").indent("  "));
    let mut builder = CodeBuilder::with_config(config).unwrap();
    let (x, y) = scalars(&mut builder);

    let s = builder.apply("+", &[x, y]).unwrap();
    let d = builder.apply("-", &[x, y]).unwrap();
    let p = builder.apply("*", &[s, d]).unwrap();
    let q = builder.apply("/", &[s, d]).unwrap();
    let total = builder.apply("+", &[p, q]).unwrap();

    assert_eq!(
        source_returning(&mut builder, total),
        "var temp0 = x + y,\n  temp1 = x - y;\nreturn temp0 * temp1 + temp0 / temp1;\n"
    );
}

#[derive(Default)]
struct RecordingSink {
    lines: Vec<(usize, String)>,
    depth: usize,
}

impl SourceSink for RecordingSink {
    fn writeln(&mut self, line: &str) -> Result<(), SinkError> {
        self.lines.push((self.depth, line.to_string()));
        Ok(())
    }

    fn tab(&mut self) {
        self.depth += 1;
    }

    fn untab(&mut self) -> Result<(), SinkError> {
        self.depth = self.depth.checked_sub(1).ok_or(SinkError::Underflow)?;
        Ok(())
    }
}

#[test]
fn test_custom_sink_sees_raw_lines() {
    let mut builder = CodeBuilder::new();
    let v = builder.vector(2usize, "v").unwrap();
    let v0 = builder.get(v, 0).unwrap();
    let v1 = builder.get(v, 1).unwrap();
    let p = builder.apply("*", &[v0, v0]).unwrap();
    let q = builder.apply("*", &[v1, v1]).unwrap();
    let sum = builder.apply("+", &[p, q]).unwrap();
    let out = builder.output(sum).unwrap();

    let mut sink = RecordingSink::default();
    builder
        .write(&mut sink, &[Terminal::from(out), Terminal::from("// end")])
        .unwrap();

    assert_eq!(
        sink.lines,
        vec![
            (0, "let vx = v[0],".to_string()),
            (1, "vy = v[1];".to_string()),
            (0, "return vx * vx + vy * vy".to_string()),
            (0, "// end".to_string()),
        ]
    );
    assert_eq!(sink.depth, 0);
}
