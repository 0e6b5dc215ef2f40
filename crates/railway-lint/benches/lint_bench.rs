use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use railway_lint::syntax::{LogicalOp, ProgramBuilder};
use railway_lint::types::{ObjectType, Parameter};
use railway_lint::{Linter, Program, TypeId};

/// Synthetic file with `statements` groups of floating calls, conditionals,
/// callbacks and spreads.
fn synthetic_program(statements: usize) -> Program {
    let mut b = ProgramBuilder::new();
    let result = b.result_type(TypeId::NUMBER, TypeId::STRING);
    let maybe = b.types_mut().union(vec![result, TypeId::UNDEFINED]);
    let void_fn = b.types_mut().function(vec![], TypeId::VOID);
    let result_fn = b.types_mut().function(vec![], result);
    let on_ty = b
        .types_mut()
        .function(vec![Parameter::new("listener", void_fn)], TypeId::VOID);
    let empty_obj = b.types_mut().object(ObjectType::new());

    let mut body = Vec::with_capacity(statements * 4);
    for _ in 0..statements {
        let fetch = b.ident("fetch", result_fn);
        let call = b.call(fetch, vec![], result);
        body.push(b.expr_stmt(call));

        let a = b.ident("a", result);
        let c = b.ident("c", maybe);
        let test = b.logical(LogicalOp::And, a, c, maybe);
        let block = b.block(vec![]);
        body.push(b.if_stmt(test, block, None));

        let on = b.ident("on", on_ty);
        let load = b.ident("load", result_fn);
        let subscribe = b.call(on, vec![load], TypeId::VOID);
        body.push(b.expr_stmt(subscribe));

        let r = b.ident("r", maybe);
        let spread = b.spread(r);
        let obj = b.object(vec![spread], empty_obj);
        let x = b.ident("x", empty_obj);
        let declarator = b.declarator(x, Some(obj));
        body.push(b.var_decl(vec![declarator]));
    }
    b.finish(body)
}

fn bench_lint(c: &mut Criterion) {
    let mut group = c.benchmark_group("lint_program");
    let linter = Linter::new();

    for size in [10usize, 100, 1000] {
        let program = synthetic_program(size);
        group.throughput(Throughput::Elements(program.tree().len() as u64));
        group.bench_with_input(BenchmarkId::new("statements", size), &program, |b, program| {
            b.iter(|| linter.lint_program(black_box(program), "bench.ts"));
        });
    }

    group.finish();
}

fn bench_json_load(c: &mut Criterion) {
    let json = synthetic_program(100).to_json_string().unwrap();

    c.bench_function("program_from_json", |b| {
        b.iter(|| Program::from_json_str(black_box(&json)).unwrap());
    });
}

criterion_group!(benches, bench_lint, bench_json_load);
criterion_main!(benches);
