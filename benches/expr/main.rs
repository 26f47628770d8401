mod expr_bindparse;
mod expr_nom;

use criterion::{black_box, criterion_group, Criterion};
use expr_bindparse::bindparse_parser;
use expr_nom::nom_parser;
use log::trace;

const EXPR: &str = "  12 * (3 + 4) - 6 / 2
  + ((1 + 2) * (3 + 4) * (5 - 6)) ";

const EXPECTED: i64 = 12 * (3 + 4) - 6 / 2 + ((1 + 2) * (3 + 4) * (5 - 6));

pub fn bench_nom(c: &mut Criterion) {
    c.bench_function("expr_nom", |b| b.iter(|| nom_parser(black_box(EXPR))));
}

pub fn bench_bindparse(c: &mut Criterion) {
    let parser = expr_bindparse::calculator();
    c.bench_function("expr_bindparse", |b| {
        b.iter(|| bindparse_parser(&parser, black_box(EXPR)))
    });
}

criterion_group!(benches, bench_nom, bench_bindparse);

fn main() {
    env_logger::init();
    trace!(target: "bp", "Logging enabled");
    assert_eq!(nom_parser(EXPR), Some(EXPECTED));
    assert_eq!(bindparse_parser(&expr_bindparse::calculator(), EXPR), Some(EXPECTED));
    benches();
    Criterion::default().configure_from_args().final_summary();
}
