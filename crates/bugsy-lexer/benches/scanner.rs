use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use bugsy_lexer::{tokenize, DiscardDiagnostics, Scanner};

const PROGRAM: &str = r#"// Recursive fibonacci
fun fib(n) {
  if (n <= 1) return n;
  return fib(n - 2) + fib(n - 1);
}

class Counter {
  init() { this.count = 0; }
  tick() { this.count = this.count + 1.5; return this; }
}

var c = Counter();
for (var i = 0; i < 20; i = i + 1) {
  print fib(i) >= 100 and "big" or "small";
  c.tick();
}
"#;

fn bench_scan(c: &mut Criterion) {
    let source = PROGRAM.repeat(64);

    let mut group = c.benchmark_group("scanner");
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("scan_tokens", |b| {
        b.iter(|| Scanner::new(black_box(&source)).scan_tokens(&mut DiscardDiagnostics))
    });

    group.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(&source))));

    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
