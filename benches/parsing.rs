use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use optlex::{count, parse, parse_with_options, to_string, ParseOptions};

fn option_string(fields: usize) -> String {
    (0..fields)
        .map(|i| {
            if i % 3 == 0 {
                format!("flag{i}")
            } else {
                format!("key{i}=value{i}")
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let input = "uppercase,bold,font=12,typeface=bodoni,values='1,2,3,4'";

    c.bench_function("parse_simple", |b| b.iter(|| parse(black_box(input))));
}

fn benchmark_count_simple(c: &mut Criterion) {
    let input = "uppercase,bold,font=12,typeface=bodoni,values='1,2,3,4'";

    c.bench_function("count_simple", |b| b.iter(|| count(black_box(input))));
}

fn benchmark_parse_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_fields");

    for size in [10, 50, 100, 500].iter() {
        let input = option_string(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| parse(black_box(input)))
        });
    }
    group.finish();
}

fn benchmark_parse_quoted(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_quoted");

    let unquoted = option_string(100);
    let quoted = (0..100)
        .map(|i| format!("key{i}='a value, with separators; inside'"))
        .collect::<Vec<_>>()
        .join(",");
    let escaped = (0..100)
        .map(|i| format!("key{i}=a\\,b\\;c"))
        .collect::<Vec<_>>()
        .join(",");

    group.bench_function("plain", |b| b.iter(|| parse(black_box(&unquoted))));
    group.bench_function("quoted", |b| b.iter(|| parse(black_box(&quoted))));
    group.bench_function("escaped", |b| b.iter(|| parse(black_box(&escaped))));

    group.finish();
}

fn benchmark_parse_configured(c: &mut Criterion) {
    let input = option_string(100);
    let options = ParseOptions::new()
        .allow_multiple_separators()
        .newline_as_tag()
        .keep_quotes_in_args();

    c.bench_function("parse_configured", |b| {
        b.iter(|| parse_with_options(black_box(&input), black_box(&options)))
    });
}

fn benchmark_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_fields");

    for size in [10, 50, 100, 500].iter() {
        let opts = parse(&option_string(*size));

        group.bench_with_input(BenchmarkId::from_parameter(size), &opts, |b, opts| {
            b.iter(|| to_string(black_box(opts), ',', Some('=')))
        });
    }
    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let input = option_string(50);

    c.bench_function("roundtrip", |b| {
        b.iter(|| {
            let opts = parse(black_box(&input));
            to_string(black_box(&opts), ',', Some('='))
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_simple,
    benchmark_count_simple,
    benchmark_parse_by_size,
    benchmark_parse_quoted,
    benchmark_parse_configured,
    benchmark_serialize,
    benchmark_roundtrip
);
criterion_main!(benches);
