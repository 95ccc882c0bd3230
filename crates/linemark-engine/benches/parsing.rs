use criterion::{Criterion, criterion_group, criterion_main};
use linemark_engine::{Grammar, InlineParser, parse_text};
use pulldown_cmark::Parser;
mod common;

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let grammar = Grammar::standard().expect("built-in grammar compiles");
    let content = common::generate_markdown_content(100);

    group.bench_function("linemark_document", |b| {
        b.iter(|| {
            let doc = parse_text(&grammar, std::hint::black_box(&content)).expect("parses");
            std::hint::black_box(doc.lines);
        });
    });

    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let events: Vec<_> = parser.collect();
            std::hint::black_box(events);
        });
    });

    group.finish();
}

fn bench_inline(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");
    group.sample_size(10);

    let grammar = Grammar::standard().expect("built-in grammar compiles");
    let parser = InlineParser::new(grammar.inline());

    let emphasis = common::generate_emphasis_heavy_line(50);
    group.bench_function("emphasis_heavy_line", |b| {
        b.iter(|| parser.render(std::hint::black_box(&emphasis)).expect("renders"));
    });

    let brackets = common::generate_bracket_bomb(200);
    group.bench_function("bracket_bomb", |b| {
        b.iter(|| parser.render(std::hint::black_box(&brackets)).expect("renders"));
    });

    group.finish();
}

criterion_group!(benches, bench_document, bench_inline);
criterion_main!(benches);
