//! Criterion benchmarks for the termnet pipeline.
//!
//! Covers the analytically heavy stages:
//! - Tokenization and normalization
//! - Co-occurrence matrix construction
//! - Graph construction and metric annotation

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use termnet::algorithms::{LabelPropagation, PageRank};
use termnet::analysis::analyzer::{Analyzer, default_analyzer};
use termnet::corpus::Document;
use termnet::graph::{GraphBuilder, annotate};
use termnet::matrix::CooccurrenceMatrix;

/// Generate short synthetic documents over a bounded vocabulary.
fn generate_documents(count: usize) -> Vec<Document> {
    let words = [
        "rede", "escola", "ensino", "pesquisa", "aluno", "professor", "aula", "leitura",
        "escrita", "ciencia", "projeto", "avaliacao", "gestao", "curriculo", "formacao",
        "tecnologia", "inclusao", "comunidade", "familia", "politica", "publico", "municipal",
        "estadual", "federal", "infantil", "fundamental", "medio", "superior", "docente",
        "discente", "biblioteca", "laboratorio",
    ];

    (0..count)
        .map(|i| {
            let len = 6 + (i % 10);
            let tokens = (0..len)
                .map(|j| words[(i * 7 + j * 3) % words.len()].to_string())
                .collect();
            Document::new(i, tokens)
        })
        .collect()
}

fn bench_analysis(c: &mut Criterion) {
    let analyzer = default_analyzer(Vec::<String>::new(), &[]);
    let text = "As pesquisas educacionais não avançam sem uma rede de escolas, \
                professores e comunidades; a avaliação curricular é contínua.";

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("default_analyzer", |b| {
        b.iter(|| analyzer.analyze_terms(black_box(text)).unwrap())
    });
    group.finish();
}

fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");
    for count in [100, 1000] {
        let documents = generate_documents(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(BenchmarkId::new("from_documents", count), |b| {
            b.iter(|| CooccurrenceMatrix::from_documents(black_box(&documents)))
        });
    }
    group.finish();
}

fn bench_graph(c: &mut Criterion) {
    let documents = generate_documents(1000);
    let matrix = CooccurrenceMatrix::from_documents(&documents);

    let mut group = c.benchmark_group("graph");
    group.bench_function("from_matrix", |b| {
        b.iter(|| GraphBuilder::from_matrix(black_box(&matrix)))
    });
    group.bench_function("annotate", |b| {
        b.iter(|| {
            let graph = GraphBuilder::from_matrix(&matrix);
            annotate(graph, &matrix, &LabelPropagation::new(), &PageRank::new()).unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_analysis, bench_matrix, bench_graph);
criterion_main!(benches);
