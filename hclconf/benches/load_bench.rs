use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hclconf::config::ConfigLoader;
use hclconf::parse_config;
use std::fs;
use tempfile::TempDir;

const SOURCE: &str = r#"
enable_auth = true

api {
  host = "0.0.0.0"
  port = 8080
}

cache {
  type = "redis"
  redis {
    host = "localhost:6379"
  }
}

rabbitmq "master" "primary" {
  consumer_tag = "orders"
  common {
    exchange      = "events"
    exchange_type = "topic"
  }
}

rabbitmq "local" "primary" {
  consumer_tag = "orders-dev"
}
"#;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("full_source", |b| {
        b.iter(|| parse_config(black_box(SOURCE), black_box("master")));
    });

    group.bench_function("empty_source", |b| {
        b.iter(|| parse_config(black_box(""), black_box("master")));
    });

    group.finish();
}

fn bench_load_dir(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_dir");

    for count in [1usize, 10, 50] {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..count {
            fs::write(temp_dir.path().join(format!("{i:03}.hcl")), SOURCE).unwrap();
        }

        let loader = ConfigLoader::new();
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| loader.load_dir(black_box(temp_dir.path()), "master"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_load_dir);
criterion_main!(benches);
