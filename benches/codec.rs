use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use valuecodec::{decode, Value, Writer, WriterPool};

/// Builds a list of `width` elements alternating strings and ints, with one
/// nested list per element to exercise recursion.
fn build_tree(width: usize, rng: &mut StdRng) -> Value<'static> {
    let mut items = Vec::with_capacity(width);
    for i in 0..width {
        if i % 2 == 0 {
            let len = rng.gen_range(8..64);
            let text: String = (0..len).map(|_| rng.gen_range('a'..='z')).collect();
            items.push(Value::List(vec![Value::from(text), Value::from(i as i32)]));
        } else {
            items.push(Value::from(rng.gen::<i32>()));
        }
    }
    Value::List(items)
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let mut rng = StdRng::seed_from_u64(42);

    for &width in &[10, 100, 1000] {
        let tree = build_tree(width, &mut rng);
        let mut writer = Writer::new();
        let encoded_len = writer.encode(&tree).unwrap().len();
        group.throughput(Throughput::Bytes(encoded_len as u64));

        group.bench_with_input(BenchmarkId::new("reused_writer", width), &tree, |b, tree| {
            b.iter(|| {
                let _ = writer.encode(tree).unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("fresh_writer", width), &tree, |b, tree| {
            b.iter(|| {
                let mut writer = Writer::new();
                let _ = writer.encode(tree).unwrap();
            });
        });

        let pool = WriterPool::new(4);
        group.bench_with_input(BenchmarkId::new("pooled_writer", width), &tree, |b, tree| {
            b.iter(|| {
                let mut writer = pool.acquire();
                let _ = writer.encode(tree).unwrap();
                pool.release(writer);
            });
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let mut rng = StdRng::seed_from_u64(42);

    for &width in &[10, 100, 1000] {
        let tree = build_tree(width, &mut rng);
        let mut writer = Writer::new();
        let encoded = writer.encode_to_bytes(&tree).unwrap();
        group.throughput(Throughput::Bytes(encoded.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(width), &encoded, |b, encoded| {
            b.iter(|| {
                let _ = decode(encoded).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
