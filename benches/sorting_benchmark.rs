use cmpsort::{Chain, Sort1Ext, ndarray::Array1};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;

fn bench_integers(c: &mut Criterion) {
	let mut group = c.benchmark_group("Integer Sort");
	group.sample_size(20);

	let mut rng = rand::rng();
	let count = 10_000;
	let input = (0..count)
		.map(|_| rng.random::<u64>())
		.collect::<Vec<_>>();

	group.bench_function("quick_sort", |b| {
		b.iter_batched(
			|| Array1::from_vec(input.clone()),
			|mut data| data.quick_sort(),
			BatchSize::SmallInput,
		)
	});

	group.bench_function("merge_sort", |b| {
		b.iter_batched(
			|| Array1::from_vec(input.clone()),
			|mut data| data.merge_sort(),
			BatchSize::SmallInput,
		)
	});

	group.bench_function("Chain::sort", |b| {
		b.iter_batched(
			|| input.iter().copied().collect::<Chain<_>>(),
			|mut data| data.sort(),
			BatchSize::SmallInput,
		)
	});

	group.bench_function("slice::sort (stable)", |b| {
		b.iter_batched(
			|| input.clone(),
			|mut data| black_box(&mut data).sort(),
			BatchSize::SmallInput,
		)
	});

	group.bench_function("slice::sort_unstable", |b| {
		b.iter_batched(
			|| input.clone(),
			|mut data| black_box(&mut data).sort_unstable(),
			BatchSize::SmallInput,
		)
	});

	group.finish();
}

fn bench_presorted(c: &mut Criterion) {
	let mut group = c.benchmark_group("Presorted");
	group.sample_size(20);

	let input = (0..100_000u32).collect::<Vec<_>>();

	group.bench_function("merge_sort", |b| {
		b.iter_batched(
			|| Array1::from_vec(input.clone()),
			|mut data| data.merge_sort(),
			BatchSize::SmallInput,
		)
	});

	group.bench_function("quick_sort", |b| {
		b.iter_batched(
			|| Array1::from_vec(input.clone()),
			|mut data| data.quick_sort(),
			BatchSize::SmallInput,
		)
	});

	group.bench_function("insertion_sort", |b| {
		b.iter_batched(
			|| Array1::from_vec(input.clone()),
			|mut data| data.insertion_sort(),
			BatchSize::SmallInput,
		)
	});

	group.finish();
}

fn bench_strided(c: &mut Criterion) {
	let mut group = c.benchmark_group("Strided Column");
	group.sample_size(20);

	let mut rng = rand::rng();
	let input = Array1::from_iter((0..3 * 10_000).map(|_| rng.random::<i32>()))
		.into_shape_with_order((10_000, 3))
		.expect("shape matches length");

	group.bench_function("quick_sort", |b| {
		b.iter_batched(
			|| input.clone(),
			|mut data| data.column_mut(1).quick_sort(),
			BatchSize::SmallInput,
		)
	});

	group.bench_function("merge_sort", |b| {
		b.iter_batched(
			|| input.clone(),
			|mut data| data.column_mut(1).merge_sort(),
			BatchSize::SmallInput,
		)
	});

	group.finish();
}

criterion_group!(benches, bench_integers, bench_presorted, bench_strided);
criterion_main!(benches);
