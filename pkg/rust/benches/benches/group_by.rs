// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Group by category and mean over skewed inputs.

use std::{hint::black_box, time::Duration};

use criterion::{BenchmarkGroup, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main, measurement::WallTime};
use runslice_benches::{KEY_COLUMNS, ROWS, SKEWNESS, records};
use runslice_core::{GroupBy, GroupByConfig, group_and_aggregate};
use runslice_testing::SkewModel;

fn configure_group(group: &mut BenchmarkGroup<WallTime>) {
	group.measurement_time(Duration::from_secs(10));
	group.warm_up_time(Duration::from_secs(3));
	group.sample_size(100);
	group.throughput(Throughput::Elements(ROWS as u64));
}

fn benchmark_split_on_and_mean(c: &mut Criterion) {
	for (name, model) in [("power", SkewModel::Power), ("weighted", SkewModel::Weighted)] {
		let mut group = c.benchmark_group(format!("split_on_and_mean_{name}"));
		configure_group(&mut group);

		for skewness in SKEWNESS {
			let data = records(skewness, model);
			group.bench_with_input(BenchmarkId::new("skewness", skewness), &data, |b, data| {
				b.iter(|| {
					let groups = group_and_aggregate(black_box(data), &KEY_COLUMNS).unwrap();
					black_box(groups);
				});
			});
		}

		group.finish();
	}
}

fn benchmark_presized(c: &mut Criterion) {
	let mut group = c.benchmark_group("split_on_and_mean_presized");
	configure_group(&mut group);

	let group_by = GroupBy::with_config(&KEY_COLUMNS, GroupByConfig::new().capacity(1_000)).unwrap();
	for skewness in SKEWNESS {
		let data = records(skewness, SkewModel::Power);
		group.bench_with_input(BenchmarkId::new("skewness", skewness), &data, |b, data| {
			b.iter(|| black_box(group_by.execute(black_box(data))));
		});
	}

	group.finish();
}

criterion_group!(benches, benchmark_split_on_and_mean, benchmark_presized);
criterion_main!(benches);
