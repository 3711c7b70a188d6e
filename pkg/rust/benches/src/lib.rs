// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Benchmark inputs for runslice.
//!
//! Run benchmarks with: `cargo bench -p runslice-benches`

use runslice_core::Record;
use runslice_testing::{GenerateConfig, SkewModel, generate};

pub const ROWS: usize = 100_000;
pub const CATEGORIES: usize = 1_000;
pub const SKEWNESS: [f64; 5] = [0.1, 0.3, 0.5, 0.7, 0.9];
pub const KEY_COLUMNS: [&str; 1] = ["category"];

/// Seeded input for one benchmark point.
pub fn records(skewness: f64, model: SkewModel) -> Vec<Record> {
	generate(&GenerateConfig::new(ROWS, skewness, CATEGORIES).model(model)).expect("valid benchmark config")
}
