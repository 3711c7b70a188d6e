// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Straightforward per-key recomputation used as an oracle in tests.

use std::collections::BTreeMap;

use runslice_core::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceGroup {
	/// Rendered key, the same string a grouping result reports.
	pub key: String,
	pub rows: Vec<usize>,
	pub mean: f64,
}

impl ReferenceGroup {
	pub fn count(&self) -> usize {
		self.rows.len()
	}
}

/// Buckets every row under the tuple of its key fields, then averages each
/// bucket by rescanning the rows it holds.
///
/// Buckets are keyed by the field strings themselves, so tuples whose rendered
/// keys coincide stay separate. Look groups up by their first row with
/// [`by_first_row`].
///
/// Panics on a column other than `category` or `value`.
pub fn reference_groups(
	records: &[Record],
	key_columns: &[&str],
	separator: &str,
) -> BTreeMap<Vec<String>, ReferenceGroup> {
	let mut buckets: BTreeMap<Vec<String>, Vec<usize>> = BTreeMap::new();
	for (idx, record) in records.iter().enumerate() {
		let parts: Vec<String> = key_columns
			.iter()
			.map(|column| match column.to_ascii_lowercase().as_str() {
				"category" => record.category.clone(),
				"value" => record.value.to_string(),
				other => panic!("unknown column {other}"),
			})
			.collect();
		buckets.entry(parts).or_default().push(idx);
	}

	buckets.into_iter()
		.map(|(parts, rows)| {
			let sum: f64 = rows.iter().map(|&idx| records[idx].value).sum();
			let mean = sum / rows.len() as f64;
			let key = parts.join(separator);
			(parts, ReferenceGroup {
				key,
				rows,
				mean,
			})
		})
		.collect()
}

/// Indexes reference groups by the first row they hold. Every group holds at
/// least one row, and no row belongs to two groups.
pub fn by_first_row(groups: &BTreeMap<Vec<String>, ReferenceGroup>) -> BTreeMap<usize, &ReferenceGroup> {
	groups.values().map(|group| (group.rows[0], group)).collect()
}

/// Relative comparison, floored at an absolute `tolerance` for values near zero.
pub fn approx_eq(left: f64, right: f64, tolerance: f64) -> bool {
	if left == right {
		return true;
	}
	(left - right).abs() <= tolerance * left.abs().max(right.abs()).max(1.0)
}
