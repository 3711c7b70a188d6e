// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Hash group-by with run-length encoded membership.
//!
//! Grouping runs in two passes over the input:
//! 1. every row's key is built from the requested columns and its position is
//!    appended to the [`RunLengthSelection`] owned by that key,
//! 2. every selection is expanded back into rows to materialize the group and
//!    compute its mean.
//!
//! The key map only lives for the duration of one call. The order of the
//! returned groups is unspecified.

use std::collections::HashMap;

use tracing::{debug, instrument, trace};

pub use config::GroupByConfig;
pub use result::GroupResult;

use crate::{Field, GroupKey, Mean, Record, Result, RunLengthSelection, key::KeyPart};

mod config;
mod result;

/// Groups records on a fixed list of key columns.
#[derive(Debug, Clone)]
pub struct GroupBy {
	fields: Vec<Field>,
	config: GroupByConfig,
}

impl GroupBy {
	pub fn new<S: AsRef<str>>(key_columns: &[S]) -> Result<Self> {
		Self::with_config(key_columns, GroupByConfig::default())
	}

	/// Resolves `key_columns` against the record layout. Fails on the first
	/// unknown column, before any row is touched.
	pub fn with_config<S: AsRef<str>>(key_columns: &[S], config: GroupByConfig) -> Result<Self> {
		config.validate()?;
		let fields = key_columns.iter().map(|name| name.as_ref().parse()).collect::<Result<Vec<Field>>>()?;
		Ok(Self {
			fields,
			config,
		})
	}

	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	pub fn config(&self) -> &GroupByConfig {
		&self.config
	}

	#[instrument(
		name = "group_by::execute",
		level = "debug",
		skip(self, records),
		fields(rows = records.len(), columns = self.fields.len())
	)]
	pub fn execute<'a>(&self, records: &'a [Record]) -> Vec<GroupResult<'a>> {
		let selections = self.assign(records);

		debug!(
			groups = selections.len(),
			runs = selections.values().map(|selection| selection.runs().len()).sum::<usize>(),
			"assigned rows to groups"
		);

		selections.into_iter().map(|(key, selection)| self.materialize(records, key, selection)).collect()
	}

	fn assign<'a>(&self, records: &'a [Record]) -> HashMap<GroupKey<'a>, RunLengthSelection> {
		let mut result: HashMap<GroupKey<'a>, RunLengthSelection> = HashMap::with_capacity(self.config.capacity);
		let mut scratch: Vec<KeyPart<'a>> = Vec::with_capacity(self.fields.len());

		for (idx, record) in records.iter().enumerate() {
			scratch.clear();
			scratch.extend(self.fields.iter().map(|&field| record.key_part(field)));

			match result.get_mut(scratch.as_slice()) {
				Some(selection) => selection.append(idx),
				None => {
					let mut selection = RunLengthSelection::new();
					selection.append(idx);
					result.insert(GroupKey(scratch.clone()), selection);
				}
			}
		}

		result
	}

	fn materialize<'a>(
		&self,
		records: &'a [Record],
		key: GroupKey<'a>,
		selection: RunLengthSelection,
	) -> GroupResult<'a> {
		let count = selection.count();
		let mut rows = Vec::with_capacity(count);
		let mut mean = Mean::new();

		for run in selection.runs() {
			for record in &records[run.range()] {
				mean.update(record.value);
				rows.push(record);
			}
		}

		let key = key.render(&self.config.separator);
		trace!(key = %key, rows = count, runs = selection.runs().len(), "materialized group");

		GroupResult {
			key,
			selection,
			records: rows,
			mean: mean.finish(count),
		}
	}
}

/// Groups `records` on `key_columns` with the default configuration and
/// computes each group's mean.
pub fn group_and_aggregate<'a, S: AsRef<str>>(records: &'a [Record], key_columns: &[S]) -> Result<Vec<GroupResult<'a>>> {
	Ok(GroupBy::new(key_columns)?.execute(records))
}
