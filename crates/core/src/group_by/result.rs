// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::Serialize;

use crate::{Record, RunLengthSelection};

/// One materialized group: every record sharing a key, plus their mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupResult<'a> {
	/// Rendered group key, the key columns joined by the configured separator.
	pub key: String,
	/// Positions of the group's rows in the input.
	pub selection: RunLengthSelection,
	/// The group's rows, in input order.
	pub records: Vec<&'a Record>,
	pub mean: f64,
}

impl GroupResult<'_> {
	pub fn count(&self) -> usize {
		self.records.len()
	}
}
