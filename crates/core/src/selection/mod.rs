// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Run-length encoded row selections.
//!
//! A [`RunLengthSelection`] is written once, in ascending row order, and read many
//! times afterwards. Every appended row either extends the last run or opens a new
//! one, so contiguous rows cost a single `(start, len)` pair.

use serde::{Deserialize, Serialize};

pub use iter::SelectionIter;
pub use run::Run;

use crate::{Error, Result};

mod iter;
mod run;

/// Ascending, append-only set of row positions stored as runs.
///
/// Runs are never empty, ascending, and never touch: a run always ends strictly
/// before the next one starts. Deserialization checks the same rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSelection")]
pub struct RunLengthSelection {
	runs: Vec<Run>,
}

#[derive(Deserialize)]
struct RawSelection {
	runs: Vec<Run>,
}

impl TryFrom<RawSelection> for RunLengthSelection {
	type Error = Error;

	fn try_from(raw: RawSelection) -> Result<Self> {
		Self::try_from(raw.runs)
	}
}

impl TryFrom<Vec<Run>> for RunLengthSelection {
	type Error = Error;

	fn try_from(runs: Vec<Run>) -> Result<Self> {
		if let Some(run) = runs.iter().find(|run| run.len == 0) {
			return Err(Error::InvalidSelection {
				reason: format!("empty run at {}", run.start),
			});
		}

		if let Some(pair) = runs.windows(2).find(|pair| pair[0].end() >= pair[1].start) {
			return Err(Error::InvalidSelection {
				reason: format!(
					"run at {} must start after {}",
					pair[1].start,
					pair[0].end()
				),
			});
		}

		Ok(Self {
			runs,
		})
	}
}

impl RunLengthSelection {
	pub fn new() -> Self {
		Self {
			runs: Vec::new(),
		}
	}

	/// Adds `index` to the selection.
	///
	/// `index` must be greater than every index appended before it. Rows arrive in
	/// input order during grouping, so a violation is a bug in the caller.
	pub fn append(&mut self, index: usize) {
		if let Some(last) = self.runs.last_mut() {
			debug_assert!(
				index >= last.end(),
				"RunLengthSelection append out of order: {index} after {}",
				last.end() - 1
			);
			if last.end() == index {
				last.len += 1;
				return;
			}
		}
		self.runs.push(Run::new(index, 1));
	}

	pub fn runs(&self) -> &[Run] {
		&self.runs
	}

	/// Number of selected rows. Only scans run metadata.
	pub fn count(&self) -> usize {
		self.runs.iter().map(|run| run.len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.runs.is_empty()
	}

	pub fn iter(&self) -> SelectionIter<'_> {
		SelectionIter {
			runs: self.runs.iter(),
			current: 0..0,
			remaining: self.count(),
		}
	}

	pub fn contains(&self, index: usize) -> bool {
		let idx = self.runs.partition_point(|run| run.end() <= index);
		self.runs.get(idx).is_some_and(|run| run.contains(index))
	}
}

impl<'a> IntoIterator for &'a RunLengthSelection {
	type Item = usize;
	type IntoIter = SelectionIter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl Extend<usize> for RunLengthSelection {
	fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
		for index in iter {
			self.append(index);
		}
	}
}

impl FromIterator<usize> for RunLengthSelection {
	fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
		let mut result = RunLengthSelection::new();
		result.extend(iter);
		result
	}
}
