// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A contiguous block of selected rows, `[start, start + len)`. `len` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
	pub start: usize,
	pub len: usize,
}

impl Run {
	pub fn new(start: usize, len: usize) -> Self {
		debug_assert!(len > 0, "Run must cover at least one row");
		Self {
			start,
			len,
		}
	}

	/// One past the last selected row.
	pub fn end(&self) -> usize {
		self.start + self.len
	}

	pub fn range(&self) -> Range<usize> {
		self.start..self.end()
	}

	pub fn contains(&self, index: usize) -> bool {
		index >= self.start && index < self.end()
	}
}

impl From<(usize, usize)> for Run {
	fn from((start, len): (usize, usize)) -> Self {
		Run::new(start, len)
	}
}
