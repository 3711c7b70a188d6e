// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{iter::FusedIterator, ops::Range, slice};

use crate::selection::Run;

/// Expands the runs of a selection back into ascending row positions.
pub struct SelectionIter<'a> {
	pub(crate) runs: slice::Iter<'a, Run>,
	pub(crate) current: Range<usize>,
	pub(crate) remaining: usize,
}

impl<'a> Iterator for SelectionIter<'a> {
	type Item = usize;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			if let Some(index) = self.current.next() {
				self.remaining -= 1;
				return Some(index);
			}
			self.current = self.runs.next()?.range();
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl ExactSizeIterator for SelectionIter<'_> {}

impl FusedIterator for SelectionIter<'_> {}
