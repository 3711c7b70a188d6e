// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Running arithmetic mean.
///
/// Values are summed in the order they are fed, which keeps the result
/// reproducible for a given input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mean {
	sum: f64,
}

impl Mean {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn update(&mut self, value: f64) {
		self.sum += value;
	}

	pub fn sum(&self) -> f64 {
		self.sum
	}

	/// Divides the accumulated sum by `count`, the number of rows in the group.
	pub fn finish(self, count: usize) -> f64 {
		debug_assert!(count > 0, "mean of an empty group");
		self.sum / count as f64
	}
}

#[cfg(test)]
mod tests {
	use super::Mean;

	#[test]
	fn test_mean() {
		let mut mean = Mean::new();
		for value in [1.0, 2.0, 3.0, 6.0] {
			mean.update(value);
		}
		assert_eq!(mean.sum(), 12.0);
		assert_eq!(mean.finish(4), 3.0);
	}

	#[test]
	fn test_single_value() {
		let mut mean = Mean::new();
		mean.update(-7.25);
		assert_eq!(mean.finish(1), -7.25);
	}
}
