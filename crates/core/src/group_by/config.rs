// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Configuration for a [`GroupBy`](crate::GroupBy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupByConfig {
	/// Placed between key components when a group key is rendered.
	pub separator: String,
	/// Number of distinct keys to reserve room for up front.
	pub capacity: usize,
}

impl Default for GroupByConfig {
	fn default() -> Self {
		Self {
			separator: "_".to_string(),
			capacity: 0,
		}
	}
}

impl GroupByConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn separator(mut self, separator: impl Into<String>) -> Self {
		self.separator = separator.into();
		self
	}

	pub fn capacity(mut self, capacity: usize) -> Self {
		self.capacity = capacity;
		self
	}

	pub(crate) fn validate(&self) -> Result<()> {
		if self.separator.is_empty() {
			return Err(Error::InvalidConfig {
				reason: "separator must not be empty".to_string(),
			});
		}
		Ok(())
	}
}
