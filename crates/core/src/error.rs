// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("Column '{name}' not found")]
	ColumnNotFound {
		name: String,
	},

	#[error("Invalid group by configuration: {reason}")]
	InvalidConfig {
		reason: String,
	},

	#[error("Invalid run length selection: {reason}")]
	InvalidSelection {
		reason: String,
	},
}

pub type Result<T> = std::result::Result<T, Error>;
