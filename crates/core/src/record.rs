// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Error, key::KeyPart};

/// One input row: a category label and the value that gets averaged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
	pub category: String,
	pub value: f64,
}

impl Record {
	pub fn new(category: impl Into<String>, value: f64) -> Self {
		Self {
			category: category.into(),
			value,
		}
	}

	pub(crate) fn key_part(&self, field: Field) -> KeyPart<'_> {
		match field {
			Field::Category => KeyPart::Text(&self.category),
			Field::Value => KeyPart::float(self.value),
		}
	}
}

/// Addressable column of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	Category,
	Value,
}

impl Field {
	pub fn name(&self) -> &'static str {
		match self {
			Field::Category => "category",
			Field::Value => "value",
		}
	}
}

impl Display for Field {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Field {
	type Err = Error;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		if name.eq_ignore_ascii_case("category") {
			Ok(Field::Category)
		} else if name.eq_ignore_ascii_case("value") {
			Ok(Field::Value)
		} else {
			Err(Error::ColumnNotFound {
				name: name.to_string(),
			})
		}
	}
}
