// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::borrow::Borrow;

/// A single component of a [`GroupKey`], borrowed from the row it was read from.
///
/// Floats are held by bit pattern so the key can be hashed and compared
/// structurally. `0.0` and `-0.0` therefore form distinct groups, as do NaNs
/// with different payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPart<'a> {
	Text(&'a str),
	Float(u64),
}

impl KeyPart<'_> {
	pub fn float(value: f64) -> Self {
		KeyPart::Float(value.to_bits())
	}

	fn render(&self, out: &mut String) {
		match self {
			KeyPart::Text(text) => out.push_str(text),
			KeyPart::Float(bits) => {
				out.push_str(&f64::from_bits(*bits).to_string());
			}
		}
	}
}

/// Grouping key built from the requested columns of a row, in column order.
///
/// Grouping hashes the tuple itself, never its rendered name, so
/// `("a_b", "c")` and `("a", "b_c")` stay apart even though both render to
/// `a_b_c`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GroupKey<'a>(pub Vec<KeyPart<'a>>);

impl GroupKey<'_> {
	/// Joins the string form of every part with `separator`, without a trailing
	/// separator. An empty key renders as `""`.
	pub fn render(&self, separator: &str) -> String {
		let mut result = String::new();
		for (idx, part) in self.0.iter().enumerate() {
			if idx > 0 {
				result.push_str(separator);
			}
			part.render(&mut result);
		}
		result
	}
}

// Lets the key map be probed with a reused scratch slice; the derived `Hash`
// of the newtype matches the slice hash.
impl<'a> Borrow<[KeyPart<'a>]> for GroupKey<'a> {
	fn borrow(&self) -> &[KeyPart<'a>] {
		&self.0
	}
}
