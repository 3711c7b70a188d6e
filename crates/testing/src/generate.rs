// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Synthetic categorical data.
//!
//! Records are named `Cat_<i>` with values uniform in `[0, 100)`. How the rows
//! spread over the categories is controlled by `skewness` and a [`SkewModel`].
//! Generation is seeded, so the same config always yields the same records.

use rand::{
	Rng, SeedableRng,
	distr::{Distribution, weighted::WeightedIndex},
	rngs::StdRng,
};
use runslice_core::Record;
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkewModel {
	/// Category `i` is drawn with weight `i^skewness`.
	Weighted,
	/// Category index is `floor(categories * u^(1 - skewness))` for uniform `u`.
	#[default]
	Power,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
	pub rows: usize,
	pub categories: usize,
	/// Within `[0, 1]`.
	pub skewness: f64,
	pub seed: u64,
	pub model: SkewModel,
}

impl Default for GenerateConfig {
	fn default() -> Self {
		Self {
			rows: 100_000,
			categories: 1_000,
			skewness: 0.5,
			seed: 19,
			model: SkewModel::Power,
		}
	}
}

impl GenerateConfig {
	pub fn new(rows: usize, skewness: f64, categories: usize) -> Self {
		Self {
			rows,
			categories,
			skewness,
			..Self::default()
		}
	}

	pub fn seed(mut self, seed: u64) -> Self {
		self.seed = seed;
		self
	}

	pub fn model(mut self, model: SkewModel) -> Self {
		self.model = model;
		self
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
	#[error("Cannot generate {rows} rows without any category")]
	NoCategories {
		rows: usize,
	},

	#[error("Skewness must be within [0, 1], got {skewness}")]
	InvalidSkewness {
		skewness: f64,
	},

	#[error("Category weights are unusable: {reason}")]
	InvalidWeights {
		reason: String,
	},
}

pub fn category_names(count: usize) -> Vec<String> {
	(0..count).map(|idx| format!("Cat_{idx}")).collect()
}

#[instrument(
	name = "testing::generate",
	level = "debug",
	skip(config),
	fields(rows = config.rows, categories = config.categories, skewness = config.skewness)
)]
pub fn generate(config: &GenerateConfig) -> Result<Vec<Record>, GenerateError> {
	if !(0.0..=1.0).contains(&config.skewness) {
		return Err(GenerateError::InvalidSkewness {
			skewness: config.skewness,
		});
	}
	if config.rows == 0 {
		return Ok(Vec::new());
	}
	if config.categories == 0 {
		return Err(GenerateError::NoCategories {
			rows: config.rows,
		});
	}

	let names = category_names(config.categories);
	let sampler = Sampler::new(config)?;
	let mut rng = StdRng::seed_from_u64(config.seed);

	let mut result = Vec::with_capacity(config.rows);
	for _ in 0..config.rows {
		let category = sampler.sample(&mut rng);
		let value = rng.random_range(0.0..100.0);
		result.push(Record::new(names[category].clone(), value));
	}
	Ok(result)
}

enum Sampler {
	Weighted(WeightedIndex<f64>),
	Power {
		categories: usize,
		exponent: f64,
	},
}

impl Sampler {
	fn new(config: &GenerateConfig) -> Result<Self, GenerateError> {
		match config.model {
			SkewModel::Weighted => {
				let weights = (0..config.categories).map(|idx| (idx as f64).powf(config.skewness));
				WeightedIndex::new(weights).map(Sampler::Weighted).map_err(|err| {
					GenerateError::InvalidWeights {
						reason: err.to_string(),
					}
				})
			}
			SkewModel::Power => Ok(Sampler::Power {
				categories: config.categories,
				exponent: 1.0 - config.skewness,
			}),
		}
	}

	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
		match self {
			Sampler::Weighted(distribution) => distribution.sample(rng),
			Sampler::Power {
				categories,
				exponent,
			} => {
				let uniform: f64 = rng.random();
				let idx = (*categories as f64 * uniform.powf(*exponent)).floor() as usize;
				idx.min(categories - 1)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn test_category_names() {
		assert_eq!(category_names(3), vec!["Cat_0", "Cat_1", "Cat_2"]);
	}

	#[test]
	fn test_row_count_and_ranges() {
		for model in [SkewModel::Power, SkewModel::Weighted] {
			let records = generate(&GenerateConfig::new(2_000, 0.3, 50).model(model)).unwrap();
			assert_eq!(records.len(), 2_000);

			let names: HashSet<String> = category_names(50).into_iter().collect();
			for record in &records {
				assert!(names.contains(&record.category), "unexpected category {}", record.category);
				assert!((0.0..100.0).contains(&record.value));
			}
		}
	}

	#[test]
	fn test_seeded() {
		let config = GenerateConfig::new(500, 0.7, 20).seed(42);
		assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());

		let other = generate(&config.clone().seed(43)).unwrap();
		assert_ne!(generate(&config).unwrap(), other);
	}

	#[test]
	fn test_weighted_never_draws_first_category() {
		let records = generate(&GenerateConfig::new(1_000, 0.9, 10).model(SkewModel::Weighted)).unwrap();
		assert!(records.iter().all(|record| record.category != "Cat_0"));
	}

	#[test]
	fn test_weighted_zero_skew_is_uniform_over_all() {
		let records = generate(&GenerateConfig::new(5_000, 0.0, 4).model(SkewModel::Weighted)).unwrap();
		let seen: HashSet<&str> = records.iter().map(|record| record.category.as_str()).collect();
		assert_eq!(seen.len(), 4);
	}

	#[test]
	fn test_full_skew_power_collapses_to_last() {
		let records = generate(&GenerateConfig::new(100, 1.0, 8)).unwrap();
		assert!(records.iter().all(|record| record.category == "Cat_7"));
	}

	#[test]
	fn test_empty() {
		assert!(generate(&GenerateConfig::new(0, 0.5, 0)).unwrap().is_empty());
	}

	#[test]
	fn test_no_categories() {
		let err = generate(&GenerateConfig::new(10, 0.5, 0)).unwrap_err();
		assert_eq!(
			err,
			GenerateError::NoCategories {
				rows: 10
			}
		);
	}

	#[test]
	fn test_invalid_skewness() {
		assert!(matches!(
			generate(&GenerateConfig::new(10, 1.5, 4)),
			Err(GenerateError::InvalidSkewness { .. })
		));
		assert!(matches!(
			generate(&GenerateConfig::new(10, f64::NAN, 4)),
			Err(GenerateError::InvalidSkewness { .. })
		));
	}

	#[test]
	fn test_weighted_single_category() {
		let err = generate(&GenerateConfig::new(10, 0.5, 1).model(SkewModel::Weighted)).unwrap_err();
		assert!(matches!(err, GenerateError::InvalidWeights { .. }));
	}
}
