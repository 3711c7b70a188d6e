// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Test and benchmark support for runslice.
//!
//! - [`generate`] samples skewed categorical records from a seeded RNG
//! - [`reference`] recomputes per-key counts and means the slow way
//! - [`init_tracing`] routes `tracing` output to the test harness

pub use generate::{GenerateConfig, GenerateError, SkewModel, category_names, generate};
pub use log::init_tracing;
pub use reference::{ReferenceGroup, approx_eq, by_first_row, reference_groups};

pub mod generate;
mod log;
pub mod reference;
