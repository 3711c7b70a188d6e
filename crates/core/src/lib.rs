// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Group records by a categorical key and compute a per-group mean.
//!
//! Group membership is never stored as a list of row indices. Each group owns a
//! [`RunLengthSelection`]: the ascending row positions of its members folded into
//! `(start, len)` runs. Clustered categorical data collapses into a handful of runs
//! no matter how many rows it covers.
//!
//! ```
//! use runslice_core::{Record, group_and_aggregate};
//!
//! let records = vec![Record::new("A", 1.0), Record::new("A", 3.0), Record::new("B", 5.0)];
//! let mut groups = group_and_aggregate(&records, &["category"]).unwrap();
//! groups.sort_by(|l, r| l.key.cmp(&r.key));
//!
//! assert_eq!(groups[0].key, "A");
//! assert_eq!(groups[0].mean, 2.0);
//! assert_eq!(groups[0].selection.runs().len(), 1);
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use aggregate::Mean;
pub use error::{Error, Result};
pub use group_by::{GroupBy, GroupByConfig, GroupResult, group_and_aggregate};
pub use key::{GroupKey, KeyPart};
pub use record::{Field, Record};
pub use selection::{Run, RunLengthSelection, SelectionIter};

mod aggregate;
mod error;
pub mod group_by;
mod key;
mod record;
pub mod selection;
