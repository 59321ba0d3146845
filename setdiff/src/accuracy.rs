// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.


//! Ground truth and aggregate error metrics.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::Error;
use crate::error::ErrorKind;
use crate::record::EstimationRecord;

/// Exact symmetric difference cardinality `|A ∪ B| - |A ∩ B|`.
///
/// Duplicates within a list are ignored.
///
/// # Examples
///
/// ```
/// use setdiff::accuracy::compute_difference;
///
/// assert_eq!(compute_difference(&[1, 2, 3], &[2, 3, 4]), 2);
/// ```
pub fn compute_difference<T: Eq + Hash>(a: &[T], b: &[T]) -> u64 {
    let a: HashSet<&T> = a.iter().collect();
    let b: HashSet<&T> = b.iter().collect();
    a.symmetric_difference(&b).count() as u64
}

/// Relative standard error against a single true difference `truth`:
/// `sqrt(mean((estimated - truth)^2)) / truth`.
///
/// # Errors
///
/// Returns [`ErrorKind::EmptyInput`] if `records` is empty and
/// [`ErrorKind::InvalidArgument`] if `truth` is zero.
pub fn relative_standard_error(records: &[EstimationRecord], truth: u64) -> Result<f64, Error> {
    if records.is_empty() {
        return Err(Error::new(ErrorKind::EmptyInput, "no records to aggregate"));
    }
    if truth == 0 {
        return Err(Error::invalid_argument("true difference must be positive"));
    }
    let truth = truth as f64;
    let mean_squared = records
        .iter()
        .map(|r| {
            let err = r.estimated - truth;
            err * err
        })
        .sum::<f64>()
        / records.len() as f64;
    Ok(mean_squared.sqrt() / truth)
}

/// Average absolute relative error `mean(|actual - estimated| / actual)`.
///
/// Records with `actual == 0` are skipped.
///
/// # Errors
///
/// Returns [`ErrorKind::EmptyInput`] if no record has a positive actual difference.
pub fn average_absolute_relative_error(records: &[EstimationRecord]) -> Result<f64, Error> {
    let (sum, count) = records
        .iter()
        .filter(|r| r.actual > 0)
        .fold((0.0, 0usize), |(sum, count), r| {
            let actual = r.actual as f64;
            (sum + (actual - r.estimated).abs() / actual, count + 1)
        });
    if count == 0 {
        return Err(
            Error::new(ErrorKind::EmptyInput, "no records with a positive actual difference")
                .with_context("records", records.len()),
        );
    }
    Ok(sum / count as f64)
}

/// Aggregate error metric of an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMetric {
    /// Relative standard error against a known true difference.
    Rse {
        /// The true difference shared by every pair.
        truth: u64,
    },
    /// Average absolute relative error against per-pair actual differences.
    Aare,
}

impl ErrorMetric {
    /// Short name of the metric.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorMetric::Rse { .. } => "RSE",
            ErrorMetric::Aare => "AARE",
        }
    }

    /// Reduces `records` to the metric.
    pub fn evaluate(&self, records: &[EstimationRecord]) -> Result<f64, Error> {
        match *self {
            ErrorMetric::Rse { truth } => relative_standard_error(records, truth),
            ErrorMetric::Aare => average_absolute_relative_error(records),
        }
    }
}
