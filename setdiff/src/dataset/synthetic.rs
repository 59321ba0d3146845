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


use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::dataset::Dataset;
use crate::error::Error;

const DEFAULT_RATIO: f64 = 0.5;

/// Generator of a two-entity dataset with a known difference.
///
/// Entity `0` and entity `1` share `intersection` items. The `difference`
/// remaining items are split between them by `ratio`: entity `0` receives
/// `floor(difference * ratio)` of them and entity `1` the rest.
///
/// # Examples
///
/// ```
/// use setdiff::accuracy::compute_difference;
/// use setdiff::dataset::SyntheticDataset;
///
/// let dataset = SyntheticDataset::new(100, 40).seed(1).generate().unwrap();
/// let a = dataset.items(0).unwrap();
/// let b = dataset.items(1).unwrap();
/// assert_eq!(a.len(), 120);
/// assert_eq!(b.len(), 120);
/// assert_eq!(compute_difference(a, b), 40);
/// ```
#[derive(Debug, Clone)]
pub struct SyntheticDataset {
    intersection: usize,
    difference: usize,
    ratio: f64,
    seed: u64,
}

impl SyntheticDataset {
    /// Creates a generator with the default ratio of one half and seed zero.
    pub fn new(intersection: usize, difference: usize) -> Self {
        Self {
            intersection,
            difference,
            ratio: DEFAULT_RATIO,
            seed: 0,
        }
    }

    /// Sets the share of the difference given to entity `0`.
    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Sets the generator seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ErrorKind::InvalidArgument`] if the ratio is
    /// outside `[0, 1]` or more items are requested than distinct `u32`
    /// values exist.
    pub fn generate(&self) -> Result<Dataset, Error> {
        if !(0.0..=1.0).contains(&self.ratio) {
            return Err(Error::invalid_argument("ratio must be in [0, 1]")
                .with_context("ratio", self.ratio));
        }
        let total = self
            .intersection
            .checked_add(self.difference)
            .filter(|&total| total as u64 <= u64::from(u32::MAX) + 1)
            .ok_or_else(|| {
                Error::invalid_argument("too many synthetic items")
                    .with_context("intersection", self.intersection)
                    .with_context("difference", self.difference)
            })?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut seen = HashSet::with_capacity(total);
        let mut values = Vec::with_capacity(total);
        while values.len() < total {
            let value = rng.random::<u32>();
            if seen.insert(value) {
                values.push(u64::from(value));
            }
        }

        let (shared, rest) = values.split_at(self.intersection);
        let left_only = (self.difference as f64 * self.ratio).floor() as usize;
        let (left, right) = rest.split_at(left_only.min(rest.len()));

        let mut dataset = Dataset::new();
        dataset.insert(0, [shared, left].concat());
        dataset.insert(1, [shared, right].concat());
        Ok(dataset)
    }
}
