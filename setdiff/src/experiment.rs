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


//! Experiment driver: sketches every entity of a dataset, estimates the
//! difference of deterministically paired entities, and records the
//! estimate next to the exact difference.

use std::collections::BTreeMap;

use crate::accuracy::compute_difference;
use crate::common::DifferenceSketch;
use crate::common::Method;
use crate::dataset::Dataset;
use crate::dataset::EntityId;
use crate::error::Error;
use crate::gxbits::GxBits;
use crate::hll::Hll;
use crate::odd::Odd;
use crate::pairing::pair_entities;
use crate::record::EstimationRecord;
use crate::tow::Tow;

/// Evaluates `sketcher` on `dataset`, pairing entities under `seed`.
///
/// Records are returned in pair order.
///
/// # Errors
///
/// Propagates the first estimation failure, annotated with the `method`,
/// the `seed` and the failing `pair`.
///
/// # Examples
///
/// ```
/// use setdiff::dataset::SyntheticDataset;
/// use setdiff::experiment::evaluate;
/// use setdiff::odd::Odd;
///
/// let dataset = SyntheticDataset::new(100, 50).generate().unwrap();
/// let records = evaluate(&Odd::new(1024, 0).unwrap(), &dataset, 0).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].actual, 50);
/// ```
pub fn evaluate<S: DifferenceSketch>(
    sketcher: &S,
    dataset: &Dataset,
    seed: u32,
) -> Result<Vec<EstimationRecord>, Error> {
    let sketches: BTreeMap<EntityId, S::Sketch> = dataset
        .iter()
        .map(|(entity, items)| (entity, sketcher.build(items)))
        .collect();

    let pairs = pair_entities(dataset.entity_ids(), u64::from(seed));
    let mut records = Vec::with_capacity(pairs.len());
    for (a, b) in pairs {
        let (Some(items_a), Some(items_b), Some(sketch_a), Some(sketch_b)) = (
            dataset.items(a),
            dataset.items(b),
            sketches.get(&a),
            sketches.get(&b),
        ) else {
            continue;
        };
        let estimated = sketcher
            .estimate(sketch_a, sketch_b)
            .map_err(|err| {
                err.with_context("method", S::METHOD)
                    .with_context("seed", seed)
                    .with_context("pair", format!("({a}, {b})"))
            })?;
        let actual = compute_difference(items_a, items_b);
        log::debug!(
            "method={} seed={seed} pair=({a}, {b}) actual={actual} estimated={estimated:.3}",
            S::METHOD
        );
        records.push(EstimationRecord::new(actual, estimated));
    }

    log::debug!(
        "method={} seed={seed} evaluated {} pairs over {} entities",
        S::METHOD,
        records.len(),
        dataset.len()
    );
    Ok(records)
}

/// A configured sketch family selected at runtime.
#[derive(Debug, Clone)]
pub enum Sketcher {
    /// Odd sketch.
    Odd(Odd),
    /// Tug-of-War sketch.
    Tow(Tow),
    /// HyperLogLog sketch.
    Hll(Hll),
    /// Geometric XOR bits sketch.
    GxBits(GxBits),
}

impl Sketcher {
    /// Returns the wrapped family.
    pub fn method(&self) -> Method {
        match self {
            Sketcher::Odd(_) => Odd::METHOD,
            Sketcher::Tow(_) => Tow::METHOD,
            Sketcher::Hll(_) => Hll::METHOD,
            Sketcher::GxBits(_) => GxBits::METHOD,
        }
    }

    /// Returns the sketch size of the wrapped configuration.
    pub fn size(&self) -> usize {
        match self {
            Sketcher::Odd(s) => s.size(),
            Sketcher::Tow(s) => s.size(),
            Sketcher::Hll(s) => s.size(),
            Sketcher::GxBits(s) => s.size(),
        }
    }

    /// Runs [`evaluate`] with the wrapped configuration.
    pub fn evaluate(&self, dataset: &Dataset, seed: u32) -> Result<Vec<EstimationRecord>, Error> {
        match self {
            Sketcher::Odd(s) => evaluate(s, dataset, seed),
            Sketcher::Tow(s) => evaluate(s, dataset, seed),
            Sketcher::Hll(s) => evaluate(s, dataset, seed),
            Sketcher::GxBits(s) => evaluate(s, dataset, seed),
        }
    }
}

impl From<Odd> for Sketcher {
    fn from(value: Odd) -> Self {
        Sketcher::Odd(value)
    }
}

impl From<Tow> for Sketcher {
    fn from(value: Tow) -> Self {
        Sketcher::Tow(value)
    }
}

impl From<Hll> for Sketcher {
    fn from(value: Hll) -> Self {
        Sketcher::Hll(value)
    }
}

impl From<GxBits> for Sketcher {
    fn from(value: GxBits) -> Self {
        Sketcher::GxBits(value)
    }
}
